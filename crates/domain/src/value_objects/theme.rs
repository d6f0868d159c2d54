//! Catalog of suggested story themes

/// Themes offered to users when choosing premises.
///
/// The catalog is advisory: premises outside it are accepted as-is.
pub const STORY_THEMES: [&str; 12] = [
    "Love",
    "Adventure",
    "Mystery",
    "Horror",
    "Comedy",
    "Sci-Fi",
    "Fantasy",
    "Thriller",
    "Drama",
    "Action",
    "Slice of Life",
    "Historical",
];

/// Whether a premise is one of the catalog themes (case-insensitive).
pub fn is_catalog_theme(premise: &str) -> bool {
    let premise = premise.trim();
    STORY_THEMES
        .iter()
        .any(|theme| theme.eq_ignore_ascii_case(premise))
}
