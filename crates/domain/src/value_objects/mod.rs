//! Value objects for story requests

mod creativity;
mod premises;
mod story_length;
mod theme;

pub use creativity::{
    require_temperature_in_range, CreativityLevel, UnknownCreativityLevel, DEFAULT_TEMPERATURE,
    MAX_TEMPERATURE, MIN_TEMPERATURE,
};
pub use premises::Premises;
pub use story_length::{
    require_length_in_range, ReadingEstimate, DEFAULT_STORY_LENGTH, MAX_STORY_LENGTH,
    MIN_STORY_LENGTH,
};
pub use theme::{is_catalog_theme, STORY_THEMES};
