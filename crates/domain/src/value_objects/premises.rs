//! Story premises (themes)

use serde::{Deserialize, Serialize};

/// The thematic premises of a story.
///
/// Accepts either a single string or a list of strings on the wire. The
/// shape is preserved so the response metadata echoes exactly what the
/// caller sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Premises {
    One(String),
    Many(Vec<String>),
}

impl Premises {
    /// Whether no premise was supplied.
    ///
    /// A list is empty when it has no elements; a single premise is empty
    /// when it is blank.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(premise) => premise.trim().is_empty(),
            Self::Many(premises) => premises.is_empty(),
        }
    }

    /// Render the premises for substitution into a prompt.
    ///
    /// Lists are joined with `", "`; a single premise is used verbatim.
    pub fn joined(&self) -> String {
        match self {
            Self::One(premise) => premise.clone(),
            Self::Many(premises) => premises.join(", "),
        }
    }
}

impl From<&str> for Premises {
    fn from(premise: &str) -> Self {
        Self::One(premise.to_string())
    }
}

impl From<String> for Premises {
    fn from(premise: String) -> Self {
        Self::One(premise)
    }
}

impl From<Vec<String>> for Premises {
    fn from(premises: Vec<String>) -> Self {
        Self::Many(premises)
    }
}

impl<const N: usize> From<[&str; N]> for Premises {
    fn from(premises: [&str; N]) -> Self {
        Self::Many(premises.iter().map(|p| p.to_string()).collect())
    }
}
