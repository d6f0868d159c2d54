//! Validation errors for story requests
//!
//! A story request is rejected with the first constraint it violates. Each
//! variant carries enough context for the caller to correct the input
//! without a second round trip.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A required field of a story request, listed in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoryField {
    #[serde(rename = "char_name")]
    Name,
    #[serde(rename = "char_type")]
    Type,
    #[serde(rename = "char_persona")]
    Persona,
    #[serde(rename = "char_location")]
    Location,
    #[serde(rename = "story_premise")]
    Premises,
}

impl StoryField {
    /// Wire name of the field in a story request payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "char_name",
            Self::Type => "char_type",
            Self::Persona => "char_persona",
            Self::Location => "char_location",
            Self::Premises => "story_premise",
        }
    }

    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Character name",
            Self::Type => "Character type",
            Self::Persona => "Character persona",
            Self::Location => "Character location",
            Self::Premises => "Story premise",
        }
    }
}

impl fmt::Display for StoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a story request was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    #[error("{} cannot be empty", .field.label())]
    EmptyField { field: StoryField },

    /// No premise was supplied.
    #[error("At least one story premise must be selected")]
    NoPremises,

    #[error("Story length must be between {min} and {max} sentences (got {value})")]
    LengthOutOfRange { value: u32, min: u32, max: u32 },

    #[error("Temperature must be between {min:.1} and {max:.1} (got {value})")]
    TemperatureOutOfRange { value: f64, min: f64, max: f64 },
}

impl ValidationError {
    pub fn empty(field: StoryField) -> Self {
        Self::EmptyField { field }
    }

    /// The required field this error names, if it is one of the five
    /// required-field checks.
    pub fn field(&self) -> Option<StoryField> {
        match self {
            Self::EmptyField { field } => Some(*field),
            Self::NoPremises => Some(StoryField::Premises),
            Self::LengthOutOfRange { .. } | Self::TemperatureOutOfRange { .. } => None,
        }
    }

    /// Whether this is a numeric bound violation rather than a missing field.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::LengthOutOfRange { .. } | Self::TemperatureOutOfRange { .. }
        )
    }
}
