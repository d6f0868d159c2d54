//! Story request entity

use serde::{Deserialize, Serialize};

use crate::error::{StoryField, ValidationError};
use crate::value_objects::{
    require_length_in_range, require_temperature_in_range, Premises, DEFAULT_TEMPERATURE,
};

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

/// The parameters of a single story generation.
///
/// Constructed per call and discarded once the response is produced. Field
/// values are carried exactly as received: validation only inspects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryRequest {
    pub char_name: String,
    pub char_type: String,
    pub char_persona: String,
    pub char_location: String,
    /// Approximate target sentence count.
    pub story_length: u32,
    pub story_premise: Premises,
    /// Sampling temperature passed through to the provider.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl StoryRequest {
    pub fn new(
        char_name: impl Into<String>,
        char_type: impl Into<String>,
        char_persona: impl Into<String>,
        char_location: impl Into<String>,
        story_length: u32,
        story_premise: impl Into<Premises>,
    ) -> Self {
        Self {
            char_name: char_name.into(),
            char_type: char_type.into(),
            char_persona: char_persona.into(),
            char_location: char_location.into(),
            story_length,
            story_premise: story_premise.into(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Check every constraint, reporting the first one violated.
    ///
    /// Order: character name, type, persona, location, premises, then the
    /// story length and temperature bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.char_name, StoryField::Name)?;
        require_non_empty(&self.char_type, StoryField::Type)?;
        require_non_empty(&self.char_persona, StoryField::Persona)?;
        require_non_empty(&self.char_location, StoryField::Location)?;
        if self.story_premise.is_empty() {
            return Err(ValidationError::NoPremises);
        }
        require_length_in_range(self.story_length)?;
        require_temperature_in_range(self.temperature)?;
        Ok(())
    }
}

/// Validate a string is non-empty after trimming.
fn require_non_empty(value: &str, field: StoryField) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty(field));
    }
    Ok(())
}
