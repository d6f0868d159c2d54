//! Generated story and its metadata

use serde::{Deserialize, Serialize};

use super::StoryRequest;
use crate::value_objects::Premises;

/// Descriptive metadata returned alongside a generated story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryMetadata {
    pub character: String,
    /// Requested length restated as `"<N> sentences"`.
    pub length: String,
    pub premises: Premises,
    pub temperature: f64,
}

impl StoryMetadata {
    pub fn from_request(request: &StoryRequest) -> Self {
        Self {
            character: request.char_name.clone(),
            length: format!("{} sentences", request.story_length),
            premises: request.story_premise.clone(),
            temperature: request.temperature,
        }
    }
}

/// A successfully generated story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedStory {
    /// Story text exactly as the provider returned it.
    pub response: String,
    pub metadata: StoryMetadata,
}

impl GeneratedStory {
    pub fn new(response: impl Into<String>, metadata: StoryMetadata) -> Self {
        Self {
            response: response.into(),
            metadata,
        }
    }

    /// Plain-text export of the story with a title line.
    pub fn export_text(&self) -> String {
        format!(
            "Title: Story of {}\n\n{}",
            self.metadata.character, self.response
        )
    }

    /// Default file name for the plain-text export.
    pub fn export_file_name(&self) -> String {
        format!(
            "story_{}.txt",
            self.metadata.character.to_lowercase().replace(' ', "_")
        )
    }
}
