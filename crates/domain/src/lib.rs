//! StorySmith domain types.
//!
//! Pure types with no I/O: the story request, its validation rules, the
//! creativity scale, and the shape of a generated story.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{GeneratedStory, StoryMetadata, StoryRequest};
pub use error::{StoryField, ValidationError};
pub use value_objects::{
    is_catalog_theme, CreativityLevel, Premises, ReadingEstimate, UnknownCreativityLevel,
    DEFAULT_STORY_LENGTH, DEFAULT_TEMPERATURE, MAX_STORY_LENGTH, MAX_TEMPERATURE,
    MIN_STORY_LENGTH, MIN_TEMPERATURE, STORY_THEMES,
};
