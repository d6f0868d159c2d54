//! Use cases - User story orchestration.

pub mod story;

pub use story::{GenerateStory, StoryError, StoryUseCases};
