//! Story entities

mod story;
mod story_request;

pub use story::{GeneratedStory, StoryMetadata};
pub use story_request::StoryRequest;
