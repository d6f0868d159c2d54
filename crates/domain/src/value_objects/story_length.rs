//! Story length bounds and reading-time estimates
//!
//! Story length is an approximate target sentence count. It is advisory to
//! the model and never enforced on the generated text.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Shortest story a user may request, in sentences.
pub const MIN_STORY_LENGTH: u32 = 10;

/// Longest story a user may request, in sentences.
pub const MAX_STORY_LENGTH: u32 = 500;

/// Length offered when the user does not choose one.
pub const DEFAULT_STORY_LENGTH: u32 = 50;

/// Rough words-per-sentence used for estimates.
const WORDS_PER_SENTENCE: u32 = 15;

/// Reading speed used for estimates.
const WORDS_PER_MINUTE: u32 = 200;

/// Check a story length lies within the accepted range.
pub fn require_length_in_range(value: u32) -> Result<(), ValidationError> {
    if !(MIN_STORY_LENGTH..=MAX_STORY_LENGTH).contains(&value) {
        return Err(ValidationError::LengthOutOfRange {
            value,
            min: MIN_STORY_LENGTH,
            max: MAX_STORY_LENGTH,
        });
    }
    Ok(())
}

/// Expected size of a story of a given sentence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingEstimate {
    pub words: u32,
    pub minutes: u32,
}

impl ReadingEstimate {
    pub fn for_sentences(sentences: u32) -> Self {
        let words = sentences.saturating_mul(WORDS_PER_SENTENCE);
        Self {
            words,
            minutes: (words / WORDS_PER_MINUTE).max(1),
        }
    }
}
