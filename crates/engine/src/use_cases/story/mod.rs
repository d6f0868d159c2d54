//! Story generation use case.
//!
//! The one operation both entry points share: validate the request, render
//! the prompt, make a single provider call, and attach metadata.

use std::sync::Arc;

use storysmith_domain::{GeneratedStory, StoryMetadata, StoryRequest, ValidationError};
use uuid::Uuid;

use crate::infrastructure::ports::{FinishReason, LlmError, LlmPort, LlmRequest};
use crate::prompt_templates::build_story_prompt;

pub struct StoryUseCases {
    pub generate: Arc<GenerateStory>,
}

impl StoryUseCases {
    pub fn new(generate: Arc<GenerateStory>) -> Self {
        Self { generate }
    }
}

/// Errors from generating a story.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// The request was rejected before reaching the provider.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The provider call failed. Never retried.
    #[error("{}", .0.message())]
    ExternalService(#[from] LlmError),
}

/// Generates a story from a validated request.
pub struct GenerateStory {
    llm: Arc<dyn LlmPort>,
}

impl GenerateStory {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    /// Generate a story.
    ///
    /// # Returns
    /// * `Ok(GeneratedStory)` - Provider text with request metadata
    /// * `Err(StoryError::Validation)` - The request is invalid; no provider call was made
    /// * `Err(StoryError::ExternalService)` - The provider call failed
    pub async fn execute(&self, request: StoryRequest) -> Result<GeneratedStory, StoryError> {
        let request_id = Uuid::new_v4();

        if let Err(e) = request.validate() {
            tracing::info!(
                request_id = %request_id,
                field = ?e.field(),
                error = %e,
                "Rejected story request"
            );
            return Err(e.into());
        }

        let prompt = build_story_prompt(&request);
        tracing::debug!(
            request_id = %request_id,
            character = %request.char_name,
            story_length = request.story_length,
            temperature = request.temperature,
            prompt_len = prompt.len(),
            "Generating story"
        );

        let llm_request = LlmRequest::from_prompt(prompt).with_temperature(request.temperature);
        let response = match self.llm.generate(llm_request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(request_id = %request_id, error = %e, "Story generation failed");
                return Err(e.into());
            }
        };

        if response.finish_reason == FinishReason::Length {
            tracing::warn!(
                request_id = %request_id,
                "Provider stopped at its token limit; story may be truncated"
            );
        }

        tracing::info!(
            request_id = %request_id,
            character = %request.char_name,
            story_chars = response.content.len(),
            total_tokens = response.usage.map(|u| u.total_tokens),
            "Story generated"
        );

        Ok(GeneratedStory::new(
            response.content,
            StoryMetadata::from_request(&request),
        ))
    }
}
