//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::config::ProviderConfig;
use crate::infrastructure::groq::GroqClient;
use crate::infrastructure::ports::LlmPort;
use crate::use_cases::{GenerateStory, StoryUseCases};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state and used directly by the CLI.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub story: StoryUseCases,
}

impl App {
    /// Wire the application around any generation provider.
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        let story = StoryUseCases::new(Arc::new(GenerateStory::new(llm)));

        Self {
            use_cases: UseCases { story },
        }
    }

    /// Wire the application around the configured Groq provider.
    pub fn with_provider_config(config: &ProviderConfig) -> Self {
        tracing::info!(
            model = %config.model,
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "Configuring generation provider"
        );
        Self::new(Arc::new(GroqClient::new(config)))
    }
}
