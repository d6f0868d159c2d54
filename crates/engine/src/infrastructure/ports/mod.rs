//! Port traits for infrastructure boundaries.
//!
//! The provider call is the only abstraction in the engine. It exists so the
//! hosted provider can be swapped (Groq -> any OpenAI-compatible endpoint)
//! and so tests can substitute a deterministic fake.

mod error;
mod external;

pub use error::LlmError;
pub use external::{
    ChatMessage, FinishReason, LlmPort, LlmRequest, LlmResponse, MessageRole, TokenUsage,
};

#[cfg(test)]
pub use external::MockLlmPort;
