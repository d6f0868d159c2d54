//! Error types for port operations.

/// Failure of a call to the text-generation provider.
///
/// Callers do not distinguish the cause further: network, auth, rate
/// limiting, and malformed responses all surface with the provider's
/// message intact.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// The underlying message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::RequestFailed(message) | Self::InvalidResponse(message) => message,
        }
    }
}
