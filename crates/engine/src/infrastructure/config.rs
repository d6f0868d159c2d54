//! Process configuration.
//!
//! Read once at startup and passed explicitly to whatever needs it. Nothing
//! downstream touches the process environment.

use std::path::Path;

use super::groq::{DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL};

/// Default transport timeout for provider calls, in seconds.
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Settings for the text-generation provider.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub max_tokens: Option<u32>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl ProviderConfig {
    /// Read provider settings from the environment.
    ///
    /// A missing `GROQ_API_KEY` is an error: there is no anonymous mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key =
            non_empty(lookup("GROQ_API_KEY")).ok_or(ConfigError::Missing("GROQ_API_KEY"))?;
        let base_url = non_empty(lookup("GROQ_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_GROQ_BASE_URL.to_string());
        let model =
            non_empty(lookup("STORY_MODEL")).unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string());
        let timeout_secs = parse_or(
            "LLM_TIMEOUT_SECS",
            lookup("LLM_TIMEOUT_SECS"),
            DEFAULT_LLM_TIMEOUT_SECS,
        )?;
        let max_tokens = non_empty(lookup("LLM_MAX_TOKENS"))
            .map(|raw| parse_value("LLM_MAX_TOKENS", &raw))
            .transpose()?;

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout_secs,
            max_tokens,
        })
    }
}

/// Settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `*` or a comma-separated list of allowed origins.
    pub cors_allowed_origins: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host =
            non_empty(lookup("SERVER_HOST")).unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string());
        let port = match non_empty(lookup("SERVER_PORT")) {
            Some(raw) => parse_value("SERVER_PORT", &raw)?,
            None => parse_or("PORT", lookup("PORT"), DEFAULT_SERVER_PORT)?,
        };
        let cors_allowed_origins = non_empty(lookup("CORS_ALLOWED_ORIGINS"));

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    /// Host and port to bind. The host may be a name (`localhost`); it is
    /// resolved when the listener binds.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

/// Everything the server binary needs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            provider: ProviderConfig::from_env()?,
            server: ServerConfig::from_env()?,
        })
    }
}

/// Load `.env.local` then `.env` from the working directory and the
/// workspace root, without overriding variables already set.
pub fn load_dotenv() {
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    for dir in [Path::new("."), workspace_root.as_path()] {
        // Prefer local overrides.
        for filename in [".env.local", ".env"] {
            let path = dir.join(filename);
            if path.exists() {
                let _ = dotenvy::from_path(path);
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty(raw) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}
