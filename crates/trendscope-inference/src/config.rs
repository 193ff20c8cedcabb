//! Gemini backend configuration.

use trendscope_core::defaults;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration for [`crate::GeminiBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// Base URL of the Generative Language API.
    pub base_url: String,
    /// API key. Without one the assistant runs in degraded mode.
    pub api_key: Option<String>,
    /// Model used for every generation call.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::GEMINI_URL.to_string(),
            api_key: None,
            model: defaults::GEN_MODEL.to_string(),
            timeout_seconds: defaults::GEN_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    /// Load from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `GEMINI_API_KEY` | unset |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com/v1beta` |
    /// | `GEMINI_MODEL` | `gemini-2.5-flash-preview-04-17` |
    /// | `GEMINI_TIMEOUT_SECS` | 60 |
    ///
    /// An empty or whitespace-only key counts as unset.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| defaults::GEMINI_URL.to_string()),
            api_key: std::env::var(GEMINI_API_KEY_ENV)
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| defaults::GEN_MODEL.to_string()),
            timeout_seconds: std::env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::GEN_TIMEOUT_SECS),
        }
    }

    /// Override the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether an API key is available.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
