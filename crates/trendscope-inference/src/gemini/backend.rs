//! Gemini inference backend implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn, Span};

use trendscope_core::{
    defaults, logging, Error, GenerationBackend, GroundedGeneration, Result,
};

use super::error::{to_core_error, GeminiErrorCode};
use super::types::*;
use crate::config::GeminiConfig;

/// Gemini `generateContent` backend.
pub struct GeminiBackend {
    client: Client,
    config: GeminiConfig,
    api_key: String,
}

impl GeminiBackend {
    /// Create a new backend. Fails when the configuration carries no API key.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::Config("GEMINI_API_KEY not set".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Inference(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            subsystem = "inference",
            component = "gemini",
            model = %config.model,
            base_url = %config.base_url,
            "Initializing Gemini backend"
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Create from environment variables (see [`GeminiConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build an authenticated POST to the generate endpoint.
    fn build_request(&self) -> reqwest::RequestBuilder {
        self.client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
    }

    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let start = Instant::now();

        let response = self
            .build_request()
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (error_status, message) = match serde_json::from_str::<GeminiErrorResponse>(&body)
            {
                Ok(parsed) => (parsed.error.status, parsed.error.message),
                Err(_) => (String::new(), body),
            };
            let code = GeminiErrorCode::from_response(status.as_u16(), &error_status);
            warn!(
                status = status.as_u16(),
                error_status = %error_status,
                retryable = code.is_retryable(),
                "Gemini returned an error"
            );
            return Err(to_core_error(
                code,
                &format!("Gemini returned {}: {}", status, message),
            ));
        }

        let body = response.text().await?;
        let result: GenerateContentResponse = serde_json::from_str(&body)?;

        let elapsed = start.elapsed().as_millis() as u64;
        Span::current().record(logging::DURATION_MS, elapsed);
        if elapsed > defaults::SLOW_GENERATION_MS {
            warn!(duration_ms = elapsed, slow = true, "Slow generation operation");
        }
        Ok(result)
    }

    async fn generate_text(&self, request: GenerateContentRequest) -> Result<String> {
        let response = self.generate_content(&request).await?;
        let text = response.text();
        Span::current().record(logging::RESPONSE_LEN, text.len());
        debug!(response_len = text.len(), "Generation complete");
        Ok(text)
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    #[instrument(
        skip(self, prompt),
        fields(
            subsystem = "inference",
            component = "gemini",
            op = "generate",
            model = %self.config.model,
            prompt_len = prompt.len(),
            json_mode = false,
            response_len = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        )
    )]
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_text(GenerateContentRequest::user_prompt(prompt))
            .await
    }

    #[instrument(
        skip(self, prompt),
        fields(
            subsystem = "inference",
            component = "gemini",
            op = "generate_json",
            model = %self.config.model,
            prompt_len = prompt.len(),
            json_mode = true,
            response_len = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        )
    )]
    async fn generate_json(&self, prompt: &str) -> Result<String> {
        self.generate_text(GenerateContentRequest::user_prompt(prompt).json_mode())
            .await
    }

    #[instrument(
        skip(self, prompt),
        fields(
            subsystem = "inference",
            component = "gemini",
            op = "generate_grounded",
            model = %self.config.model,
            prompt_len = prompt.len(),
            result_count = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        )
    )]
    async fn generate_grounded(&self, prompt: &str) -> Result<GroundedGeneration> {
        let request = GenerateContentRequest::user_prompt(prompt).with_search();
        let response = self.generate_content(&request).await?;
        let sources = response.sources();
        Span::current().record(logging::RESULT_COUNT, sources.len());
        debug!(sources = sources.len(), "Grounded generation complete");
        Ok(GroundedGeneration {
            text: response.text(),
            sources,
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> GeminiConfig {
        GeminiConfig::default().with_api_key("test-key")
    }

    #[test]
    fn test_new_requires_api_key() {
        let result = GeminiBackend::new(GeminiConfig::default());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_backend_creation() {
        let backend = GeminiBackend::new(configured()).unwrap();
        assert_eq!(backend.config().base_url, defaults::GEMINI_URL);
        assert_eq!(backend.model_name(), defaults::GEN_MODEL);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let backend =
            GeminiBackend::new(configured().with_base_url("http://localhost:8080/v1beta/"))
                .unwrap();
        assert_eq!(
            backend.endpoint(),
            format!(
                "http://localhost:8080/v1beta/models/{}:generateContent",
                defaults::GEN_MODEL
            )
        );
    }
}
