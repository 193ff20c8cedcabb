//! Mock generation backend for deterministic testing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trendscope_inference::mock::MockGenerationBackend;
//! use trendscope_core::GenerationBackend;
//!
//! #[tokio::test]
//! async fn test_with_mock_backend() {
//!     let backend = MockGenerationBackend::new().with_fixed_response("Test response");
//!     assert_eq!(backend.generate("anything").await.unwrap(), "Test response");
//! }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use trendscope_core::{Error, GenerationBackend, GroundedGeneration, GroundingSource, Result};

/// Mock generation backend for testing.
#[derive(Clone)]
pub struct MockGenerationBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    model: String,
    fixed_responses: HashMap<String, String>,
    default_response: String,
    json_response: Option<String>,
    sources: Vec<GroundingSource>,
    latency_ms: u64,
    failure_rate: f64,
    failure_message: Option<String>,
}

/// One recorded backend call.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub operation: String,
    pub input: String,
    pub timestamp: std::time::Instant,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            model: "mock-gemini".to_string(),
            fixed_responses: HashMap::new(),
            default_response: "Mock response".to_string(),
            json_response: None,
            sources: Vec::new(),
            latency_ms: 0,
            failure_rate: 0.0,
            failure_message: None,
        }
    }
}

impl MockGenerationBackend {
    /// Create a new mock backend with default configuration.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the reported model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).model = model.into();
        self
    }

    /// Set a fixed response for every generation request.
    pub fn with_fixed_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).default_response = response.into();
        self
    }

    /// Set the response for JSON-mode requests only.
    pub fn with_json_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).json_response = Some(response.into());
        self
    }

    /// Add a response mapping for a specific prompt.
    pub fn with_response_mapping(
        mut self,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Arc::make_mut(&mut self.config)
            .fixed_responses
            .insert(input.into(), output.into());
        self
    }

    /// Citations returned by grounded generation.
    pub fn with_sources(mut self, sources: Vec<GroundingSource>) -> Self {
        Arc::make_mut(&mut self.config).sources = sources;
        self
    }

    /// Set simulated latency for all operations.
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        Arc::make_mut(&mut self.config).latency_ms = latency_ms;
        self
    }

    /// Set failure rate (0.0 - 1.0) for testing error handling.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        Arc::make_mut(&mut self.config).failure_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Fail every call with the given message.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        let config = Arc::make_mut(&mut self.config);
        config.failure_rate = 1.0;
        config.failure_message = Some(message.into());
        self
    }

    fn log(&self) -> MutexGuard<'_, Vec<MockCall>> {
        self.call_log.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get all logged calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.log().clone()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.log().clear()
    }

    /// Number of calls for one operation ("generate", "generate_json",
    /// "generate_grounded").
    pub fn call_count(&self, operation: &str) -> usize {
        self.log()
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    fn log_call(&self, operation: &str, input: &str) {
        self.log().push(MockCall {
            operation: operation.to_string(),
            input: input.to_string(),
            timestamp: std::time::Instant::now(),
        });
    }

    fn should_fail(&self) -> bool {
        use rand::Rng;
        if self.config.failure_rate >= 1.0 {
            true
        } else if self.config.failure_rate > 0.0 {
            rand::thread_rng().gen::<f64>() < self.config.failure_rate
        } else {
            false
        }
    }

    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }
    }

    async fn respond(&self, operation: &str, prompt: &str) -> Result<String> {
        self.log_call(operation, prompt);
        self.simulate_latency().await;

        if self.should_fail() {
            let message = self
                .config
                .failure_message
                .clone()
                .unwrap_or_else(|| "Simulated failure for testing".to_string());
            return Err(Error::Inference(message));
        }

        if let Some(response) = self.config.fixed_responses.get(prompt) {
            return Ok(response.clone());
        }
        Ok(self.config.default_response.clone())
    }
}

impl Default for MockGenerationBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationBackend for MockGenerationBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.respond("generate", prompt).await
    }

    async fn generate_json(&self, prompt: &str) -> Result<String> {
        let response = self.respond("generate_json", prompt).await?;
        match &self.config.json_response {
            Some(json) if !self.config.fixed_responses.contains_key(prompt) => Ok(json.clone()),
            _ => Ok(response),
        }
    }

    async fn generate_grounded(&self, prompt: &str) -> Result<GroundedGeneration> {
        let text = self.respond("generate_grounded", prompt).await?;
        Ok(GroundedGeneration {
            text,
            sources: self.config.sources.clone(),
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
