//! Creator assistant: the AI operations the dashboard calls.
//!
//! Every operation resolves to displayable content. Without an API key the
//! assistant answers each call with a fixed explanation and never contacts
//! the backend; backend failures and unparseable output are logged and
//! replaced with fallback text.

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use trendscope_core::{
    defaults, ContentIdea, DailyBriefing, GenerationBackend, GroundedAnswer,
    KeywordSummaryRequest,
};

use crate::config::{GeminiConfig, GEMINI_API_KEY_ENV};
use crate::gemini::GeminiBackend;
use crate::json_recovery::{parse_json_from_text, unwrap_single_array};
use crate::prompts;

/// Fallback texts shown in place of model output.
pub mod fallback {
    pub const NOT_CONFIGURED_GREETING: &str = "Hello Creator!";
    pub const NOT_CONFIGURED_BRIEFING: &str =
        "Gemini API key not configured. Daily briefing unavailable.";
    pub const NOT_CONFIGURED_SUMMARY: &str =
        "Gemini API key not configured. Analysis summary unavailable.";
    pub const NOT_CONFIGURED_GROUNDED: &str =
        "Gemini API key not configured. Grounded search unavailable.";

    pub const UNPARSED_BRIEFING_GREETING: &str = "Hello!";
    pub const UNPARSED_BRIEFING_PREFIX: &str =
        "Could not parse daily briefing from AI. The raw response was: ";
    pub const FAILED_BRIEFING_GREETING: &str = "Oops!";
    pub const FAILED_BRIEFING: &str =
        "Could not fetch daily briefing due to an error. Please try again later.";

    pub const EMPTY_RESPONSE: &str = "No response from AI.";
    pub const FAILED_SUMMARY: &str = "Could not fetch AI summary due to an error.";
    pub const FAILED_GROUNDED: &str = "Could not fetch grounded answer due to an error.";

    /// Marker of a backend error caused by a model without tool support.
    pub const TOOLS_UNSUPPORTED: &str = "does not support tools";
}

fn idea(hook: &str, format: &str, full_idea: impl Into<String>) -> ContentIdea {
    ContentIdea::new(hook, format).with_full_idea(full_idea)
}

fn not_configured_ideas() -> Vec<ContentIdea> {
    vec![idea(
        "API Key Error",
        "Please configure Gemini API Key.",
        "Content ideas cannot be generated.",
    )]
}

fn unformatted_ideas(raw: &str) -> Vec<ContentIdea> {
    let preview: String = raw.chars().take(defaults::RAW_IDEA_PREVIEW_CHARS).collect();
    vec![idea(
        "AI couldn't format ideas perfectly.",
        "Check raw output below.",
        format!("{}...", preview),
    )]
}

fn unparsed_ideas() -> Vec<ContentIdea> {
    vec![idea(
        "Error",
        "Failed to generate ideas or parse response.",
        "Please try again.",
    )]
}

fn failed_ideas() -> Vec<ContentIdea> {
    vec![idea(
        "API Error",
        "Could not connect to AI.",
        "Please check your connection or API key and try again.",
    )]
}

/// AI collaborator that never fails toward its callers.
#[derive(Clone)]
pub struct CreatorAssistant {
    backend: Option<Arc<dyn GenerationBackend>>,
}

impl CreatorAssistant {
    /// Assistant backed by `backend`.
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Assistant without a backend; every call returns its fixed
    /// "not configured" answer.
    pub fn unconfigured() -> Self {
        Self { backend: None }
    }

    /// Build from a Gemini configuration. A missing key, or a backend that
    /// cannot be constructed, yields an unconfigured assistant.
    pub fn from_config(config: GeminiConfig) -> Self {
        if !config.is_configured() {
            error!(
                "{} environment variable not set. Gemini API calls will fail.",
                GEMINI_API_KEY_ENV
            );
            return Self::unconfigured();
        }
        match GeminiBackend::new(config) {
            Ok(backend) => {
                info!(model = backend.model_name(), "Creator assistant ready");
                Self::new(Arc::new(backend))
            }
            Err(e) => {
                error!(error = %e, "Failed to initialize Gemini backend");
                Self::unconfigured()
            }
        }
    }

    /// Build from environment variables (see [`GeminiConfig::from_env`]).
    pub fn from_env() -> Self {
        Self::from_config(GeminiConfig::from_env())
    }

    /// Whether a backend is available.
    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Model name of the backend, if configured.
    pub fn model_name(&self) -> Option<&str> {
        self.backend.as_deref().map(|b| b.model_name())
    }

    /// Greeting plus one-paragraph summary of the short-form landscape.
    #[instrument(skip(self), fields(subsystem = "inference", component = "assistant", op = "daily_briefing"))]
    pub async fn daily_briefing(&self) -> DailyBriefing {
        let Some(backend) = &self.backend else {
            return DailyBriefing::new(
                fallback::NOT_CONFIGURED_GREETING,
                fallback::NOT_CONFIGURED_BRIEFING,
            );
        };

        match backend.generate_json(prompts::DAILY_BRIEFING).await {
            Ok(raw) => match parse_json_from_text::<DailyBriefing>(&raw) {
                Some(briefing) => briefing,
                None => {
                    warn!(response_len = raw.len(), "Daily briefing was not valid JSON");
                    DailyBriefing::new(
                        fallback::UNPARSED_BRIEFING_GREETING,
                        format!("{}{}", fallback::UNPARSED_BRIEFING_PREFIX, raw),
                    )
                }
            },
            Err(e) => {
                error!(error = %e, "Error fetching daily briefing");
                DailyBriefing::new(
                    fallback::FAILED_BRIEFING_GREETING,
                    fallback::FAILED_BRIEFING,
                )
            }
        }
    }

    /// Short market summary for a keyword, built from its analytics context.
    #[instrument(
        skip(self, request),
        fields(subsystem = "inference", component = "assistant", op = "keyword_summary", keyword = %request.keyword)
    )]
    pub async fn keyword_analysis_summary(&self, request: &KeywordSummaryRequest) -> String {
        let Some(backend) = &self.backend else {
            return fallback::NOT_CONFIGURED_SUMMARY.to_string();
        };

        match backend.generate(&prompts::keyword_summary(request)).await {
            Ok(text) if text.is_empty() => fallback::EMPTY_RESPONSE.to_string(),
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "Error fetching keyword analysis summary");
                fallback::FAILED_SUMMARY.to_string()
            }
        }
    }

    /// Three to five video ideas for a keyword, given its market summary.
    #[instrument(
        skip(self, keyword, summary),
        fields(subsystem = "inference", component = "assistant", op = "content_ideas", keyword = %keyword)
    )]
    pub async fn content_ideas(&self, keyword: &str, summary: &str) -> Vec<ContentIdea> {
        let Some(backend) = &self.backend else {
            return not_configured_ideas();
        };

        let raw = match backend
            .generate_json(&prompts::content_ideas(keyword, summary))
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Error generating content ideas");
                return failed_ideas();
            }
        };

        if let Some(ideas) = parse_json_from_text::<Vec<ContentIdea>>(&raw)
            .or_else(|| unwrap_single_array::<Vec<ContentIdea>>(&raw))
        {
            debug!(result_count = ideas.len(), "Parsed content ideas");
            return ideas;
        }

        warn!(
            response_len = raw.len(),
            "Could not parse content ideas as JSON array"
        );
        if raw.contains("hook") && raw.contains("format") {
            unformatted_ideas(&raw)
        } else {
            unparsed_ideas()
        }
    }

    /// Answer a free-text query with web-search grounding and citations.
    #[instrument(
        skip(self, query),
        fields(subsystem = "inference", component = "assistant", op = "grounded_answer", prompt_len = query.len())
    )]
    pub async fn grounded_answer(&self, query: &str) -> GroundedAnswer {
        let Some(backend) = &self.backend else {
            return GroundedAnswer {
                answer: fallback::NOT_CONFIGURED_GROUNDED.to_string(),
                sources: Vec::new(),
            };
        };

        match backend.generate_grounded(query).await {
            Ok(generation) => {
                let answer = if generation.text.is_empty() {
                    fallback::EMPTY_RESPONSE.to_string()
                } else {
                    generation.text
                };
                GroundedAnswer {
                    answer,
                    sources: generation.sources,
                }
            }
            Err(e) => {
                error!(error = %e, "Error fetching grounded answer");
                let message = e.to_string();
                let answer = if message.contains(fallback::TOOLS_UNSUPPORTED) {
                    format!(
                        "The current model ({}) might not fully support Google Search grounding \
                         or there was a configuration issue. Error: {}",
                        backend.model_name(),
                        message
                    )
                } else {
                    fallback::FAILED_GROUNDED.to_string()
                };
                GroundedAnswer {
                    answer,
                    sources: Vec::new(),
                }
            }
        }
    }
}

impl std::fmt::Debug for CreatorAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreatorAssistant")
            .field("model", &self.model_name())
            .finish()
    }
}
