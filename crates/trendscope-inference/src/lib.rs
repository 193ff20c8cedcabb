//! # trendscope-inference
//!
//! Generative-language collaborator for trendscope.
//!
//! This crate provides:
//! - A Gemini implementation of [`trendscope_core::GenerationBackend`]
//! - Two-stage recovery of JSON payloads from model output
//! - Prompt templates for briefings, keyword summaries and content ideas
//! - [`CreatorAssistant`], which wraps an optional backend and always
//!   resolves to displayable content
//!
//! # Feature Flags
//!
//! - `mock`: Enable [`mock::MockGenerationBackend`] for tests in dependent
//!   crates
//!
//! # Example
//!
//! ```rust,no_run
//! use trendscope_inference::CreatorAssistant;
//!
//! #[tokio::main]
//! async fn main() {
//!     let assistant = CreatorAssistant::from_env();
//!     let briefing = assistant.daily_briefing().await;
//!     println!("{} {}", briefing.greeting, briefing.summary);
//! }
//! ```

pub mod assistant;
pub mod config;
pub mod gemini;
pub mod json_recovery;
pub mod prompts;

// Mock generation backend for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use trendscope_core::*;

pub use assistant::CreatorAssistant;
pub use config::GeminiConfig;
pub use gemini::{GeminiBackend, GeminiErrorCode};
pub use json_recovery::parse_json_from_text;
