//! Gemini inference backend.
//!
//! Talks to the Generative Language API `generateContent` endpoint. Three
//! request shapes are used: plain text, JSON mode (`responseMimeType`), and
//! Google Search grounding (`tools: [{googleSearch: {}}]`).
//!
//! # Example
//!
//! ```rust,no_run
//! use trendscope_inference::gemini::GeminiBackend;
//! use trendscope_core::GenerationBackend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = GeminiBackend::from_env().unwrap();
//!     let text = backend.generate("Say hello").await.unwrap();
//!     println!("{}", text);
//! }
//! ```

mod backend;
mod error;
mod types;

pub use backend::GeminiBackend;
pub use error::{to_core_error, GeminiErrorCode};
pub use types::*;
