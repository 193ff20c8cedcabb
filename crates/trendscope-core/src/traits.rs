//! Core traits for trendscope abstractions.
//!
//! These traits define the seams where concrete implementations plug in:
//! the analytics source behind the dashboard and the text-generation
//! collaborator behind the AI features.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// ANALYTICS TRAITS
// =============================================================================

/// Source of trend analytics consumed by the presentation layer.
///
/// The mock implementation never fails; a real backend substituted here may.
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    /// Trending topics right now.
    async fn top_trending_now(&self) -> Result<Vec<TrendItem>>;

    /// Under-served niches worth targeting.
    async fn niche_opportunities(&self) -> Result<Vec<NicheOpportunity>>;

    /// Full analytics record for an arbitrary keyword.
    async fn keyword_analysis(&self, keyword: &str) -> Result<KeywordAnalysis>;
}

// =============================================================================
// INFERENCE TRAITS
// =============================================================================

/// Backend for text generation (LLM).
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate free text given a prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate text in structured-output mode.
    ///
    /// The returned string is meant to be JSON but may not parse.
    async fn generate_json(&self, prompt: &str) -> Result<String>;

    /// Generate an answer grounded in web search, with citations.
    async fn generate_grounded(&self, prompt: &str) -> Result<GroundedGeneration>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
