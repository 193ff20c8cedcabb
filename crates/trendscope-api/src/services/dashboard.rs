//! Dashboard and keyword-analysis composition.
//!
//! Combines the analytics source and the creator assistant into the two
//! page-level loads: the dashboard aggregate and the keyword report chain.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info, instrument, Span};

use trendscope_core::{
    logging, AnalyticsSource, ContentIdea, DailyBriefing, Error, KeywordAnalysis,
    KeywordSummaryRequest, NicheOpportunity, Result, TrendItem,
};
use trendscope_inference::CreatorAssistant;

/// Page-level error when any part of the dashboard fails to load.
pub const DASHBOARD_LOAD_FAILED: &str = "Failed to load dashboard data. Please try refreshing.";

/// Page-level error when a keyword analysis fails to load.
pub fn keyword_load_failed(keyword: &str) -> String {
    format!("Failed to load analysis for \"{}\". Please try again.", keyword)
}

/// Related keywords passed to the summary prompt.
const SUMMARY_RELATED_KEYWORDS: usize = 3;

/// Audience questions passed to the summary prompt.
const SUMMARY_SAMPLE_QUESTIONS: usize = 2;

/// Everything the dashboard page shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub daily_briefing: DailyBriefing,
    pub top_trends: Vec<TrendItem>,
    pub niche_opportunities: Vec<NicheOpportunity>,
    pub loaded_at: DateTime<Utc>,
}

/// Keyword analysis together with its AI summary and current ideas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    pub keyword: String,
    pub analysis: KeywordAnalysis,
    pub ai_summary: String,
    pub content_ideas: Vec<ContentIdea>,
}

/// Summary prompt context derived from an analysis record.
pub fn summary_request(analysis: &KeywordAnalysis) -> KeywordSummaryRequest {
    KeywordSummaryRequest {
        keyword: analysis.keyword.clone(),
        trend_data: Some(format!(
            "Trend score: {}/100, trajectory indicates moderate interest.",
            analysis.trend_score
        )),
        competition: Some(analysis.competition_level.to_string()),
        related_keywords: analysis
            .audience_insights
            .related_keywords
            .iter()
            .take(SUMMARY_RELATED_KEYWORDS)
            .cloned()
            .collect(),
        sample_questions: analysis
            .audience_insights
            .question_radar
            .iter()
            .take(SUMMARY_SAMPLE_QUESTIONS)
            .cloned()
            .collect(),
    }
}

/// Composes analytics and AI calls into page loads.
#[derive(Clone)]
pub struct DashboardService {
    analytics: Arc<dyn AnalyticsSource>,
    assistant: CreatorAssistant,
}

impl DashboardService {
    pub fn new(analytics: Arc<dyn AnalyticsSource>, assistant: CreatorAssistant) -> Self {
        Self {
            analytics,
            assistant,
        }
    }

    pub fn analytics(&self) -> &dyn AnalyticsSource {
        self.analytics.as_ref()
    }

    pub fn assistant(&self) -> &CreatorAssistant {
        &self.assistant
    }

    /// Load briefing, trends and niches concurrently.
    ///
    /// All three are awaited. Any analytics failure fails the whole load with
    /// [`DASHBOARD_LOAD_FAILED`]; the briefing degrades instead of failing.
    #[instrument(
        skip(self),
        fields(subsystem = "api", component = "dashboard", op = "load", duration_ms = tracing::field::Empty)
    )]
    pub async fn load(&self) -> Result<DashboardSnapshot> {
        let start = std::time::Instant::now();
        let (daily_briefing, trends, niches) = tokio::join!(
            self.assistant.daily_briefing(),
            self.analytics.top_trending_now(),
            self.analytics.niche_opportunities(),
        );
        Span::current().record(logging::DURATION_MS, start.elapsed().as_millis() as u64);

        let (top_trends, niche_opportunities) = match (trends, niches) {
            (Ok(t), Ok(n)) => (t, n),
            (Err(e), _) | (_, Err(e)) => {
                error!(error = %e, "Error fetching dashboard data");
                return Err(Error::Analytics(DASHBOARD_LOAD_FAILED.to_string()));
            }
        };

        info!(
            trends = top_trends.len(),
            niches = niche_opportunities.len(),
            "Dashboard loaded"
        );
        Ok(DashboardSnapshot {
            daily_briefing,
            top_trends,
            niche_opportunities,
            loaded_at: Utc::now(),
        })
    }

    /// Fetch the analysis for `keyword`, then its AI summary.
    ///
    /// The summary request is built from the analysis, so it never starts
    /// before the analysis resolves. Ideas start as the analysis' own ideas.
    #[instrument(
        skip(self, keyword),
        fields(subsystem = "api", component = "dashboard", op = "keyword_report", keyword = %keyword)
    )]
    pub async fn keyword_report(&self, keyword: &str) -> Result<KeywordReport> {
        let analysis = self.analytics.keyword_analysis(keyword).await.map_err(|e| {
            error!(error = %e, "Error fetching keyword analysis");
            Error::Analytics(keyword_load_failed(keyword))
        })?;

        let ai_summary = self
            .assistant
            .keyword_analysis_summary(&summary_request(&analysis))
            .await;
        debug!(summary_len = ai_summary.len(), "Keyword summary ready");

        Ok(KeywordReport {
            keyword: keyword.to_string(),
            content_ideas: analysis.content_ideas.clone(),
            analysis,
            ai_summary,
        })
    }

    /// Regenerate ideas for a report from its keyword and AI summary.
    pub async fn regenerate_ideas(&self, report: &KeywordReport) -> Vec<ContentIdea> {
        self.assistant
            .content_ideas(&report.keyword, &report.ai_summary)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendscope_data::MockAnalyticsRepository;

    #[test]
    fn test_summary_request_from_analysis() {
        let analysis = MockAnalyticsRepository::with_seed(8).analyze_keyword("surfing");
        let request = summary_request(&analysis);

        assert_eq!(request.keyword, "surfing");
        assert_eq!(
            request.trend_data.as_deref(),
            Some(
                format!(
                    "Trend score: {}/100, trajectory indicates moderate interest.",
                    analysis.trend_score
                )
                .as_str()
            )
        );
        assert_eq!(
            request.competition.as_deref(),
            Some(analysis.competition_level.as_str())
        );
        assert_eq!(
            request.related_keywords,
            vec!["surfing tutorial", "best surfing tools", "surfing fails"]
        );
        assert_eq!(
            request.sample_questions,
            vec!["Is surfing hard to learn?", "How much does surfing cost?"]
        );
    }

    #[test]
    fn test_keyword_load_failed_message() {
        assert_eq!(
            keyword_load_failed("yoga"),
            "Failed to load analysis for \"yoga\". Please try again."
        );
    }
}
