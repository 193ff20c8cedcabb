//! AI assistant HTTP handlers.
//!
//! The assistant never fails toward callers, so apart from input validation
//! these handlers always answer 200 with either model output or fallback
//! text.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use trendscope_core::{ContentIdea, DailyBriefing, GroundedAnswer, KeywordSummaryRequest};

use crate::{ApiError, AppState};

/// Request body for content idea generation.
#[derive(Debug, Deserialize)]
pub struct ContentIdeasRequest {
    pub keyword: String,
    /// Market summary the ideas should build on.
    #[serde(default)]
    pub summary: String,
}

/// Request body for a grounded answer.
#[derive(Debug, Deserialize)]
pub struct GroundedQuery {
    pub query: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSummaryResponse {
    pub keyword: String,
    pub summary: String,
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Greeting and summary for today.
pub async fn get_briefing(State(state): State<AppState>) -> Json<DailyBriefing> {
    Json(state.dashboard.assistant().daily_briefing().await)
}

/// Market summary for a keyword from caller-supplied context.
pub async fn keyword_summary(
    State(state): State<AppState>,
    Json(body): Json<KeywordSummaryRequest>,
) -> Result<Json<KeywordSummaryResponse>, ApiError> {
    require_non_empty("keyword", &body.keyword)?;
    let summary = state
        .dashboard
        .assistant()
        .keyword_analysis_summary(&body)
        .await;
    Ok(Json(KeywordSummaryResponse {
        keyword: body.keyword,
        summary,
    }))
}

/// Video ideas for a keyword.
pub async fn generate_ideas(
    State(state): State<AppState>,
    Json(body): Json<ContentIdeasRequest>,
) -> Result<Json<Vec<ContentIdea>>, ApiError> {
    require_non_empty("keyword", &body.keyword)?;
    let ideas = state
        .dashboard
        .assistant()
        .content_ideas(&body.keyword, &body.summary)
        .await;
    Ok(Json(ideas))
}

/// Search-grounded answer with citations.
pub async fn grounded_answer(
    State(state): State<AppState>,
    Json(body): Json<GroundedQuery>,
) -> Result<Json<GroundedAnswer>, ApiError> {
    require_non_empty("query", &body.query)?;
    let answer = state.dashboard.assistant().grounded_answer(&body.query).await;
    Ok(Json(answer))
}
