//! Keyword view HTTP handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use trendscope_core::ContentIdea;

use crate::services::KeywordReport;
use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub keyword: String,
}

/// Show the analysis for a keyword.
///
/// # Returns
/// - 200 OK with the keyword report
/// - 409 Conflict if a newer navigation superseded this one
/// - 503 Service Unavailable if the analysis could not be loaded
pub async fn navigate(
    State(state): State<AppState>,
    Json(body): Json<NavigateRequest>,
) -> Result<Json<KeywordReport>, ApiError> {
    let keyword = body.keyword.trim();
    if keyword.is_empty() {
        return Err(ApiError::BadRequest("keyword must not be empty".to_string()));
    }
    let report = state.view.navigate(&state.dashboard, keyword).await?;
    Ok(Json(report))
}

/// Regenerate ideas for the keyword currently shown.
pub async fn regenerate_ideas(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContentIdea>>, ApiError> {
    let ideas = state.view.regenerate_ideas(&state.dashboard).await?;
    Ok(Json(ideas))
}

/// Current keyword view, or 204 when nothing has been loaded.
pub async fn current(State(state): State<AppState>) -> impl IntoResponse {
    match state.view.current().await {
        Some(view) => Json(view).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
