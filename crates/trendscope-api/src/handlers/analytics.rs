//! Trend analytics HTTP handlers.

use axum::{
    extract::{Path, State},
    Json,
};

use trendscope_core::{KeywordAnalysis, NicheOpportunity, TrendItem};

use crate::services::DashboardSnapshot;
use crate::{ApiError, AppState};

/// List trending topics.
pub async fn list_trends(State(state): State<AppState>) -> Result<Json<Vec<TrendItem>>, ApiError> {
    let trends = state.dashboard.analytics().top_trending_now().await?;
    Ok(Json(trends))
}

/// List niche opportunities.
pub async fn list_niches(
    State(state): State<AppState>,
) -> Result<Json<Vec<NicheOpportunity>>, ApiError> {
    let niches = state.dashboard.analytics().niche_opportunities().await?;
    Ok(Json(niches))
}

/// Full analysis for one keyword.
///
/// The keyword arrives URL-encoded in the path and is decoded by the
/// extractor, so `home%20cooking` is analysed as `home cooking`.
///
/// # Returns
/// - 200 OK with the analysis record
/// - 400 Bad Request if the keyword is blank
pub async fn get_keyword(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<Json<KeywordAnalysis>, ApiError> {
    if keyword.trim().is_empty() {
        return Err(ApiError::BadRequest("keyword must not be empty".to_string()));
    }
    let analysis = state.dashboard.analytics().keyword_analysis(&keyword).await?;
    Ok(Json(analysis))
}

/// Briefing, trends and niches in one response.
///
/// # Returns
/// - 200 OK with the dashboard snapshot
/// - 503 Service Unavailable if trends or niches could not be loaded
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSnapshot>, ApiError> {
    let snapshot = state.dashboard.load().await?;
    Ok(Json(snapshot))
}
