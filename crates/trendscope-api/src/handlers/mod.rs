//! HTTP handlers for trendscope-api.

pub mod analytics;
pub mod assistant;
pub mod view;

use axum::{extract::State, response::IntoResponse, Json};

use crate::AppState;

/// Liveness probe that also reports whether AI calls are enabled.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let assistant = state.dashboard.assistant();
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "aiConfigured": assistant.is_configured(),
        "model": assistant.model_name(),
    }))
}
