//! Shared application state.

use std::sync::Arc;

use trendscope_core::AnalyticsSource;
use trendscope_data::MockAnalyticsService;
use trendscope_inference::CreatorAssistant;

use crate::services::{DashboardService, ViewState};

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: DashboardService,
    pub view: Arc<ViewState>,
}

impl AppState {
    pub fn new(analytics: Arc<dyn AnalyticsSource>, assistant: CreatorAssistant) -> Self {
        Self {
            dashboard: DashboardService::new(analytics, assistant),
            view: Arc::new(ViewState::new()),
        }
    }

    /// Mock analytics with env-configured latency and a Gemini assistant
    /// when `GEMINI_API_KEY` is set.
    pub fn from_env() -> Self {
        Self::new(
            Arc::new(MockAnalyticsService::from_env()),
            CreatorAssistant::from_env(),
        )
    }
}
