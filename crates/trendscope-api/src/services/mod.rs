//! Service layer for trendscope-api.

pub mod dashboard;
pub mod view_state;

pub use dashboard::{
    keyword_load_failed, summary_request, DashboardService, DashboardSnapshot, KeywordReport,
    DASHBOARD_LOAD_FAILED,
};
pub use view_state::{KeywordView, ViewState};
