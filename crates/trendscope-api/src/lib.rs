//! # trendscope-api
//!
//! HTTP server for the trendscope dashboard.
//!
//! Exposes the analytics facade and the creator assistant as JSON routes,
//! plus the two page-level compositions: the dashboard aggregate load and
//! the keyword view with stale-response protection.

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;
pub mod state;

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use trendscope_core::defaults;

pub use config::{parse_allowed_origins, ServerConfig};
pub use error::ApiError;
pub use state::AppState;

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(defaults::CORS_MAX_AGE_SECS))
}

/// Build the application router.
pub fn router(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Analytics
        .route("/api/v1/trends", get(handlers::analytics::list_trends))
        .route("/api/v1/niches", get(handlers::analytics::list_niches))
        .route(
            "/api/v1/keywords/:keyword",
            get(handlers::analytics::get_keyword),
        )
        .route("/api/v1/dashboard", get(handlers::analytics::get_dashboard))
        // Assistant
        .route("/api/v1/summary", post(handlers::assistant::keyword_summary))
        .route("/api/v1/briefing", get(handlers::assistant::get_briefing))
        .route("/api/v1/ideas", post(handlers::assistant::generate_ideas))
        .route("/api/v1/grounded", post(handlers::assistant::grounded_answer))
        // Keyword view
        .route("/api/v1/view", get(handlers::view::current))
        .route("/api/v1/view/keyword", post(handlers::view::navigate))
        .route("/api/v1/view/ideas", post(handlers::view::regenerate_ideas))
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http()),
        )
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}
