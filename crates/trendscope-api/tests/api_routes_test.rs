//! Route tests against a server bound to an ephemeral port.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use trendscope_api::services::DASHBOARD_LOAD_FAILED;
use trendscope_api::{parse_allowed_origins, router, AppState};
use trendscope_core::{
    AnalyticsSource, Error, GroundingSource, KeywordAnalysis, NicheOpportunity, Result, TrendItem,
};
use trendscope_data::{MockAnalyticsRepository, MockAnalyticsService, MockDelayConfig};
use trendscope_inference::mock::MockGenerationBackend;
use trendscope_inference::CreatorAssistant;

/// Analytics source whose every call fails.
struct FailingAnalytics;

#[async_trait]
impl AnalyticsSource for FailingAnalytics {
    async fn top_trending_now(&self) -> Result<Vec<TrendItem>> {
        Err(Error::Request("connection refused".to_string()))
    }

    async fn niche_opportunities(&self) -> Result<Vec<NicheOpportunity>> {
        Ok(Vec::new())
    }

    async fn keyword_analysis(&self, _keyword: &str) -> Result<KeywordAnalysis> {
        Err(Error::Request("connection refused".to_string()))
    }
}

fn instant_analytics() -> Arc<dyn AnalyticsSource> {
    Arc::new(MockAnalyticsService::new(
        MockAnalyticsRepository::with_seed(42),
        MockDelayConfig::instant(),
    ))
}

fn state_with(backend: MockGenerationBackend) -> AppState {
    AppState::new(instant_analytics(), CreatorAssistant::new(Arc::new(backend)))
}

async fn spawn_app(state: AppState) -> String {
    let app = router(state, parse_allowed_origins(None));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_reports_ai_configuration() {
    let base = spawn_app(AppState::new(
        instant_analytics(),
        CreatorAssistant::unconfigured(),
    ))
    .await;

    let resp = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["aiConfigured"], false);
    assert!(body["model"].is_null());

    let base = spawn_app(state_with(MockGenerationBackend::new())).await;
    let body: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["aiConfigured"], true);
    assert_eq!(body["model"], "mock-gemini");
}

#[tokio::test]
async fn test_trend_and_niche_listings() {
    let base = spawn_app(state_with(MockGenerationBackend::new())).await;

    let trends: Vec<Value> = reqwest::get(format!("{}/api/v1/trends", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!((3..=5).contains(&trends.len()));
    assert_eq!(trends[0]["graphData"].as_array().unwrap().len(), 7);
    assert_eq!(trends[0]["graphData"][0]["label"], "Day 1");

    let niches: Vec<Value> = reqwest::get(format!("{}/api/v1/niches", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!((2..=3).contains(&niches.len()));
    assert!(niches[0]["searchInterest"].is_string());
}

#[tokio::test]
async fn test_keyword_route_decodes_path() {
    let base = spawn_app(state_with(MockGenerationBackend::new())).await;

    let resp = reqwest::get(format!("{}/api/v1/keywords/home%20cooking", base))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["keyword"], "home cooking");
    let score = body["trendScore"].as_u64().unwrap();
    assert!((50..=99).contains(&score));
    assert_eq!(
        body["trendTrajectory"]["90day"].as_array().map(Vec::len),
        Some(90)
    );
}

#[tokio::test]
async fn test_keyword_route_accepts_any_segment() {
    let base = spawn_app(state_with(MockGenerationBackend::new())).await;

    for keyword in ["summary", "dashboard"] {
        let resp = reqwest::get(format!("{}/api/v1/keywords/{}", base, keyword))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200, "keyword {}", keyword);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["keyword"], keyword);
    }
}

#[tokio::test]
async fn test_briefing_without_key_explains_itself() {
    let base = spawn_app(AppState::new(
        instant_analytics(),
        CreatorAssistant::unconfigured(),
    ))
    .await;

    let body: Value = reqwest::get(format!("{}/api/v1/briefing", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["greeting"], "Hello Creator!");
    assert!(body["summary"].as_str().unwrap().contains("not configured"));
}

#[tokio::test]
async fn test_grounded_answer_validates_and_cites() {
    let backend = MockGenerationBackend::new()
        .with_fixed_response("Matcha lattes are up this week.")
        .with_sources(vec![GroundingSource {
            uri: Some("https://example.com/matcha".to_string()),
            title: Some("example.com".to_string()),
        }]);
    let base = spawn_app(state_with(backend)).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/v1/grounded", base))
        .json(&json!({"query": "  "}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "query must not be empty");

    let body: Value = client
        .post(format!("{}/api/v1/grounded", base))
        .json(&json!({"query": "Is matcha trending?"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["answer"], "Matcha lattes are up this week.");
    assert_eq!(body["sources"][0]["uri"], "https://example.com/matcha");
}

#[tokio::test]
async fn test_summary_and_ideas_routes() {
    let backend = MockGenerationBackend::new()
        .with_fixed_response("Pottery is climbing steadily.")
        .with_json_response(r#"[{"hook": "Wheel fails", "format": "Blooper reel"}]"#);
    let base = spawn_app(state_with(backend)).await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(format!("{}/api/v1/summary", base))
        .json(&json!({"keyword": "pottery", "relatedKeywords": ["pottery tutorial"]}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["keyword"], "pottery");
    assert_eq!(body["summary"], "Pottery is climbing steadily.");

    let ideas: Vec<Value> = client
        .post(format!("{}/api/v1/ideas", base))
        .json(&json!({"keyword": "pottery", "summary": "growing"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0]["hook"], "Wheel fails");
}

#[tokio::test]
async fn test_dashboard_aggregate() {
    let backend = MockGenerationBackend::new().with_json_response(
        r#"{"greeting": "Hey creators!", "summary": "Short-form is booming."}"#,
    );
    let base = spawn_app(state_with(backend)).await;

    let resp = reqwest::get(format!("{}/api/v1/dashboard", base))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["dailyBriefing"]["greeting"], "Hey creators!");
    assert!((3..=5).contains(&body["topTrends"].as_array().unwrap().len()));
    assert!((2..=3).contains(&body["nicheOpportunities"].as_array().unwrap().len()));
    assert!(body["loadedAt"].is_string());
}

#[tokio::test]
async fn test_dashboard_failure_is_single_page_error() {
    let base = spawn_app(AppState::new(
        Arc::new(FailingAnalytics),
        CreatorAssistant::unconfigured(),
    ))
    .await;

    let resp = reqwest::get(format!("{}/api/v1/dashboard", base))
        .await
        .unwrap();
    assert_eq!(resp.status(), 503);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], DASHBOARD_LOAD_FAILED);
}

#[tokio::test]
async fn test_keyword_view_flow() {
    let backend = MockGenerationBackend::new()
        .with_fixed_response("Knitting is a cosy evergreen.")
        .with_json_response(r#"[{"hook": "Speed knit", "format": "Timelapse"}]"#);
    let base = spawn_app(state_with(backend)).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/v1/view", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client
        .post(format!("{}/api/v1/view/ideas", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let report: Value = client
        .post(format!("{}/api/v1/view/keyword", base))
        .json(&json!({"keyword": "knitting"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(report["keyword"], "knitting");
    assert_eq!(report["aiSummary"], "Knitting is a cosy evergreen.");
    assert_eq!(report["contentIdeas"], report["analysis"]["contentIdeas"]);

    let ideas: Vec<Value> = client
        .post(format!("{}/api/v1/view/ideas", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ideas[0]["hook"], "Speed knit");

    let view: Value = client
        .get(format!("{}/api/v1/view", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view["status"], "ready");
    assert_eq!(view["keyword"], "knitting");
    assert_eq!(view["contentIdeas"][0]["hook"], "Speed knit");
}

#[tokio::test]
async fn test_keyword_view_failure_is_recorded() {
    let base = spawn_app(AppState::new(
        Arc::new(FailingAnalytics),
        CreatorAssistant::unconfigured(),
    ))
    .await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/v1/view/keyword", base))
        .json(&json!({"keyword": "yoga"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 503);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["error"],
        "Failed to load analysis for \"yoga\". Please try again."
    );

    let view: Value = client
        .get(format!("{}/api/v1/view", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view["status"], "failed");
    assert_eq!(view["keyword"], "yoga");
}
