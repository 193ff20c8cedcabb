//! Async facade over the mock repository.
//!
//! Simulates network latency before handing out repository output. Keyword
//! analysis waits the full configured delay; catalog listings wait half.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{debug, instrument};

use trendscope_core::{
    defaults, logging, AnalyticsSource, KeywordAnalysis, NicheOpportunity, Result, TrendItem,
};

use crate::repository::MockAnalyticsRepository;

/// Environment variable overriding the simulated latency.
pub const MOCK_API_DELAY_ENV: &str = "MOCK_API_DELAY_MS";

/// Latency configuration for [`MockAnalyticsService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockDelayConfig {
    pub delay: Duration,
}

impl Default for MockDelayConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(defaults::MOCK_API_DELAY_MS),
        }
    }
}

impl MockDelayConfig {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No artificial latency.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Load from `MOCK_API_DELAY_MS`, falling back to the default delay when
    /// unset or unparseable.
    pub fn from_env() -> Self {
        let delay_ms = std::env::var(MOCK_API_DELAY_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults::MOCK_API_DELAY_MS);
        Self::new(Duration::from_millis(delay_ms))
    }

    pub fn listing_delay(&self) -> Duration {
        self.delay / 2
    }

    pub fn analysis_delay(&self) -> Duration {
        self.delay
    }
}

/// Mock [`AnalyticsSource`] with simulated latency. Never fails.
#[derive(Debug, Clone)]
pub struct MockAnalyticsService {
    repository: Arc<MockAnalyticsRepository>,
    config: MockDelayConfig,
}

impl MockAnalyticsService {
    pub fn new(repository: MockAnalyticsRepository, config: MockDelayConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            config,
        }
    }

    /// Entropy-seeded repository with latency from the environment.
    pub fn from_env() -> Self {
        Self::new(MockAnalyticsRepository::new(), MockDelayConfig::from_env())
    }

    pub fn repository(&self) -> &MockAnalyticsRepository {
        &self.repository
    }

    pub fn config(&self) -> MockDelayConfig {
        self.config
    }

    async fn simulate_latency(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for MockAnalyticsService {
    fn default() -> Self {
        Self::new(MockAnalyticsRepository::new(), MockDelayConfig::default())
    }
}

#[async_trait]
impl AnalyticsSource for MockAnalyticsService {
    #[instrument(
        skip(self),
        fields(subsystem = "data", component = "facade", op = "top_trending_now")
    )]
    async fn top_trending_now(&self) -> Result<Vec<TrendItem>> {
        self.simulate_latency(self.config.listing_delay()).await;
        Ok(self.repository.list_top_trends())
    }

    #[instrument(
        skip(self),
        fields(subsystem = "data", component = "facade", op = "niche_opportunities")
    )]
    async fn niche_opportunities(&self) -> Result<Vec<NicheOpportunity>> {
        self.simulate_latency(self.config.listing_delay()).await;
        Ok(self.repository.list_niche_opportunities())
    }

    #[instrument(
        skip(self, keyword),
        fields(
            subsystem = "data",
            component = "facade",
            op = "keyword_analysis",
            keyword = %keyword,
            duration_ms = tracing::field::Empty,
        )
    )]
    async fn keyword_analysis(&self, keyword: &str) -> Result<KeywordAnalysis> {
        let start = Instant::now();
        self.simulate_latency(self.config.analysis_delay()).await;
        let analysis = self.repository.analyze_keyword(keyword);
        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::Span::current().record(logging::DURATION_MS, duration_ms);
        debug!(duration_ms, "Keyword analysis ready");
        Ok(analysis)
    }
}
