//! Mock analytics repository.
//!
//! Synthesizes catalog listings and keyword analysis records from the seed
//! catalogs and an owned random generator. No I/O happens here.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use trendscope_core::{
    CompetitionLevel, KeywordAnalysis, NicheOpportunity, TrajectoryWindow, TrendItem,
    TrendTrajectory,
};

use crate::analysis;
use crate::catalog::{NICHE_CATALOG, NICHE_LISTING_COUNT, TREND_CATALOG, TREND_LISTING_COUNT};
use crate::series::{generate_series, generate_with};

/// Peakiness, start floor and start spread of each trajectory window.
///
/// Longer windows start lower and wander less.
fn trajectory_shape(window: TrajectoryWindow) -> (f64, f64, f64) {
    match window {
        TrajectoryWindow::SevenDay => (0.7, 20.0, 30.0),
        TrajectoryWindow::ThirtyDay => (0.6, 10.0, 20.0),
        TrajectoryWindow::NinetyDay => (0.5, 5.0, 10.0),
    }
}

/// Repository producing fresh mock analytics on every call.
///
/// The generator is the only state. It is locked for the duration of a
/// single synchronous synthesis and never across an await point.
#[derive(Debug)]
pub struct MockAnalyticsRepository {
    rng: Mutex<StdRng>,
}

impl MockAnalyticsRepository {
    /// Repository seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Repository with reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // The generator holds no invariant a panic could break.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Trending topics: a prefix of the trend catalog, 3 to 5 entries long.
    pub fn list_top_trends(&self) -> Vec<TrendItem> {
        let mut rng = self.rng();
        let count = rng.gen_range(TREND_LISTING_COUNT);
        let items: Vec<TrendItem> = TREND_CATALOG[..count]
            .iter()
            .map(|seed| TrendItem {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                graph_data: generate_with(&mut *rng, seed.series_params()),
                competition: seed.competition,
                platform: seed.platform,
            })
            .collect();
        debug!(result_count = items.len(), "Listed top trends");
        items
    }

    /// Niche opportunities: a prefix of the niche catalog, 2 to 3 entries long.
    pub fn list_niche_opportunities(&self) -> Vec<NicheOpportunity> {
        let count = self.rng().gen_range(NICHE_LISTING_COUNT);
        let items: Vec<NicheOpportunity> = NICHE_CATALOG[..count]
            .iter()
            .map(|seed| seed.to_entry())
            .collect();
        debug!(result_count = items.len(), "Listed niche opportunities");
        items
    }

    /// Synthesize the full analytics record for `keyword`.
    ///
    /// The shape is fixed; scores, competition and series are random; text is
    /// template interpolation. An empty keyword is interpolated verbatim.
    pub fn analyze_keyword(&self, keyword: &str) -> KeywordAnalysis {
        let mut rng = self.rng();
        let rng = &mut *rng;

        let competition_level =
            CompetitionLevel::ALL[rng.gen_range(0..CompetitionLevel::ALL.len())];
        let trend_score = rng.gen_range(50..=99);

        let trend_trajectory = TrendTrajectory::from_windows(|window| {
            let (peakiness, base, spread) = trajectory_shape(window);
            let start = rng.gen::<f64>() * spread + base;
            generate_series(&mut *rng, window.days(), peakiness, start)
        });

        let platform_insights = analysis::platform_insights(rng, keyword);

        debug!(
            keyword,
            trend_score,
            competition = %competition_level,
            "Synthesized keyword analysis"
        );

        KeywordAnalysis {
            keyword: keyword.to_string(),
            trend_score,
            competition_level,
            ai_summary: analysis::placeholder_summary(keyword, competition_level),
            trend_trajectory,
            platform_insights,
            content_ideas: analysis::seed_content_ideas(keyword),
            audience_insights: analysis::audience_insights(keyword),
            top_performing_content: analysis::top_performing_content(keyword),
        }
    }
}

impl Default for MockAnalyticsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendscope_core::Platform;

    #[test]
    fn test_top_trends_is_catalog_prefix() {
        let repo = MockAnalyticsRepository::with_seed(1);
        for _ in 0..100 {
            let trends = repo.list_top_trends();
            assert!((3..=5).contains(&trends.len()));
            for (item, seed) in trends.iter().zip(TREND_CATALOG.iter()) {
                assert_eq!(item.id, seed.id);
                assert_eq!(item.name, seed.name);
                assert_eq!(item.graph_data.len(), 7);
            }
        }
    }

    #[test]
    fn test_niches_is_catalog_prefix() {
        let repo = MockAnalyticsRepository::with_seed(2);
        for _ in 0..100 {
            let niches = repo.list_niche_opportunities();
            assert!((2..=3).contains(&niches.len()));
            for (item, seed) in niches.iter().zip(NICHE_CATALOG.iter()) {
                assert_eq!(item.id, seed.id);
            }
        }
    }

    #[test]
    fn test_listing_counts_cover_range() {
        let repo = MockAnalyticsRepository::with_seed(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(repo.list_top_trends().len());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_analyze_keyword_shape() {
        let repo = MockAnalyticsRepository::with_seed(4);
        let analysis = repo.analyze_keyword("cooking");

        assert_eq!(analysis.keyword, "cooking");
        assert!((50..=99).contains(&analysis.trend_score));
        assert_eq!(analysis.trend_trajectory.seven_day.len(), 7);
        assert_eq!(analysis.trend_trajectory.thirty_day.len(), 30);
        assert_eq!(analysis.trend_trajectory.ninety_day.len(), 90);
        assert_eq!(analysis.content_ideas.len(), 3);
        assert_eq!(analysis.top_performing_content.len(), 4);
        assert!(analysis.ai_summary.contains("cooking"));
    }

    #[test]
    fn test_trajectory_windows_match_window_days() {
        let trajectory = MockAnalyticsRepository::with_seed(21)
            .analyze_keyword("baking")
            .trend_trajectory;
        let lengths = [
            trajectory.seven_day.len(),
            trajectory.thirty_day.len(),
            trajectory.ninety_day.len(),
        ];

        assert_eq!(lengths, TrajectoryWindow::ALL.map(|w| w.days()));
        assert!(trajectory.ninety_day.values().all(|v| v >= 0.0));
    }

    #[test]
    fn test_analyze_keyword_platforms() {
        let repo = MockAnalyticsRepository::with_seed(5);
        let analysis = repo.analyze_keyword("cooking");

        let platforms: Vec<Platform> = analysis.platform_insights.iter().map(|(p, _)| p).collect();
        assert_eq!(platforms, Platform::ALL.to_vec());
        for (_, detail) in analysis.platform_insights.iter() {
            assert!(!detail.nuances.is_empty());
        }
    }

    #[test]
    fn test_seeded_repositories_agree() {
        let a = MockAnalyticsRepository::with_seed(99).analyze_keyword("surfing");
        let b = MockAnalyticsRepository::with_seed(99).analyze_keyword("surfing");
        assert_eq!(a, b);
    }

    #[test]
    fn test_repeated_calls_regenerate() {
        let repo = MockAnalyticsRepository::with_seed(6);
        let a = repo.analyze_keyword("surfing");
        let b = repo.analyze_keyword("surfing");
        assert_ne!(a.trend_trajectory, b.trend_trajectory);
    }
}
