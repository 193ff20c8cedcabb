//! Fixed seed catalogs for the dashboard listings.
//!
//! Trend entries carry the parameters of their series rather than a series,
//! so every listing gets a freshly generated curve.

use trendscope_core::{Competition, NicheOpportunity, SearchInterest, TrendPlatform};

use crate::series::SeriesParams;

/// Static description of one trending topic.
#[derive(Debug, Clone, Copy)]
pub struct TrendSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub peakiness: f64,
    pub start_value: f64,
    pub competition: Competition,
    pub platform: TrendPlatform,
}

impl TrendSeed {
    /// Series parameters for this entry's seven-day curve.
    pub fn series_params(&self) -> SeriesParams {
        SeriesParams::new(7, self.peakiness, self.start_value)
    }
}

/// Static description of one niche opportunity.
#[derive(Debug, Clone, Copy)]
pub struct NicheSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub search_interest: SearchInterest,
    pub competition: Competition,
    pub description: &'static str,
}

impl NicheSeed {
    pub fn to_entry(&self) -> NicheOpportunity {
        NicheOpportunity {
            id: self.id.to_string(),
            name: self.name.to_string(),
            search_interest: self.search_interest,
            competition: self.competition,
            description: self.description.to_string(),
        }
    }
}

pub const TREND_CATALOG: [TrendSeed; 5] = [
    TrendSeed {
        id: "1",
        name: "ASMR Unboxing",
        peakiness: 0.8,
        start_value: 40.0,
        competition: Competition::Medium,
        platform: TrendPlatform::General,
    },
    TrendSeed {
        id: "2",
        name: "Vintage Tech Revival",
        peakiness: 0.7,
        start_value: 20.0,
        competition: Competition::Low,
        platform: TrendPlatform::Instagram,
    },
    TrendSeed {
        id: "3",
        name: "#BakingFails Challenge",
        peakiness: 0.9,
        start_value: 60.0,
        competition: Competition::Hard,
        platform: TrendPlatform::TikTok,
    },
    TrendSeed {
        id: "4",
        name: "AI News Explainers (1-min)",
        peakiness: 0.6,
        start_value: 30.0,
        competition: Competition::Medium,
        platform: TrendPlatform::YouTubeShorts,
    },
    TrendSeed {
        id: "5",
        name: "Sustainable Living Tips",
        peakiness: 0.5,
        start_value: 25.0,
        competition: Competition::Medium,
        platform: TrendPlatform::General,
    },
];

pub const NICHE_CATALOG: [NicheSeed; 4] = [
    NicheSeed {
        id: "n1",
        name: "AI for Local Businesses",
        search_interest: SearchInterest::High,
        competition: Competition::Low,
        description: "Tutorials on using AI tools to boost small local businesses.",
    },
    NicheSeed {
        id: "n2",
        name: "Ethical AI Art Discussions",
        search_interest: SearchInterest::Medium,
        competition: Competition::Low,
        description: "Exploring the moral implications and future of AI in art.",
    },
    NicheSeed {
        id: "n3",
        name: "DIY Smart Home Gadgets",
        search_interest: SearchInterest::High,
        competition: Competition::Medium,
        description: "Creating and showcasing custom smart home solutions on a budget.",
    },
    NicheSeed {
        id: "n4",
        name: "Beginner Coding on Mobile",
        search_interest: SearchInterest::Medium,
        competition: Competition::Low,
        description: "Teaching basic coding concepts using mobile-only apps/tools.",
    },
];

/// Inclusive range of how many trend entries a listing returns.
pub const TREND_LISTING_COUNT: std::ops::RangeInclusive<usize> = 3..=5;

/// Inclusive range of how many niche entries a listing returns.
pub const NICHE_LISTING_COUNT: std::ops::RangeInclusive<usize> = 2..=3;
