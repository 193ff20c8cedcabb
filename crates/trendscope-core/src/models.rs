//! Data model for trend analytics and AI collaborator results.
//!
//! Every entity is built fresh per request and never mutated afterwards;
//! callers replace held values wholesale. JSON field names are camelCase to
//! match the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// SERIES
// =============================================================================

/// One point of a time-indexed metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Ordinal tag, "Day 1", "Day 2", ...
    pub label: String,
    /// Non-negative interest value, rounded to an integer by the generator.
    pub value: f64,
}

impl SeriesPoint {
    /// Point labelled with its 1-based day index.
    pub fn day(day: usize, value: f64) -> Self {
        Self {
            label: day_label(day),
            value,
        }
    }
}

/// Label for the 1-based day index.
pub fn day_label(day: usize) -> String {
    format!("Day {}", day)
}

/// Chronologically ordered sequence of points.
///
/// Point order is semantic; the type exposes no way to reorder it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    /// Wrap points that are already in chronological order.
    pub fn from_chronological(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesPoint> {
        self.points.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn into_points(self) -> Vec<SeriesPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a SeriesPoint;
    type IntoIter = std::slice::Iter<'a, SeriesPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// =============================================================================
// CLASSIFICATIONS
// =============================================================================

/// Competition for a catalog entry. Ordered Low < Medium < Hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Competition {
    Low,
    Medium,
    Hard,
}

/// Search interest for a niche. Ordered Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SearchInterest {
    Low,
    Medium,
    High,
}

/// Competition for an analyzed keyword. Ordered Easy < Medium < Hard < Very Hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompetitionLevel {
    Easy,
    Medium,
    Hard,
    #[serde(rename = "Very Hard")]
    VeryHard,
}

impl CompetitionLevel {
    pub const ALL: [CompetitionLevel; 4] = [
        CompetitionLevel::Easy,
        CompetitionLevel::Medium,
        CompetitionLevel::Hard,
        CompetitionLevel::VeryHard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
        }
    }
}

impl fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short-form platform with per-keyword insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    TikTok,
    Instagram,
    #[serde(rename = "YouTube Shorts")]
    YouTubeShorts,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::TikTok, Platform::Instagram, Platform::YouTubeShorts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TikTok => "TikTok",
            Self::Instagram => "Instagram",
            Self::YouTubeShorts => "YouTube Shorts",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Origin platform of a trend catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendPlatform {
    TikTok,
    Instagram,
    #[serde(rename = "YouTube Shorts")]
    YouTubeShorts,
    General,
}

// =============================================================================
// CATALOG ENTRIES
// =============================================================================

/// Trending topic shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendItem {
    pub id: String,
    pub name: String,
    /// Seven-point interest series.
    pub graph_data: Series,
    pub competition: Competition,
    pub platform: TrendPlatform,
}

/// Under-served niche shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheOpportunity {
    pub id: String,
    pub name: String,
    pub search_interest: SearchInterest,
    pub competition: Competition,
    pub description: String,
}

// =============================================================================
// KEYWORD ANALYSIS
// =============================================================================

/// Named trajectory window of a keyword analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrajectoryWindow {
    #[serde(rename = "7day")]
    SevenDay,
    #[serde(rename = "30day")]
    ThirtyDay,
    #[serde(rename = "90day")]
    NinetyDay,
}

impl TrajectoryWindow {
    pub const ALL: [TrajectoryWindow; 3] = [
        TrajectoryWindow::SevenDay,
        TrajectoryWindow::ThirtyDay,
        TrajectoryWindow::NinetyDay,
    ];

    /// Number of points generated for the window.
    pub fn days(&self) -> usize {
        match self {
            Self::SevenDay => 7,
            Self::ThirtyDay => 30,
            Self::NinetyDay => 90,
        }
    }
}

/// Three independently generated series keyed by window.
///
/// The windows are not slices of one another and may disagree where they
/// overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendTrajectory {
    #[serde(rename = "7day")]
    pub seven_day: Series,
    #[serde(rename = "30day")]
    pub thirty_day: Series,
    #[serde(rename = "90day")]
    pub ninety_day: Series,
}

impl TrendTrajectory {
    /// Build every window with `series`, called in [`TrajectoryWindow::ALL`] order.
    pub fn from_windows<F>(mut series: F) -> Self
    where
        F: FnMut(TrajectoryWindow) -> Series,
    {
        let [seven_day, thirty_day, ninety_day] = TrajectoryWindow::ALL.map(|w| series(w));
        Self {
            seven_day,
            thirty_day,
            ninety_day,
        }
    }
}

/// Insights for one platform.
///
/// Platforms fill different optional lists: TikTok has sounds, effects and
/// formats; Instagram has aesthetics, sounds and formats; YouTube Shorts has
/// sounds and formats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    pub nuances: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_sounds: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular_effects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_formats: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_aesthetics: Option<Vec<String>>,
}

/// Per-platform insight block, one entry per [`Platform`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInsights {
    pub tiktok: PlatformDetail,
    pub instagram: PlatformDetail,
    pub youtube: PlatformDetail,
}

impl PlatformInsights {
    pub fn get(&self, platform: Platform) -> &PlatformDetail {
        match platform {
            Platform::TikTok => &self.tiktok,
            Platform::Instagram => &self.instagram,
            Platform::YouTubeShorts => &self.youtube,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Platform, &PlatformDetail)> {
        Platform::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

/// Audience insights derived from the keyword by concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceInsights {
    pub related_keywords: Vec<String>,
    pub emerging_niches: Vec<String>,
    pub question_radar: Vec<String>,
}

/// Example of top-performing content for a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopContentExample {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

/// A short-form video idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIdea {
    pub hook: String,
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_idea: Option<String>,
}

impl ContentIdea {
    pub fn new(hook: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            hook: hook.into(),
            format: format.into(),
            full_idea: None,
        }
    }

    pub fn with_full_idea(mut self, full_idea: impl Into<String>) -> Self {
        self.full_idea = Some(full_idea.into());
        self
    }
}

/// Full synthesized analytics aggregate for one keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub keyword: String,
    /// Closed range [50, 99] from the mock generator.
    pub trend_score: u32,
    pub competition_level: CompetitionLevel,
    /// Placeholder summary shown until the AI summary arrives.
    pub ai_summary: String,
    pub trend_trajectory: TrendTrajectory,
    pub platform_insights: PlatformInsights,
    pub content_ideas: Vec<ContentIdea>,
    pub audience_insights: AudienceInsights,
    pub top_performing_content: Vec<TopContentExample>,
}

// =============================================================================
// AI COLLABORATOR
// =============================================================================

/// Greeting plus one-paragraph landscape summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBriefing {
    pub greeting: String,
    pub summary: String,
}

impl DailyBriefing {
    pub fn new(greeting: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
            summary: summary.into(),
        }
    }
}

/// Web citation attached to a grounded answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Raw output of a search-grounded generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundedGeneration {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

/// Grounded answer handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundedAnswer {
    pub answer: String,
    pub sources: Vec<GroundingSource>,
}

/// Context for the keyword summary prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSummaryRequest {
    pub keyword: String,
    #[serde(default)]
    pub trend_data: Option<String>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub related_keywords: Vec<String>,
    #[serde(default)]
    pub sample_questions: Vec<String>,
}
