//! # trendscope-data
//!
//! Mock trend analytics for trendscope.
//!
//! This crate provides:
//! - A random-walk series generator producing bounded "interest over time"
//!   curves
//! - Fixed trend and niche catalogs
//! - Keyword analysis synthesis by template interpolation
//! - An async facade with artificial latency implementing
//!   [`trendscope_core::AnalyticsSource`]
//!
//! Randomness is always injected, so a seeded generator gives reproducible
//! output.
//!
//! # Example
//!
//! ```rust
//! use trendscope_data::MockAnalyticsRepository;
//!
//! let repo = MockAnalyticsRepository::with_seed(7);
//! let analysis = repo.analyze_keyword("cooking");
//! assert_eq!(analysis.trend_trajectory.ninety_day.len(), 90);
//! ```

pub mod analysis;
pub mod catalog;
pub mod facade;
pub mod repository;
pub mod series;

// Re-export core types
pub use trendscope_core::*;

pub use facade::{MockAnalyticsService, MockDelayConfig};
pub use repository::MockAnalyticsRepository;
pub use series::{generate_series, SeriesParams};
