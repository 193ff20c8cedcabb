//! Centralized default constants for trendscope.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// SERIES GENERATION
// =============================================================================

/// Default upward-drift bias for the random walk.
pub const SERIES_PEAKINESS: f64 = 0.7;

/// Default starting value of the random walk.
pub const SERIES_START_VALUE: f64 = 10.0;

/// Default number of points in a catalog series.
pub const SERIES_LENGTH: usize = 7;

/// Running values below this floor are reset into `[floor, floor + 5)`.
pub const SERIES_FLOOR: f64 = 5.0;

/// Running values above this level may be pulled back.
pub const SERIES_PEAK: f64 = 95.0;

/// Probability of a pullback once the running value exceeds the peak.
pub const SERIES_PULLBACK_PROBABILITY: f64 = 0.3;

// =============================================================================
// MOCK ANALYTICS
// =============================================================================

/// Artificial latency of the mock analytics facade, in milliseconds.
/// Catalog listings resolve after half of this.
pub const MOCK_API_DELAY_MS: u64 = 1000;

/// Number of entries in the trend catalog.
pub const TREND_CATALOG_SIZE: usize = 5;

/// Number of entries in the niche opportunity catalog.
pub const NICHE_CATALOG_SIZE: usize = 4;

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server host.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 3000;

/// Default CORS max-age in seconds (1 hour).
pub const CORS_MAX_AGE_SECS: u64 = 3600;

// =============================================================================
// INFERENCE
// =============================================================================

/// Default Gemini API base URL.
pub const GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model name.
pub const GEN_MODEL: &str = "gemini-2.5-flash-preview-04-17";

/// Timeout for generation requests in seconds.
pub const GEN_TIMEOUT_SECS: u64 = 60;

/// Generation calls slower than this are logged as slow.
pub const SLOW_GENERATION_MS: u64 = 15_000;

/// Characters of raw model output kept in the idea fallback.
pub const RAW_IDEA_PREVIEW_CHARS: usize = 200;
