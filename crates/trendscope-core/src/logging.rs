//! Structured logging field name constants for trendscope.
//!
//! All crates use these names for structured `tracing` fields so log
//! aggregation can query every subsystem the same way.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Collaborator call failed, fallback text returned |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |
//! | TRACE | Per-item iteration, high-volume data (series points) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated across a request.
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "api", "data", "inference"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "gemini", "assistant", "facade", "dashboard"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "keyword_analysis", "generate_json", "daily_briefing"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Keyword under analysis.
pub const KEYWORD: &str = "keyword";

/// Freshness token of a view request.
pub const REQUEST_TOKEN: &str = "request_token";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of results returned.
pub const RESULT_COUNT: &str = "result_count";

/// Byte length of a prompt.
pub const PROMPT_LEN: &str = "prompt_len";

/// Byte length of a model response.
pub const RESPONSE_LEN: &str = "response_len";

// ─── Inference fields ──────────────────────────────────────────────────────

/// Model name used for inference.
pub const MODEL: &str = "model";

/// Whether structured JSON output was requested.
pub const JSON_MODE: &str = "json_mode";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Slow operation threshold exceeded.
pub const SLOW: &str = "slow";

/// Whether a result was discarded as stale.
pub const STALE: &str = "stale";
