//! # trendscope-core
//!
//! Core types, traits, and abstractions for the trendscope workspace.
//!
//! This crate provides the analytics data model, the collaborator traits the
//! other crates implement, and the request-freshness primitives used to keep
//! stale responses out of view state.

pub mod defaults;
pub mod error;
pub mod freshness;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use freshness::{Latest, RequestToken, RequestTracker};
pub use models::*;
pub use traits::*;
