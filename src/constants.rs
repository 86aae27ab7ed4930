//! Application-wide constants and magic numbers
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make the codebase easier to tune.

/// Price simulation constants
pub mod market {
    /// Lower bound for the random walk, as a fraction of the base price.
    /// Applied on every step so a series can never decay toward zero.
    pub const PRICE_FLOOR_RATIO: f64 = 0.5;

    /// Default lookback window (days before today; the series has one
    /// extra point for today itself)
    pub const DEFAULT_WINDOW_DAYS: u32 = 30;

    /// Uniform sample subtractor. Anything below 0.5 biases the walk
    /// slightly upward.
    pub const DEFAULT_DRIFT_BIAS: f64 = 0.48;

    /// Exclusive upper bound for the random per-point volume
    pub const DEFAULT_MAX_VOLUME: u64 = 1_000_000_000;
}

/// Chat sandbox constants
pub mod chat {
    /// Artificial response latency (models a real analysis pipeline)
    pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 1000;

    /// Bounds for the synthesized documentsSearched count
    pub const DEFAULT_DOCUMENTS_MIN: u64 = 100;
    pub const DEFAULT_DOCUMENTS_MAX: u64 = 600;

    /// relevancyScore = base + r * spread, r in [0, 1)
    pub const DEFAULT_RELEVANCY_BASE: f64 = 0.7;
    pub const DEFAULT_RELEVANCY_SPREAD: f64 = 0.3;

    /// processingTime = min + r * spread seconds, r in [0, 1)
    pub const DEFAULT_PROCESSING_MIN_SECS: f64 = 0.5;
    pub const DEFAULT_PROCESSING_SPREAD_SECS: f64 = 2.0;
}
