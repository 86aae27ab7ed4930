//! Custom error types for the sandbox backend
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>

use thiserror::Error;

/// Top-level sandbox errors
#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("message is required")]
    EmptyMessage,

    #[error("invalid series parameters: base_price={base_price}, volatility={volatility}")]
    InvalidSeriesParams { base_price: f64, volatility: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SandboxError {
    /// Client errors are the caller's fault and safe to describe in the
    /// response body; everything else is reported generically.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SandboxError::EmptyMessage)
    }
}
