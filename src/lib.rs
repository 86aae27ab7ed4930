//! Portfolio sandbox - mock backend for the portfolio site's demo projects
//!
//! This library provides the synthetic data behind the two demo endpoints:
//! a random-walk price simulator for the coin analytics page and a
//! canned-response matcher for the legal chat page.

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod rng;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::SandboxError;
pub use rng::{RandomSource, ScriptedRandom, ThreadRandom};

#[cfg(test)]
mod config_tests;
