//! Canned-response matching for the legal chat demo.
//!
//! Free-text queries are matched against a small catalog of pre-written
//! answers by a deliberately naive substring heuristic; misses fall back to
//! a templated generic answer. Every reply carries synthesized analysis
//! metadata so the front end has something to render.

use serde::Serialize;
use std::time::Duration;

use crate::config::{CannedExchange, ChatConfig};
use crate::error::SandboxError;
use crate::rng::RandomSource;

/// Fake provenance attached to every answer. The values are random and
/// carry no meaning beyond looking plausible.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub documents_searched: u64,
    /// Formatted to 2 decimals, e.g. "0.87"
    pub relevancy_score: String,
    /// Formatted duration, e.g. "1.42s"
    pub processing_time: String,
}

#[derive(Clone, Debug)]
pub struct ChatAnswer {
    pub response: String,
    pub metadata: AnalysisMetadata,
}

pub struct ChatResponder {
    config: ChatConfig,
}

impl ChatResponder {
    pub fn new(config: ChatConfig) -> Self {
        Self { config }
    }

    /// Answers a free-text query: validate, wait out the artificial
    /// latency, then scan the catalog in order and take the first match.
    ///
    /// The delay is a cooperative `tokio::time::sleep`, so concurrent
    /// requests are unaffected and dropping the request future cancels
    /// the wait.
    pub async fn answer<R: RandomSource>(
        &self,
        rng: &mut R,
        message: &str,
    ) -> Result<ChatAnswer, SandboxError> {
        if message.trim().is_empty() {
            return Err(SandboxError::EmptyMessage);
        }

        if self.config.response_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.response_delay_ms)).await;
        }

        let response = match self.find_match(message) {
            Some(entry) => entry.response.clone(),
            None => self.config.fallback.replace("{message}", message),
        };

        Ok(ChatAnswer {
            response,
            metadata: self.synthesize_metadata(rng),
        })
    }

    /// Ordered scan, first match wins. An entry matches when its derived
    /// token occurs case-insensitively inside the query.
    fn find_match(&self, message: &str) -> Option<&CannedExchange> {
        let haystack = message.to_lowercase();
        self.config
            .responses
            .iter()
            .find(|entry| match derived_token(&entry.query) {
                Some(token) => haystack.contains(&token),
                None => false,
            })
    }

    fn synthesize_metadata<R: RandomSource>(&self, rng: &mut R) -> AnalysisMetadata {
        let span = self.config.documents_max.saturating_sub(self.config.documents_min);
        let documents_searched =
            self.config.documents_min + (rng.next_f64() * span as f64).floor() as u64;
        let relevancy = self.config.relevancy_base + rng.next_f64() * self.config.relevancy_spread;
        let processing =
            self.config.processing_min_secs + rng.next_f64() * self.config.processing_spread_secs;

        AnalysisMetadata {
            documents_searched,
            relevancy_score: format!("{:.2}", relevancy),
            processing_time: format!("{:.2}s", processing),
        }
    }
}

/// Third whitespace-separated word of a catalog query pattern, lowercased.
/// Patterns with fewer than three words yield no token and never match.
pub fn derived_token(pattern: &str) -> Option<String> {
    pattern
        .split_whitespace()
        .nth(2)
        .map(|word| word.to_lowercase())
}
