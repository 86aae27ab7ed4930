use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{chat as chat_defaults, market as market_defaults};
use crate::error::SandboxError;

/// Compiled-in default configuration, used when no config.yaml is present.
/// Carries the full coin and canned-response catalogs.
pub const DEFAULT_CONFIG: &str = include_str!("../config.yaml");

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct PredictionSpec {
    pub next_day: f64,
    pub next_week: f64,
    pub confidence: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SentimentSpec {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// One entry in the coin catalog. Static display fields plus the random
/// walk parameters for the generated price history.
#[derive(Clone, Debug, Deserialize)]
pub struct CoinSpec {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    pub price_change_24h: f64,
    pub market_cap: u64,
    pub volume_24h: u64,
    pub base_price: f64,
    pub volatility: f64,
    pub prediction: PredictionSpec,
    pub sentiment: SentimentSpec,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MarketConfig {
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_drift_bias")]
    pub drift_bias: f64,
    #[serde(default = "default_max_volume")]
    pub max_volume: u64,
    pub coins: Vec<CoinSpec>,
}

/// A query pattern paired with its pre-written long-form answer.
#[derive(Clone, Debug, Deserialize)]
pub struct CannedExchange {
    pub query: String,
    pub response: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
    #[serde(default = "default_documents_min")]
    pub documents_min: u64,
    #[serde(default = "default_documents_max")]
    pub documents_max: u64,
    #[serde(default = "default_relevancy_base")]
    pub relevancy_base: f64,
    #[serde(default = "default_relevancy_spread")]
    pub relevancy_spread: f64,
    #[serde(default = "default_processing_min_secs")]
    pub processing_min_secs: f64,
    #[serde(default = "default_processing_spread_secs")]
    pub processing_spread_secs: f64,
    pub responses: Vec<CannedExchange>,
    /// Fallback answer template; `{message}` is replaced with the caller's
    /// query text.
    pub fallback: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub market: MarketConfig,
    pub chat: ChatConfig,
}

impl AppConfig {
    /// Reads config.yaml from the working directory, falling back to the
    /// compiled-in catalogs when no file exists.
    pub fn load() -> Result<Self, SandboxError> {
        let path = Path::new("config.yaml");
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Self::from_yaml(&content)
        } else {
            Self::builtin()
        }
    }

    /// Parses the compiled-in default configuration.
    pub fn builtin() -> Result<Self, SandboxError> {
        Self::from_yaml(DEFAULT_CONFIG)
    }

    pub fn from_yaml(content: &str) -> Result<Self, SandboxError> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let config: AppConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SandboxError> {
        for coin in &self.market.coins {
            if coin.base_price <= 0.0 || coin.volatility <= 0.0 {
                return Err(SandboxError::Config(format!(
                    "coin {}: base_price and volatility must be positive",
                    coin.id
                )));
            }
            if !(0.0..=1.0).contains(&coin.prediction.confidence) {
                return Err(SandboxError::Config(format!(
                    "coin {}: prediction confidence must lie in [0, 1]",
                    coin.id
                )));
            }
        }
        if self.chat.documents_max <= self.chat.documents_min {
            return Err(SandboxError::Config(
                "chat: documents_max must exceed documents_min".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_port() -> u16 {
    3000
}

fn default_window_days() -> u32 {
    market_defaults::DEFAULT_WINDOW_DAYS
}

fn default_drift_bias() -> f64 {
    market_defaults::DEFAULT_DRIFT_BIAS
}

fn default_max_volume() -> u64 {
    market_defaults::DEFAULT_MAX_VOLUME
}

fn default_response_delay_ms() -> u64 {
    chat_defaults::DEFAULT_RESPONSE_DELAY_MS
}

fn default_documents_min() -> u64 {
    chat_defaults::DEFAULT_DOCUMENTS_MIN
}

fn default_documents_max() -> u64 {
    chat_defaults::DEFAULT_DOCUMENTS_MAX
}

fn default_relevancy_base() -> f64 {
    chat_defaults::DEFAULT_RELEVANCY_BASE
}

fn default_relevancy_spread() -> f64 {
    chat_defaults::DEFAULT_RELEVANCY_SPREAD
}

fn default_processing_min_secs() -> f64 {
    chat_defaults::DEFAULT_PROCESSING_MIN_SECS
}

fn default_processing_spread_secs() -> f64 {
    chat_defaults::DEFAULT_PROCESSING_SPREAD_SECS
}
