//! Mock market data generation for the coin analytics demo.
//!
//! Each request gets a freshly generated random-walk price history per
//! catalog coin, wrapped with the coin's static display fields and its
//! configured prediction/sentiment blocks. Nothing is persisted; two
//! consecutive requests produce different histories on purpose.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::{CoinSpec, MarketConfig, SentimentSpec};
use crate::constants::market::PRICE_FLOOR_RATIO;
use crate::error::SandboxError;
use crate::rng::RandomSource;

/// One sample of the generated price history, oldest to newest.
#[derive(Clone, Debug, Serialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    /// Rounded to 2 decimal places.
    pub price: f64,
    pub volume: u64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub next_day: f64,
    pub next_week: f64,
    pub confidence: f64,
}

/// Sentiment split in whole percentages, normalized to sum to 100.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sentiment {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl Sentiment {
    /// Scales arbitrary non-negative weights to percentages summing to
    /// exactly 100; the rounding residue lands on the largest component.
    pub fn normalized(spec: &SentimentSpec) -> Self {
        let sum = spec.positive + spec.neutral + spec.negative;
        if sum <= 0.0 {
            return Self {
                positive: 0,
                neutral: 100,
                negative: 0,
            };
        }

        let mut parts = [
            (spec.positive * 100.0 / sum).round() as i64,
            (spec.neutral * 100.0 / sum).round() as i64,
            (spec.negative * 100.0 / sum).round() as i64,
        ];
        let largest = (0..parts.len())
            .max_by_key(|&i| parts[i])
            .unwrap_or(0);
        parts[largest] += 100 - parts.iter().sum::<i64>();

        Self {
            positive: parts[0].max(0) as u32,
            neutral: parts[1].max(0) as u32,
            negative: parts[2].max(0) as u32,
        }
    }
}

/// Fully populated coin record as served by the coins endpoint.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    pub price_change_24h: f64,
    pub market_cap: u64,
    pub volume_24h: u64,
    pub price_data: Vec<PricePoint>,
    pub prediction: Prediction,
    pub sentiment: Sentiment,
}

pub struct MarketSimulator {
    config: MarketConfig,
}

impl MarketSimulator {
    pub fn new(config: MarketConfig) -> Self {
        Self { config }
    }

    /// Builds the full coin list in catalog order, one fresh price series
    /// per coin.
    pub fn generate_catalog<R: RandomSource>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Coin>, SandboxError> {
        self.config
            .coins
            .iter()
            .map(|spec| self.build_coin(rng, spec))
            .collect()
    }

    fn build_coin<R: RandomSource>(
        &self,
        rng: &mut R,
        spec: &CoinSpec,
    ) -> Result<Coin, SandboxError> {
        let price_data = self.generate_price_series(
            rng,
            spec.base_price,
            spec.volatility,
            self.config.window_days,
        )?;

        Ok(Coin {
            id: spec.id.clone(),
            name: spec.name.clone(),
            symbol: spec.symbol.clone(),
            current_price: spec.current_price,
            price_change_24h: spec.price_change_24h,
            market_cap: spec.market_cap,
            volume_24h: spec.volume_24h,
            price_data,
            prediction: Prediction {
                next_day: spec.prediction.next_day,
                next_week: spec.prediction.next_week,
                confidence: spec.prediction.confidence,
            },
            sentiment: Sentiment::normalized(&spec.sentiment),
        })
    }

    /// Random walk with a slight upward drift, one point per calendar day
    /// from `window_days` ago through today. Every step is clamped to
    /// `base_price * PRICE_FLOOR_RATIO` so the series cannot collapse.
    ///
    /// Returns exactly `window_days + 1` points with strictly increasing
    /// timestamps.
    pub fn generate_price_series<R: RandomSource>(
        &self,
        rng: &mut R,
        base_price: f64,
        volatility: f64,
        window_days: u32,
    ) -> Result<Vec<PricePoint>, SandboxError> {
        if base_price <= 0.0 || volatility <= 0.0 {
            return Err(SandboxError::InvalidSeriesParams {
                base_price,
                volatility,
            });
        }

        let floor = base_price * PRICE_FLOOR_RATIO;
        let now = Utc::now();
        let mut price = base_price;
        let mut points = Vec::with_capacity(window_days as usize + 1);

        for offset in (0..=i64::from(window_days)).rev() {
            let change = (rng.next_f64() - self.config.drift_bias) * volatility;
            // Clamp every step, not just at the end
            price = (price * (1.0 + change)).max(floor);

            let volume = (rng.next_f64() * self.config.max_volume as f64).floor() as u64;
            points.push(PricePoint {
                timestamp: now - Duration::days(offset),
                price: round_cents(price),
                volume,
            });
        }

        Ok(points)
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
