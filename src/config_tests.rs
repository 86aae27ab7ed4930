//! Unit tests for configuration structures and parsing.

#[cfg(test)]
mod config_tests {
    use crate::config::*;

    // ============= CoinSpec Tests =============

    #[test]
    fn test_coin_spec_deserialize() {
        let yaml = r#"
id: "bitcoin"
name: "Bitcoin"
symbol: "BTC"
current_price: 43250.50
price_change_24h: 2.45
market_cap: 846000000000
volume_24h: 28000000000
base_price: 43000.0
volatility: 0.03
prediction:
  next_day: 44100.0
  next_week: 45200.0
  confidence: 0.87
sentiment:
  positive: 65
  neutral: 25
  negative: 10
"#;
        let coin: CoinSpec = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(coin.id, "bitcoin");
        assert_eq!(coin.symbol, "BTC");
        assert_eq!(coin.base_price, 43000.0);
        assert_eq!(coin.volatility, 0.03);
        assert_eq!(coin.prediction.next_week, 45200.0);
        assert_eq!(coin.sentiment.positive, 65.0);
    }

    // ============= MarketConfig Tests =============

    #[test]
    fn test_market_config_defaults_in_deserialize() {
        // Missing tunables should use defaults
        let yaml = r#"
coins: []
"#;
        let market: MarketConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(market.window_days, 30);
        assert_eq!(market.drift_bias, 0.48);
        assert_eq!(market.max_volume, 1_000_000_000);
    }

    #[test]
    fn test_market_config_overrides() {
        let yaml = r#"
window_days: 7
drift_bias: 0.5
max_volume: 1000
coins: []
"#;
        let market: MarketConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(market.window_days, 7);
        assert_eq!(market.drift_bias, 0.5);
        assert_eq!(market.max_volume, 1000);
    }

    // ============= ChatConfig Tests =============

    #[test]
    fn test_chat_config_defaults_in_deserialize() {
        let yaml = r#"
responses: []
fallback: "no match for {message}"
"#;
        let chat: ChatConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(chat.response_delay_ms, 1000);
        assert_eq!(chat.documents_min, 100);
        assert_eq!(chat.documents_max, 600);
        assert_eq!(chat.relevancy_base, 0.7);
        assert_eq!(chat.relevancy_spread, 0.3);
        assert_eq!(chat.processing_min_secs, 0.5);
        assert_eq!(chat.processing_spread_secs, 2.0);
    }

    #[test]
    fn test_canned_exchange_deserialize() {
        let yaml = r#"
query: "Explain the concept of bail"
response: |-
  Bail is a legal process.

  Second paragraph.
"#;
        let entry: CannedExchange = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(entry.query, "Explain the concept of bail");
        assert!(entry.response.contains("Second paragraph."));
    }

    // ============= ServerConfig Tests =============

    #[test]
    fn test_server_config_default_port() {
        assert_eq!(ServerConfig::default().port, 3000);
    }

    // ============= Builtin Config Tests =============

    #[test]
    fn test_builtin_config_parses() {
        let config = AppConfig::builtin().unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.market.coins.len(), 3);
        assert_eq!(config.chat.responses.len(), 2);
        assert!(config.chat.fallback.contains("{message}"));
    }

    #[test]
    fn test_builtin_catalog_contents() {
        let config = AppConfig::builtin().unwrap();

        let ids: Vec<&str> = config.market.coins.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["bitcoin", "ethereum", "cardano"]);

        assert_eq!(config.chat.responses[0].query, "What is Section 498A IPC?");
        assert_eq!(config.chat.responses[1].query, "Explain the concept of bail");
    }

    // ============= Validation Tests =============

    fn minimal_yaml(base_price: f64, volatility: f64, confidence: f64) -> String {
        format!(
            r#"
market:
  coins:
    - id: "test"
      name: "Test"
      symbol: "TST"
      current_price: 1.0
      price_change_24h: 0.0
      market_cap: 1
      volume_24h: 1
      base_price: {base_price}
      volatility: {volatility}
      prediction:
        next_day: 1.0
        next_week: 1.0
        confidence: {confidence}
      sentiment:
        positive: 1
        neutral: 1
        negative: 1
chat:
  responses: []
  fallback: "{{message}}"
"#
        )
    }

    #[test]
    fn test_validation_rejects_non_positive_base_price() {
        assert!(AppConfig::from_yaml(&minimal_yaml(0.0, 0.03, 0.5)).is_err());
        assert!(AppConfig::from_yaml(&minimal_yaml(-1.0, 0.03, 0.5)).is_err());
    }

    #[test]
    fn test_validation_rejects_non_positive_volatility() {
        assert!(AppConfig::from_yaml(&minimal_yaml(100.0, 0.0, 0.5)).is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_confidence() {
        assert!(AppConfig::from_yaml(&minimal_yaml(100.0, 0.03, 1.5)).is_err());
        assert!(AppConfig::from_yaml(&minimal_yaml(100.0, 0.03, -0.1)).is_err());
    }

    #[test]
    fn test_validation_accepts_positive_params() {
        assert!(AppConfig::from_yaml(&minimal_yaml(100.0, 0.03, 0.5)).is_ok());
    }

    #[test]
    fn test_validation_rejects_inverted_document_bounds() {
        let yaml = r#"
market:
  coins: []
chat:
  documents_min: 500
  documents_max: 100
  responses: []
  fallback: "{message}"
"#;
        assert!(AppConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_config_clone_and_debug() {
        let config = AppConfig::builtin().unwrap();
        let cloned = config.clone();

        assert_eq!(cloned.market.coins.len(), config.market.coins.len());
        assert!(format!("{:?}", config).contains("AppConfig"));
    }
}
