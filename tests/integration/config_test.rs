//! Configuration file tests

use trend_alert::config::{Config, ReportMode};
use trend_alert::runner::RunSettings;

const EXAMPLE: &str = include_str!("../../config.toml.example");

#[test]
fn test_config_example_parses() {
    let config: Config = toml::from_str(EXAMPLE).expect("example config should parse");

    assert_eq!(config.asset.id, "bitcoin");
    assert_eq!(config.asset.symbol, "BTC");
    assert_eq!(config.alerts.thresholds.overbought, 70.0);
    assert_eq!(config.alerts.thresholds.oversold, 30.0);
    assert_eq!(config.alerts.report_mode, ReportMode::Silent);
    assert_eq!(config.indicators.rsi_period, 14);
}

#[test]
fn test_config_example_needs_token_only_for_delivery() {
    let config: Config = toml::from_str(EXAMPLE).unwrap();

    assert!(config.validate(false).is_ok());
    assert!(config.validate(true).is_err());
}

#[test]
fn test_env_overrides_supply_credentials() {
    let mut config: Config = toml::from_str(EXAMPLE).unwrap();
    config.apply_overrides(|key| match key {
        "TELEGRAM_TOKEN" => Some("123:abc".to_string()),
        "TELEGRAM_CHAT_ID" => Some("-100200".to_string()),
        _ => None,
    });

    assert_eq!(config.notifier.token.as_deref(), Some("123:abc"));
    assert_eq!(config.notifier.chat_id, "-100200");
    assert!(config.validate(true).is_ok());
}

#[test]
fn test_run_settings_from_example() {
    let config: Config = toml::from_str(EXAMPLE).unwrap();
    let settings = RunSettings::from_config(&config).unwrap();

    assert_eq!(settings.symbol, "BTC");
    assert_eq!(settings.request.lookback_days, 365);
    assert_eq!(settings.display_offset.local_minus_utc(), 7 * 3600);
}
