//! End-to-end runs against mock market-data and chat servers

use serde_json::{json, Value};
use trend_alert::alert::AlertEvent;
use trend_alert::cli::build_orchestrator;
use trend_alert::config::Config;
use trend_alert::error::BotError;
use trend_alert::runner::{RunOutcome, RunState};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DAY_MS: i64 = 86_400_000;
const START_MS: i64 = 1_704_067_200_000;

fn config(market: &MockServer, chat: &MockServer, report_mode: &str) -> Config {
    let toml = format!(
        r#"
        [asset]
        id = "bitcoin"
        symbol = "BTC"
        lookback_days = 60

        [alerts]
        report_mode = "{report_mode}"

        [alerts.thresholds]
        overbought = 70.0
        oversold = 30.0

        [fetcher]
        base_url = "{market}"
        max_retries = 2
        retry_delay_secs = 0

        [notifier]
        base_url = "{chat}"
        chat_id = "42"
        token = "123:abc"
        "#,
        report_mode = report_mode,
        market = market.uri(),
        chat = chat.uri(),
    );
    toml::from_str(&toml).unwrap()
}

async fn serve_closes(server: &MockServer, closes: &[f64]) {
    let prices: Vec<_> = closes
        .iter()
        .enumerate()
        .map(|(i, c)| json!([START_MS + i as i64 * DAY_MS, c]))
        .collect();
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prices": prices })))
        .mount(server)
        .await;
}

async fn accept_messages(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/bot[^/]+/sendMessage$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(server)
        .await;
}

async fn sent_texts(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|r| serde_json::from_slice::<Value>(&r.body).ok())
        .filter_map(|body| body["text"].as_str().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn test_falling_market_sends_oversold_alert() {
    let market = MockServer::start().await;
    let chat = MockServer::start().await;
    let closes: Vec<f64> = (0..60).map(|i| 50_000.0 - i as f64 * 250.0).collect();
    serve_closes(&market, &closes).await;
    accept_messages(&chat).await;

    let orchestrator = build_orchestrator(&config(&market, &chat, "silent"), false).unwrap();
    let report = orchestrator.run().await;

    assert_eq!(
        report.outcome,
        Ok(RunOutcome::Alerted(vec![AlertEvent::OversoldRsi { rsi: 0.0 }]))
    );

    let texts = sent_texts(&chat).await;
    assert_eq!(texts.len(), 1);
    assert!(texts[0].starts_with("🚨 *BTC TRADING ALERT!*"));
    assert!(texts[0].contains("RSI OVERSOLD"));
    assert!(texts[0].contains("$35,250.00"));
}

#[tokio::test]
async fn test_always_mode_sends_status_when_quiet() {
    let market = MockServer::start().await;
    let chat = MockServer::start().await;
    let closes: Vec<f64> = (0..100)
        .map(|i| 100.0 + i as f64 * 0.4 + if i % 2 == 0 { 1.0 } else { -1.0 })
        .collect();
    serve_closes(&market, &closes).await;
    accept_messages(&chat).await;

    let orchestrator = build_orchestrator(&config(&market, &chat, "always"), false).unwrap();
    let report = orchestrator.run().await;

    assert_eq!(report.outcome, Ok(RunOutcome::StatusReported));
    let texts = sent_texts(&chat).await;
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("No alerts"));
}

#[tokio::test]
async fn test_provider_outage_reports_error() {
    let market = MockServer::start().await;
    let chat = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&market)
        .await;
    accept_messages(&chat).await;

    let orchestrator = build_orchestrator(&config(&market, &chat, "silent"), false).unwrap();
    let report = orchestrator.run().await;

    assert!(matches!(report.outcome, Err(BotError::DataUnavailable(_))));
    assert_eq!(report.failed_in, Some(RunState::Fetching));
    assert!(report.error_reported);

    let texts = sent_texts(&chat).await;
    assert_eq!(texts.len(), 1);
    assert!(texts[0].starts_with("⚠️ *Bot Error!*"));
    assert!(texts[0].contains("DataUnavailable"));
}

#[tokio::test]
async fn test_short_history_reports_insufficient() {
    let market = MockServer::start().await;
    let chat = MockServer::start().await;
    serve_closes(&market, &[100.0, 101.0, 102.0, 101.5, 103.0]).await;
    accept_messages(&chat).await;

    let orchestrator = build_orchestrator(&config(&market, &chat, "silent"), false).unwrap();
    let report = orchestrator.run().await;

    assert_eq!(
        report.outcome,
        Err(BotError::InsufficientHistory {
            required: 16,
            available: 5
        })
    );
    assert_eq!(report.failed_in, Some(RunState::Computing));
    let texts = sent_texts(&chat).await;
    assert!(texts[0].contains("InsufficientHistory"));
}

#[tokio::test]
async fn test_dry_run_needs_no_token() {
    let market = MockServer::start().await;
    let chat = MockServer::start().await;
    let mut config = config(&market, &chat, "silent");
    config.notifier.token = None;

    assert!(build_orchestrator(&config, false).is_err());
    assert!(build_orchestrator(&config, true).is_ok());
}

#[tokio::test]
async fn test_delivery_failure_hides_token() {
    let market = MockServer::start().await;
    let chat = MockServer::start().await;
    let closes: Vec<f64> = (0..60).map(|i| 50_000.0 - i as f64 * 250.0).collect();
    serve_closes(&market, &closes).await;

    let mut config = config(&market, &chat, "silent");
    config.notifier.base_url = "http://127.0.0.1:1".to_string();
    config.notifier.token = Some("SECRET123:TOKENXYZ".to_string());

    let report = build_orchestrator(&config, false).unwrap().run().await;

    match report.outcome {
        Err(BotError::DeliveryFailure(detail)) => {
            assert!(!detail.contains("TOKENXYZ"), "token leaked: {}", detail);
        }
        other => panic!("expected delivery failure, got {:?}", other),
    }
    assert_eq!(report.failed_in, Some(RunState::Notifying));
    assert!(!report.error_reported);
}
