//! CoinGecko client tests against a mock server

use serde_json::json;
use std::time::Duration;
use trend_alert::fetch::{CoinGeckoClient, CoinGeckoConfig, FetchError, FetchRequest, PriceFetcher};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DAY_MS: i64 = 86_400_000;
const START_MS: i64 = 1_704_067_200_000;

fn client(server: &MockServer, max_retries: u32) -> CoinGeckoClient {
    CoinGeckoClient::with_config(CoinGeckoConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
        max_retries,
        retry_delay: Duration::ZERO,
        user_agent: "trend-alert-test".to_string(),
    })
    .unwrap()
}

fn request() -> FetchRequest {
    FetchRequest {
        asset_id: "bitcoin".to_string(),
        vs_currency: "usd".to_string(),
        lookback_days: 30,
    }
}

fn chart(closes: &[f64]) -> serde_json::Value {
    let prices: Vec<_> = closes
        .iter()
        .enumerate()
        .map(|(i, c)| json!([START_MS + i as i64 * DAY_MS, c]))
        .collect();
    json!({ "prices": prices, "market_caps": [], "total_volumes": [] })
}

#[tokio::test]
async fn test_fetch_daily_series() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .and(query_param("vs_currency", "usd"))
        .and(query_param("days", "30"))
        .and(query_param("interval", "daily"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart(&[100.0, 102.0, 99.0])))
        .expect(1)
        .mount(&server)
        .await;

    let series = client(&server, 3)
        .fetch_daily_series(&request())
        .await
        .unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.closes(), vec![100.0, 102.0, 99.0]);

    // Derived fields: open is the previous close, first row opens at its close
    let first = series.get(0).unwrap();
    assert_eq!(first.open, 100.0);
    let third = series.get(2).unwrap();
    assert_eq!(third.open, 102.0);
    assert_eq!(third.high, 102.0);
    assert_eq!(third.low, 99.0);
}

#[tokio::test]
async fn test_fetch_retries_after_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart(&[1.0, 2.0])))
        .mount(&server)
        .await;

    let series = client(&server, 3)
        .fetch_daily_series(&request())
        .await
        .unwrap();

    assert_eq!(series.len(), 2);
}

#[tokio::test]
async fn test_fetch_gives_up_after_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .expect(2)
        .mount(&server)
        .await;

    let result = client(&server, 2).fetch_daily_series(&request()).await;

    match result {
        Err(FetchError::Exhausted { attempts, last }) => {
            assert_eq!(attempts, 2);
            assert!(last.contains("429"));
        }
        other => panic!("expected exhausted error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_prices_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prices": [] })))
        .mount(&server)
        .await;

    let result = client(&server, 1).fetch_daily_series(&request()).await;
    assert!(matches!(result, Err(FetchError::Exhausted { attempts: 1, .. })));
}
