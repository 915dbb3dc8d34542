//! Telegram notifier tests against a mock server

use serde_json::json;
use std::time::Duration;
use trend_alert::notify::{Notifier, NotifyError, TelegramConfig, TelegramNotifier};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn notifier(server: &MockServer) -> TelegramNotifier {
    TelegramNotifier::new(TelegramConfig {
        base_url: server.uri(),
        token: "123:abc".to_string(),
        chat_id: "42".to_string(),
        parse_mode: "Markdown".to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_send_posts_markdown_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_partial_json(json!({
            "chat_id": "42",
            "text": "🚨 *BTC TRADING ALERT!*",
            "parse_mode": "Markdown"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    notifier(&server)
        .send("🚨 *BTC TRADING ALERT!*")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rejected_message_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("Bad Request: can't parse entities"),
        )
        .mount(&server)
        .await;

    let result = notifier(&server).send("*unclosed").await;

    match result {
        Err(NotifyError::Status { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("can't parse entities"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_error_hides_token() {
    let notifier = TelegramNotifier::new(TelegramConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        token: "SECRET123:TOKENXYZ".to_string(),
        chat_id: "42".to_string(),
        parse_mode: "Markdown".to_string(),
        timeout: Duration::from_secs(2),
    })
    .unwrap();

    let err = notifier.send("hello").await.unwrap_err();

    assert!(matches!(err, NotifyError::Http(_)));
    let text = err.to_string();
    assert!(!text.contains("TOKENXYZ"), "token leaked: {}", text);
    assert!(!text.contains("SECRET123"), "token leaked: {}", text);
}
