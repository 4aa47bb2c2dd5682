//! Webhook dispatcher for sending capture notifications

use crate::{DispatcherConfig, NotificationEnvelope, NotifyError, Result};
use capnotify_capture::{RecordStore, ReportFormatter};
use capnotify_config::ConfigValidator;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};

/// Text sent by [`WebhookDispatcher::send_test`]
pub const TEST_MESSAGE: &str = "Test notification from capnotify";

/// Sends notification text to a messaging webhook.
///
/// Every call is one attempt: no retries, no queue and no state kept between
/// calls. Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct WebhookDispatcher {
    config: DispatcherConfig,
    http_client: Client,
    formatter: ReportFormatter,
}

impl WebhookDispatcher {
    /// Create a dispatcher; the timeout is fixed on the HTTP client
    pub fn new(config: DispatcherConfig) -> Result<Self> {
        // Nothing has been sent yet, so a builder failure is a settings problem.
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| NotifyError::ConfigError(format!("invalid HTTP client settings: {}", e)))?;

        Ok(Self {
            formatter: ReportFormatter::with_time_zone(config.time_zone),
            config,
            http_client,
        })
    }

    /// POST `text` to `endpoint` for `chat_id`.
    ///
    /// Fails with `ConfigError` before any network activity when either
    /// endpoint or chat id is empty. Only status 200 counts as delivered.
    pub async fn send_raw(&self, endpoint: &str, chat_id: &str, text: &str) -> Result<()> {
        if endpoint.is_empty() || chat_id.is_empty() {
            return Err(NotifyError::ConfigError(
                "webhook URL or chat ID not configured".to_string(),
            ));
        }

        let body = NotificationEnvelope::new(chat_id, text).to_bytes()?;

        let response = self
            .http_client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        // The body is never read; dropping the response releases the connection.
        let status = response.status();
        drop(response);

        if status != StatusCode::OK {
            return Err(NotifyError::RemoteError {
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    /// Format the record `record_id` and send it.
    ///
    /// The endpoint prefix is checked before the store is consulted.
    pub async fn send_for_record(
        &self,
        records: &dyn RecordStore,
        record_id: &str,
        endpoint: &str,
        chat_id: &str,
    ) -> Result<()> {
        ConfigValidator::has_prefix(endpoint, &self.config.endpoint_prefix, "webhook URL")?;

        let record = records.get_record_by_id(record_id).await?;
        let text = self.formatter.format(&record);

        self.send_raw(endpoint, chat_id, &text).await
    }

    /// Send [`TEST_MESSAGE`] and report how long the round trip took
    pub async fn send_test(&self, endpoint: &str, chat_id: &str) -> Result<Duration> {
        let start = Instant::now();
        self.send_raw(endpoint, chat_id, TEST_MESSAGE).await?;
        Ok(start.elapsed())
    }

    /// Get the configuration
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Formatter used for record reports
    pub fn formatter(&self) -> &ReportFormatter {
        &self.formatter
    }
}
