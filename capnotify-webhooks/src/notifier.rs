//! Enablement-aware entry point for host applications

use crate::{Result, WebhookDispatcher};
use capnotify_capture::RecordStore;
use capnotify_config::NotificationConfig;
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// What happened to a notification request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The webhook accepted the report
    Sent,
    /// Notifications are disabled; nothing was looked up or sent
    Skipped,
}

/// Checks the enabled flag and sends record reports with the current settings.
///
/// The dispatcher itself never looks at the enabled flag; this type is the
/// caller that does.
#[derive(Clone)]
pub struct CaptureNotifier {
    config: Arc<NotificationConfig>,
    records: Arc<dyn RecordStore>,
    dispatcher: WebhookDispatcher,
}

impl CaptureNotifier {
    pub fn new(
        config: Arc<NotificationConfig>,
        records: Arc<dyn RecordStore>,
        dispatcher: WebhookDispatcher,
    ) -> Self {
        Self {
            config,
            records,
            dispatcher,
        }
    }

    /// Send the report for `record_id` if notifications are enabled
    pub async fn notify(&self, record_id: &str) -> Result<Delivery> {
        let settings = self.config.snapshot();
        if !settings.enabled {
            debug!("notifications disabled, skipping record {}", record_id);
            return Ok(Delivery::Skipped);
        }

        self.dispatcher
            .send_for_record(
                self.records.as_ref(),
                record_id,
                &settings.webhook_url,
                &settings.chat_id,
            )
            .await?;

        Ok(Delivery::Sent)
    }

    /// Run [`notify`](Self::notify) on its own task and log the outcome
    pub fn spawn_notify(&self, record_id: impl Into<String>) -> JoinHandle<()> {
        let notifier = self.clone();
        let record_id = record_id.into();

        tokio::spawn(async move {
            match notifier.notify(&record_id).await {
                Ok(Delivery::Sent) => {
                    info!("capture notification sent for record {}", record_id)
                }
                Ok(Delivery::Skipped) => {}
                Err(e) => error!(
                    "failed to send capture notification for record {}: {}",
                    record_id, e
                ),
            }
        })
    }

    pub fn config(&self) -> &Arc<NotificationConfig> {
        &self.config
    }

    pub fn dispatcher(&self) -> &WebhookDispatcher {
        &self.dispatcher
    }
}

impl fmt::Debug for CaptureNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureNotifier")
            .field("config", &self.config)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
