//! Delivery commands

use capnotify_capture::JsonRecordStore;
use capnotify_config::NotificationConfig;
use capnotify_webhooks::{CaptureNotifier, Delivery, WebhookDispatcher};
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

use crate::error::CliResult;

/// Send arbitrary text with the stored settings.
pub async fn text(
    config: &NotificationConfig,
    dispatcher: &WebhookDispatcher,
    text: &str,
) -> CliResult<()> {
    let settings = config.snapshot();
    if !settings.enabled {
        warn!("notifications are disabled; sending anyway");
    }

    dispatcher
        .send_raw(&settings.webhook_url, &settings.chat_id, text)
        .await?;

    println!("  {} message delivered", "✓".green());
    Ok(())
}

/// Send the fixed test message and report latency.
pub async fn test(config: &NotificationConfig, dispatcher: &WebhookDispatcher) -> CliResult<()> {
    let settings = config.snapshot();
    let latency = dispatcher
        .send_test(&settings.webhook_url, &settings.chat_id)
        .await?;

    println!(
        "  {} test message delivered in {} ms",
        "✓".green(),
        latency.as_millis()
    );
    Ok(())
}

/// Send the report for one record from a JSON records file.
///
/// The records file is only read when notifications are enabled.
pub async fn record(
    config: Arc<NotificationConfig>,
    dispatcher: WebhookDispatcher,
    records_path: &Path,
    record_id: &str,
) -> CliResult<()> {
    if !config.is_enabled() {
        print_skipped();
        return Ok(());
    }

    let records = JsonRecordStore::open(records_path)?;
    let notifier = CaptureNotifier::new(config, Arc::new(records), dispatcher);

    match notifier.notify(record_id).await? {
        Delivery::Sent => println!("  {} report for {} delivered", "✓".green(), record_id),
        Delivery::Skipped => print_skipped(),
    }
    Ok(())
}

fn print_skipped() {
    println!(
        "  {} notifications are disabled; nothing sent",
        "⚠".yellow()
    );
}
