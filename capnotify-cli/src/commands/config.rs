//! Settings commands
//!
//! Every change goes through the setters, so it is on disk before the command
//! returns.

use capnotify_config::{NotificationConfig, Validate};
use colored::Colorize;
use std::path::Path;

use crate::error::CliResult;

/// Print the stored settings.
pub fn show(config: &NotificationConfig, path: &Path) -> CliResult<()> {
    let settings = config.snapshot();

    println!();
    println!("  {} {}", "Settings file:".bright_white().bold(), path.display());
    println!(
        "  {} {}",
        "telegram_webhook:".bright_white().bold(),
        display_or_unset(&settings.webhook_url)
    );
    println!(
        "  {} {}",
        "telegram_chat_id:".bright_white().bold(),
        display_or_unset(&settings.chat_id)
    );
    println!(
        "  {} {}",
        "telegram_enabled:".bright_white().bold(),
        if settings.enabled {
            "true".green()
        } else {
            "false".yellow()
        }
    );
    println!();

    Ok(())
}

pub fn set_webhook(config: &NotificationConfig, url: &str) -> CliResult<()> {
    config.set_webhook_url(url)?;
    println!("  {} webhook URL saved", "✓".green());
    Ok(())
}

pub fn set_chat(config: &NotificationConfig, chat_id: &str) -> CliResult<()> {
    config.set_chat_id(chat_id)?;
    println!("  {} chat ID saved", "✓".green());
    Ok(())
}

pub fn set_enabled(config: &NotificationConfig, enabled: bool) -> CliResult<()> {
    config.set_enabled(enabled)?;
    println!(
        "  {} notifications {}",
        "✓".green(),
        config.snapshot().enabled_phrase()
    );
    Ok(())
}

/// Check that the stored settings are complete enough to deliver.
pub fn check(config: &NotificationConfig) -> CliResult<()> {
    let settings = config.snapshot();
    settings.validate()?;

    println!("  {} settings are complete", "✓".green());
    if !settings.enabled {
        println!(
            "  {} notifications are disabled; run `capnotify config enable`",
            "⚠".yellow()
        );
    }
    Ok(())
}

fn display_or_unset(value: &str) -> String {
    if value.is_empty() {
        "(not set)".dimmed().to_string()
    } else {
        value.to_string()
    }
}
