//! capnotify CLI - manage notification settings and send capture reports.
//!
//! # Commands
//!
//! - `capnotify config show` - Print the stored settings
//! - `capnotify config set-webhook <url>` - Set the webhook URL
//! - `capnotify config set-chat <id>` - Set the chat ID
//! - `capnotify config enable|disable` - Turn notifications on or off
//! - `capnotify config check` - Validate the stored settings
//! - `capnotify send <text>` - Send a text message
//! - `capnotify test` - Send a test message
//! - `capnotify notify --records <file> <id>` - Send the report for a record

use capnotify_capture::ReportTimeZone;
use capnotify_config::NotificationConfig;
use capnotify_webhooks::{DispatcherConfig, WebhookDispatcher};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

mod commands;
mod error;
mod logging;

use commands::{config, send};
use error::CliResult;
use logging::LogFormat;

/// capnotify - capture notifications over messaging webhooks
#[derive(Parser)]
#[command(name = "capnotify")]
#[command(version)]
#[command(about = "Manage notification settings and deliver capture reports")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (.json, .toml, .yaml)
    #[arg(
        short,
        long,
        global = true,
        env = "CAPNOTIFY_CONFIG",
        default_value = "capnotify.json"
    )]
    config: PathBuf,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show and change notification settings
    #[command(alias = "c")]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Send a text message with the stored settings
    Send(SendArgs),

    /// Send a test message with the stored settings
    Test(DeliveryArgs),

    /// Send the report for a captured record
    #[command(alias = "n")]
    Notify(NotifyArgs),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the stored settings
    Show,

    /// Set the webhook URL
    SetWebhook {
        /// Full sendMessage URL, including the bot token
        url: String,
    },

    /// Set the target chat ID
    SetChat {
        /// Chat or channel identifier
        #[arg(allow_hyphen_values = true)]
        chat_id: String,
    },

    /// Turn notifications on
    Enable,

    /// Turn notifications off
    Disable,

    /// Check that the stored settings can be used for delivery
    Check,
}

#[derive(Args)]
struct DeliveryArgs {
    /// Request timeout in seconds
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Render capture times in UTC instead of local time
    #[arg(long)]
    utc: bool,
}

impl DeliveryArgs {
    fn dispatcher(&self) -> CliResult<WebhookDispatcher> {
        let time_zone = if self.utc {
            ReportTimeZone::Utc
        } else {
            ReportTimeZone::Local
        };

        let config = DispatcherConfig::builder()
            .timeout_secs(self.timeout_secs)
            .time_zone(time_zone)
            .build();

        Ok(WebhookDispatcher::new(config)?)
    }
}

#[derive(Args)]
struct SendArgs {
    /// Message text
    text: String,

    #[command(flatten)]
    delivery: DeliveryArgs,
}

#[derive(Args)]
struct NotifyArgs {
    /// Record ID
    record_id: String,

    /// JSON file holding an array of captured records
    #[arg(short, long)]
    records: PathBuf,

    #[command(flatten)]
    delivery: DeliveryArgs,
}

async fn run(cli: Cli) -> CliResult<()> {
    let settings = Arc::new(NotificationConfig::open(&cli.config)?);

    match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Show => config::show(&settings, &cli.config),
            ConfigCommands::SetWebhook { url } => config::set_webhook(&settings, &url),
            ConfigCommands::SetChat { chat_id } => config::set_chat(&settings, &chat_id),
            ConfigCommands::Enable => config::set_enabled(&settings, true),
            ConfigCommands::Disable => config::set_enabled(&settings, false),
            ConfigCommands::Check => config::check(&settings),
        },

        Commands::Send(args) => {
            let dispatcher = args.delivery.dispatcher()?;
            send::text(&settings, &dispatcher, &args.text).await
        }

        Commands::Test(args) => {
            let dispatcher = args.dispatcher()?;
            send::test(&settings, &dispatcher).await
        }

        Commands::Notify(args) => {
            let dispatcher = args.delivery.dispatcher()?;
            send::record(settings, dispatcher, &args.records, &args.record_id).await
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle color preferences
    if cli.no_color {
        colored::control::set_override(false);
    }
    let color = !cli.no_color && std::io::stderr().is_terminal();
    logging::init(cli.verbose, cli.log_format, color);

    if let Err(e) = run(cli).await {
        eprintln!("\n  {} {}\n", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_notify() {
        let cli = Cli::try_parse_from([
            "capnotify",
            "--config",
            "settings.yaml",
            "notify",
            "--records",
            "records.json",
            "--utc",
            "sess-1",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("settings.yaml"));
        match cli.command {
            Commands::Notify(args) => {
                assert_eq!(args.record_id, "sess-1");
                assert_eq!(args.records, PathBuf::from("records.json"));
                assert!(args.delivery.utc);
                assert_eq!(args.delivery.timeout_secs, 10);
            }
            _ => panic!("expected notify"),
        }
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Cli::try_parse_from(["capnotify", "test", "--timeout-secs", "0"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["capnotify", "test", "--timeout-secs", "3"]).unwrap();
        match cli.command {
            Commands::Test(args) => assert_eq!(args.timeout_secs, 3),
            _ => panic!("expected test"),
        }
    }

    #[test]
    fn test_parse_config_set_chat() {
        // Group chat IDs are negative.
        let cli = Cli::try_parse_from(["capnotify", "config", "set-chat", "-100"]).unwrap();
        match cli.command {
            Commands::Config {
                command: ConfigCommands::SetChat { chat_id },
            } => assert_eq!(chat_id, "-100"),
            _ => panic!("expected config set-chat"),
        }
    }
}
