//! Webhook delivery for capnotify
//!
//! Sends capture reports to a messaging webhook (the Telegram Bot API
//! `sendMessage` method by default) and reports every failure back to the
//! caller.
//!
//! # Features
//!
//! - **Raw delivery**: POST any text as `{"chat_id", "text"}` JSON
//! - **Record delivery**: look up a captured record, format it, send it
//! - **Bounded**: one request per call under a fixed total timeout
//! - **Explicit outcomes**: configuration, lookup, transport and remote-status
//!   errors are distinct variants of [`NotifyError`]
//!
//! Nothing here retries, queues or rate-limits.
//!
//! # Example: Sending text
//!
//! ```rust,no_run
//! use capnotify_webhooks::{DispatcherConfig, WebhookDispatcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher = WebhookDispatcher::new(DispatcherConfig::default())?;
//!
//!     dispatcher
//!         .send_raw(
//!             "https://api.telegram.org/bot<token>/sendMessage",
//!             "-1001234567890",
//!             "hello",
//!         )
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! # Example: Notifying about a capture
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use capnotify_capture::MemoryRecordStore;
//! use capnotify_config::NotificationConfig;
//! use capnotify_webhooks::{CaptureNotifier, DispatcherConfig, WebhookDispatcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(NotificationConfig::open("capnotify.json")?);
//!     let records = Arc::new(MemoryRecordStore::new());
//!     let dispatcher = WebhookDispatcher::new(DispatcherConfig::default())?;
//!
//!     let notifier = CaptureNotifier::new(config, records, dispatcher);
//!     notifier.spawn_notify("record-id").await?;
//!     Ok(())
//! }
//! ```

mod config;
mod dispatcher;
mod envelope;
mod error;
mod notifier;

pub use config::{DEFAULT_TIMEOUT, DispatcherConfig, DispatcherConfigBuilder};
pub use dispatcher::{TEST_MESSAGE, WebhookDispatcher};
pub use envelope::NotificationEnvelope;
pub use error::NotifyError;
pub use notifier::{CaptureNotifier, Delivery};

/// Result type for delivery operations
pub type Result<T> = std::result::Result<T, NotifyError>;
