// capnotify - capture-event notifications over messaging webhooks
//
// This library bundles the settings store, the captured record model and
// report formatter, and the webhook dispatcher behind one dependency.

// Re-export member crates
#[cfg(feature = "config")]
pub use capnotify_config;

#[cfg(feature = "capture")]
pub use capnotify_capture;

#[cfg(feature = "webhooks")]
pub use capnotify_webhooks;

/// Commonly used types
pub mod prelude {
    #[cfg(feature = "config")]
    pub use capnotify_config::{
        ConfigError, FileSettingsStore, MemorySettingsStore, NotificationConfig,
        NotificationSettings, SettingsStore, Validate,
    };

    #[cfg(feature = "capture")]
    pub use capnotify_capture::{
        CapturedRecord, CookieToken, JsonRecordStore, MemoryRecordStore, RecordStore,
        ReportFormatter, ReportTimeZone, StoreError,
    };

    #[cfg(feature = "webhooks")]
    pub use capnotify_webhooks::{
        CaptureNotifier, Delivery, DispatcherConfig, NotifyError, WebhookDispatcher,
    };
}
