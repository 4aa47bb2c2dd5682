// Notification settings for capnotify
//
// Holds the webhook URL, chat id and enabled flag, and writes them through to
// a durable settings store on every change.

pub mod error;
pub mod loader;
pub mod settings;
pub mod store;
pub mod validation;

pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{DEFAULT_WEBHOOK_PREFIX, GENERAL_GROUP, NotificationSettings};
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore};
pub use validation::{ConfigValidator, Validate};

use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Process-wide notification configuration.
///
/// Share it behind an `Arc`. Setters are serialized through the store lock and
/// only publish a new value once it has been flushed; getters read the last
/// published snapshot.
pub struct NotificationConfig {
    current: RwLock<NotificationSettings>,
    store: Mutex<Box<dyn SettingsStore>>,
}

impl NotificationConfig {
    /// Load settings from a store
    pub fn load<S: SettingsStore + 'static>(store: S) -> Result<Self> {
        let settings = NotificationSettings::from_group(store.group(GENERAL_GROUP))?;
        debug!(
            "notification settings loaded (notifications {})",
            settings.enabled_phrase()
        );

        Ok(Self {
            current: RwLock::new(settings),
            store: Mutex::new(Box::new(store)),
        })
    }

    /// Load settings from a file, creating it on the first change if missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::load(FileSettingsStore::open(path)?)
    }

    /// Settings that live only as long as the process
    pub fn in_memory() -> Self {
        Self {
            current: RwLock::new(NotificationSettings::default()),
            store: Mutex::new(Box::new(MemorySettingsStore::new())),
        }
    }

    /// Set the webhook endpoint URL
    pub fn set_webhook_url(&self, url: impl Into<String>) -> Result<()> {
        let url = url.into();
        self.update(|s| s.webhook_url = url.clone())?;
        info!("telegram webhook URL set to: {}", url);
        Ok(())
    }

    /// Set the target chat id
    pub fn set_chat_id(&self, chat_id: impl Into<String>) -> Result<()> {
        let chat_id = chat_id.into();
        self.update(|s| s.chat_id = chat_id.clone())?;
        info!("telegram chat ID set to: {}", chat_id);
        Ok(())
    }

    /// Turn notifications on or off
    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        let settings = self.update(|s| s.enabled = enabled)?;
        info!(
            "telegram notifications are now {}",
            settings.enabled_phrase()
        );
        Ok(())
    }

    pub fn webhook_url(&self) -> String {
        self.current.read().webhook_url.clone()
    }

    pub fn chat_id(&self) -> String {
        self.current.read().chat_id.clone()
    }

    pub fn is_enabled(&self) -> bool {
        self.current.read().enabled
    }

    /// All three settings as one consistent value
    pub fn snapshot(&self) -> NotificationSettings {
        self.current.read().clone()
    }

    /// Apply a change, persist the whole group, then publish it.
    fn update(&self, apply: impl FnOnce(&mut NotificationSettings)) -> Result<NotificationSettings> {
        let mut store = self.store.lock();

        let mut next = self.current.read().clone();
        apply(&mut next);

        let group = next.merge_into(store.group(GENERAL_GROUP))?;
        store.set_group(GENERAL_GROUP, group)?;
        store.flush()?;

        *self.current.write() = next.clone();
        Ok(next)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for NotificationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationConfig")
            .field("current", &*self.current.read())
            .finish_non_exhaustive()
    }
}
