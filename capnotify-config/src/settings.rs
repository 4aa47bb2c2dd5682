// Notification settings model

use crate::{ConfigError, ConfigValidator, Result, Validate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the settings group that carries the notification keys.
pub const GENERAL_GROUP: &str = "general";

/// Prefix every Telegram Bot API webhook URL starts with.
pub const DEFAULT_WEBHOOK_PREFIX: &str = "https://api.telegram.org/bot";

/// The three notification settings.
///
/// Serialized keys match the persisted file and any external JSON/YAML
/// representation. Missing keys fall back to empty/false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Webhook endpoint URL
    #[serde(rename = "telegram_webhook", default)]
    pub webhook_url: String,

    /// Target chat/channel identifier
    #[serde(rename = "telegram_chat_id", default)]
    pub chat_id: String,

    /// Whether callers should attempt delivery at all
    #[serde(rename = "telegram_enabled", default)]
    pub enabled: bool,
}

impl NotificationSettings {
    /// Read settings out of a persisted group. An absent group yields defaults.
    pub fn from_group(group: Option<Value>) -> Result<Self> {
        match group {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(value) => serde_json::from_value(value)
                .map_err(|e| ConfigError::DeserializationError(e.to_string())),
        }
    }

    /// Write these settings over an existing group, keeping unrelated keys.
    pub fn merge_into(&self, group: Option<Value>) -> Result<Value> {
        let mut map = match group {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };

        let ours = serde_json::to_value(self)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;
        if let Value::Object(ours) = ours {
            map.extend(ours);
        }

        Ok(Value::Object(map))
    }

    /// Human-readable on/off phrase for the enabled flag
    pub fn enabled_phrase(&self) -> &'static str {
        if self.enabled { "enabled" } else { "disabled" }
    }
}

impl Validate for NotificationSettings {
    fn validate(&self) -> Result<()> {
        ConfigValidator::not_empty(&self.webhook_url, "telegram_webhook")?;
        ConfigValidator::not_empty(&self.chat_id, "telegram_chat_id")?;
        ConfigValidator::has_prefix(&self.webhook_url, DEFAULT_WEBHOOK_PREFIX, "telegram_webhook")
    }
}
