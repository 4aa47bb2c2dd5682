//! Configuration for the webhook dispatcher

use capnotify_capture::ReportTimeZone;
use capnotify_config::DEFAULT_WEBHOOK_PREFIX;
use std::time::Duration;

/// Total time allowed for one delivery
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the webhook dispatcher
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Total request timeout, connect through response headers
    pub timeout: Duration,

    /// User-Agent header for outgoing requests
    pub user_agent: String,

    /// Prefix a webhook URL must start with for record notifications
    pub endpoint_prefix: String,

    /// Time zone for the capture time in reports
    pub time_zone: ReportTimeZone,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("capnotify/{}", env!("CARGO_PKG_VERSION")),
            endpoint_prefix: DEFAULT_WEBHOOK_PREFIX.to_string(),
            time_zone: ReportTimeZone::Local,
        }
    }
}

impl DispatcherConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> DispatcherConfigBuilder {
        DispatcherConfigBuilder::new()
    }
}

/// Builder for DispatcherConfig
#[derive(Debug, Clone, Default)]
pub struct DispatcherConfigBuilder {
    config: DispatcherConfig,
}

impl DispatcherConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: DispatcherConfig::default(),
        }
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the required webhook URL prefix
    pub fn endpoint_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.endpoint_prefix = prefix.into();
        self
    }

    /// Set the report time zone
    pub fn time_zone(mut self, time_zone: ReportTimeZone) -> Self {
        self.config.time_zone = time_zone;
        self
    }

    /// Build the configuration
    pub fn build(self) -> DispatcherConfig {
        self.config
    }
}
