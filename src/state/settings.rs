//! Console settings with persistence.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default schema loaded when a database first appears.
pub const DEFAULT_SCHEMA: &str = "main";

/// Upper bound for poll intervals and toast lifetimes (one day).
pub const MAX_SECS: u64 = 24 * 60 * 60;

/// Console settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConsoleSettings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub polling: PollingSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Where the API lives
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_static_prefix")]
    pub static_prefix: String,
    #[serde(default = "default_sqlite_prefix")]
    pub sqlite_prefix: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            static_prefix: default_static_prefix(),
            sqlite_prefix: default_sqlite_prefix(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// Poll cadence for the two endpoint families
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollingSettings {
    #[serde(default = "default_interval")]
    pub static_interval_secs: u64,
    #[serde(default = "default_interval")]
    pub database_interval_secs: u64,
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            static_interval_secs: default_interval(),
            database_interval_secs: default_interval(),
        }
    }
}

impl PollingSettings {
    pub fn static_interval(&self) -> Duration {
        Duration::from_secs(self.static_interval_secs.clamp(1, MAX_SECS))
    }

    pub fn database_interval(&self) -> Duration {
        Duration::from_secs(self.database_interval_secs.clamp(1, MAX_SECS))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplaySettings {
    #[serde(default = "default_schema")]
    pub default_schema: String,
    #[serde(default = "default_toast_ttl")]
    pub toast_ttl_secs: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { default_schema: default_schema(), toast_ttl_secs: default_toast_ttl() }
    }
}

impl DisplaySettings {
    pub fn toast_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.toast_ttl_secs.min(MAX_SECS) as i64)
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_static_prefix() -> String {
    "/api/static".to_string()
}

fn default_sqlite_prefix() -> String {
    "/api/sqlite".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_interval() -> u64 {
    30
}

fn default_schema() -> String {
    DEFAULT_SCHEMA.to_string()
}

fn default_toast_ttl() -> u64 {
    5
}
