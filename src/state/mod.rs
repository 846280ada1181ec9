// Console state: settings, persistence, status and events

pub mod config;
pub mod events;
pub mod settings;
pub mod status;

pub use config::ConfigManager;
pub use events::{ConsoleCommand, ConsoleEvent};
pub use settings::{
    ConsoleSettings, DEFAULT_SCHEMA, DisplaySettings, MAX_SECS, PollingSettings, ServerSettings,
};
pub use status::{StatusLevel, StatusMessage};
