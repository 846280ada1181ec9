//! Notifications raised by the console views, queued for the console.

use crate::views::{DatabaseEvent, SchemaEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Database(DatabaseEvent),
    Schema(SchemaEvent),
}

/// Outward requests for the event bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    LoadSchema(String),
    LoadTableData { schema: String, table: String },
}
