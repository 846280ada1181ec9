use thiserror::Error;

use crate::components::NodeId;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Duplicate key in entry list: {0}")]
    DuplicateKey(String),

    #[error("Node {0} is not part of this collection")]
    UnknownNode(NodeId),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Template {template} has no slot named {slot}")]
    UnknownSlot { template: String, slot: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Request to {1} failed with status {0}")]
    Status(u16, String),
}

/// Convenience Result type using our Error
pub type Result<T> = std::result::Result<T, Error>;
