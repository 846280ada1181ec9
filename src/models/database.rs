// Database summary models

use serde::{Deserialize, Serialize};

use super::Entity;

/// Connection-level summary of the remote database service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub schemas: Vec<String>,
    #[serde(default)]
    pub pool: Option<Pool>,
}

/// Connection pool usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub cur: u32,
    pub max: u32,
}

impl Pool {
    /// Gauge label, e.g. "3/10"
    pub fn label(&self) -> String {
        format!("{}/{}", self.cur, self.max)
    }
}

/// There is one database per connection, so the key carries no data.
impl Entity for Database {
    type Key = ();

    fn key(&self) -> Self::Key {}
}
