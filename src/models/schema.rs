// Schema and table models

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Entity;

/// A schema attached to the connection ("main", "temp", attached files).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "schema")]
    pub name: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub memory: bool,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Schema {
    /// The backing file, if any. Empty strings count as absent.
    pub fn file(&self) -> Option<&str> {
        self.filename.as_deref().filter(|name| !name.is_empty())
    }
}

impl Entity for Schema {
    type Key = String;

    fn key(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub schema: String,
    #[serde(default)]
    pub count: i64,
}

impl Table {
    pub fn key(&self) -> TableKey {
        TableKey::new(self.schema.clone(), self.name.clone())
    }
}

/// Identity of a table: stable across polls regardless of row count or position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableKey {
    pub schema: String,
    pub name: String,
}

impl TableKey {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self { schema: schema.into(), name: name.into() }
    }
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}
