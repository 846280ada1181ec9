// Table contents returned by a table query

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Entity;
use super::schema::TableKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub table: String,
    #[serde(rename = "type", default)]
    pub decltype: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub nullable: bool,
}

impl Column {
    pub fn key(&self) -> ColumnKey {
        ColumnKey {
            schema: self.schema.clone(),
            table: self.table.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnKey {
    pub schema: String,
    pub table: String,
    pub name: String,
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.schema, self.table, self.name)
    }
}

/// A result row. The server sends either a positional array or an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(pub Value);

impl Row {
    /// Cell text in column order.
    pub fn cells(&self, columns: &[Column]) -> Vec<String> {
        match &self.0 {
            Value::Array(values) => values.iter().map(cell_text).collect(),
            Value::Object(fields) => columns
                .iter()
                .map(|column| fields.get(&column.name).map(cell_text).unwrap_or_default())
                .collect(),
            other => vec![cell_text(other)],
        }
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub schema: String,
    pub table: String,
    #[serde(default)]
    pub sql: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default, alias = "result")]
    pub results: Vec<Row>,
}

impl Entity for TableData {
    type Key = TableKey;

    fn key(&self) -> TableKey {
        TableKey::new(self.schema.clone(), self.table.clone())
    }
}
