//! Entity fixtures.

#![allow(dead_code)]

use serde_json::json;
use sqlite_console::models::{Database, Pool, Schema, Table, TableData};

pub fn table(schema: &str, name: &str, count: i64) -> Table {
    Table { name: name.to_string(), schema: schema.to_string(), count }
}

/// A file-less schema holding `tables` as `(name, count)` pairs.
pub fn schema(name: &str, tables: &[(&str, i64)]) -> Schema {
    Schema {
        name: name.to_string(),
        filename: None,
        memory: false,
        tables: tables.iter().map(|&(table_name, count)| table(name, table_name, count)).collect(),
    }
}

pub fn database(schemas: &[&str], modules: &[&str], pool: Option<(u32, u32)>) -> Database {
    Database {
        version: "3.45.1".to_string(),
        modules: modules.iter().map(|name| name.to_string()).collect(),
        schemas: schemas.iter().map(|name| name.to_string()).collect(),
        pool: pool.map(|(cur, max)| Pool { cur, max }),
    }
}

/// Two-column result for `schema.table` with `rows` positional rows.
pub fn table_data(schema: &str, table: &str, rows: usize) -> TableData {
    let results: Vec<_> = (0..rows).map(|i| json!([i, format!("row {i}")])).collect();
    serde_json::from_value(json!({
        "schema": schema,
        "table": table,
        "sql": format!("SELECT * FROM \"{schema}\".\"{table}\""),
        "columns": [
            { "name": "id", "schema": schema, "table": table, "type": "INTEGER", "primary": true },
            { "name": "label", "schema": schema, "table": table, "type": "TEXT", "nullable": true }
        ],
        "results": results,
    }))
    .expect("fixture table data should decode")
}
