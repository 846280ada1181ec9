//! Table contents: column header and result rows.

use crate::components::registry::{COLUMN_HEADER, DATA_ROW};
use crate::components::{ComponentRegistry, KeyedList, Node, Renderable};
use crate::error::Result;
use crate::models::{Column, ColumnKey, TableData, TableKey};

struct ColumnHeader<'a>(&'a Column);

impl Renderable for ColumnHeader<'_> {
    fn render(&self, node: &mut Node) -> Result<()> {
        node.set_text("name", &self.0.name)?;
        node.set_text("type", &self.0.decltype)?;
        node.set_class("primary", self.0.primary);
        node.set_class("nullable", self.0.nullable);
        Ok(())
    }
}

struct DataRow(Vec<String>);

impl Renderable for DataRow {
    fn render(&self, node: &mut Node) -> Result<()> {
        node.set_text("cells", &self.0.join("\t"))?;
        Ok(())
    }
}

pub struct TableDataView {
    table: Option<TableKey>,
    sql: String,
    columns: KeyedList<ColumnKey>,
    rows: KeyedList<usize>,
}

impl TableDataView {
    pub fn new(registry: &ComponentRegistry) -> Result<Self> {
        Ok(Self {
            table: None,
            sql: String::new(),
            columns: KeyedList::new(registry, COLUMN_HEADER)?,
            rows: KeyedList::new(registry, DATA_ROW)?,
        })
    }

    pub fn table(&self) -> Option<&TableKey> {
        self.table.as_ref()
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn columns(&self) -> &KeyedList<ColumnKey> {
        &self.columns
    }

    pub fn rows(&self) -> &KeyedList<usize> {
        &self.rows
    }

    pub fn summary(&self) -> String {
        match self.rows.len() {
            1 => "1 row".to_string(),
            n => format!("{n} rows"),
        }
    }

    pub fn set_table_data(&mut self, data: &TableData) -> Result<()> {
        let headers: Vec<_> =
            data.columns.iter().map(|column| (column.key(), ColumnHeader(column))).collect();
        self.columns.reconcile(headers)?;

        let rows: Vec<_> = data
            .results
            .iter()
            .enumerate()
            .map(|(index, row)| (index, DataRow(row.cells(&data.columns))))
            .collect();
        self.rows.reconcile(rows)?;

        self.table = Some(TableKey::new(data.schema.clone(), data.table.clone()));
        self.sql = data.sql.clone();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.columns.clear();
        self.rows.clear();
        self.table = None;
        self.sql.clear();
    }
}
