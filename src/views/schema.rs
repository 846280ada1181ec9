//! Schema view: name, file badge and the table tab strip.

use std::collections::HashMap;

use crate::components::registry::TABLE_TAB;
use crate::components::{
    CLICK, Channel, ComponentRegistry, NavEvent, NavList, Node, NodeId, Renderable,
    SubscriptionId,
};
use crate::error::Result;
use crate::models::{Schema, Table, TableKey};

/// What is shown next to the schema name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileLabel {
    #[default]
    Blank,
    File(String),
    Memory,
}

impl FileLabel {
    fn for_schema(schema: &Schema) -> Self {
        match schema.file() {
            Some(file) => Self::File(file.to_string()),
            None if schema.memory => Self::Memory,
            None => Self::Blank,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaEvent {
    /// A table tab was inserted or removed.
    SchemaChanged,
    TableClicked(Table),
}

struct TableTab<'a>(&'a Table);

impl Renderable for TableTab<'_> {
    fn render(&self, node: &mut Node) -> Result<()> {
        node.set_text("name", &self.0.name)?;
        node.set_text("count", &self.0.count.to_string())?;
        Ok(())
    }
}

pub struct SchemaView {
    name: String,
    file_label: FileLabel,
    tabs: NavList<TableKey>,
    tables: HashMap<TableKey, Table>,
    events: Channel<SchemaEvent>,
}

impl SchemaView {
    pub fn new(registry: &ComponentRegistry) -> Result<Self> {
        Ok(Self {
            name: String::new(),
            file_label: FileLabel::Blank,
            tabs: NavList::new(registry, TABLE_TAB)?,
            tables: HashMap::new(),
            events: Channel::new(),
        })
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&SchemaEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(observer)
    }

    /// Activate/deactivate notifications from the tab strip.
    pub fn subscribe_tabs(&mut self, observer: impl FnMut(&NavEvent) + 'static) -> SubscriptionId {
        self.tabs.subscribe(observer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_label(&self) -> &FileLabel {
        &self.file_label
    }

    pub fn tabs(&self) -> &NavList<TableKey> {
        &self.tabs
    }

    /// The latest snapshot of the table behind a tab.
    pub fn table(&self, key: &TableKey) -> Option<&Table> {
        self.tables.get(key)
    }

    pub fn active_table(&self) -> Option<&Table> {
        self.tabs.active_key().and_then(|key| self.tables.get(key))
    }

    pub fn set_schema(&mut self, schema: &Schema) -> Result<()> {
        self.name = schema.name.clone();
        self.file_label = FileLabel::for_schema(schema);

        let entries: Vec<_> =
            schema.tables.iter().map(|table| (table.key(), TableTab(table))).collect();
        let outcome = self.tabs.reconcile(entries)?;
        for key in &outcome.created {
            if let Some(node) = self.tabs.node_mut(key) {
                node.add_listener(CLICK);
            }
        }
        self.tables = schema.tables.iter().map(|table| (table.key(), table.clone())).collect();

        // The strip is attached with the first schema it receives.
        self.tabs.mount()?;

        if outcome.is_structural() {
            log::debug!(
                "Schema {} tables changed: +{} -{}",
                self.name,
                outcome.created.len(),
                outcome.removed.len()
            );
            self.events.emit(SchemaEvent::SchemaChanged);
        }
        Ok(())
    }

    /// Highlight the tab for `table`. Tables without a tab are ignored.
    pub fn set_active(&mut self, table: &Table) -> Result<()> {
        let Some(id) = self.tabs.items().get(&table.key()).map(Node::id) else {
            log::debug!("No tab for table {}", table.key());
            return Ok(());
        };
        self.tabs.set_active(Some(id))
    }

    pub fn click_tab(&mut self, id: NodeId) -> Result<()> {
        self.tabs.click(id)?;
        let Some(key) = self.tabs.items().key_of(id) else {
            return Ok(());
        };
        let listening = self.tabs.items().get(key).is_some_and(|node| node.has_listener(CLICK));
        if listening && let Some(table) = self.tables.get(key) {
            let table = table.clone();
            self.events.emit(SchemaEvent::TableClicked(table));
        }
        Ok(())
    }
}
