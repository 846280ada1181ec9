//! Database summary view: version, schema badges, module list, pool gauge.

use crate::components::registry::{MODULE_ITEM, SCHEMA_BADGE};
use crate::components::{
    CLICK, Channel, ComponentRegistry, KeyedList, Node, NodeId, Renderable, SubscriptionId,
};
use crate::error::{Error, Result};
use crate::models::Database;

/// Action name of the "show modules" button.
pub const ACTION_MODULES: &str = "modules";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseEvent {
    SchemaSelected(String),
    ActionRequested(String),
}

struct SchemaBadge<'a>(&'a str);

impl Renderable for SchemaBadge<'_> {
    fn render(&self, node: &mut Node) -> Result<()> {
        node.set_text("schema", self.0)?;
        Ok(())
    }
}

struct ModuleItem<'a>(&'a str);

impl Renderable for ModuleItem<'_> {
    fn render(&self, node: &mut Node) -> Result<()> {
        node.set_text("module", self.0)?;
        Ok(())
    }
}

pub struct DatabaseView {
    version: String,
    schemas: KeyedList<String>,
    modules: KeyedList<String>,
    pool: Option<String>,
    modules_open: bool,
    events: Channel<DatabaseEvent>,
}

impl DatabaseView {
    pub fn new(registry: &ComponentRegistry) -> Result<Self> {
        Ok(Self {
            version: String::new(),
            schemas: KeyedList::new(registry, SCHEMA_BADGE)?,
            modules: KeyedList::new(registry, MODULE_ITEM)?,
            pool: None,
            modules_open: false,
            events: Channel::new(),
        })
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&DatabaseEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(observer)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn schemas(&self) -> &KeyedList<String> {
        &self.schemas
    }

    pub fn modules(&self) -> &KeyedList<String> {
        &self.modules
    }

    /// Pool gauge text, e.g. "3/10". None hides the gauge.
    pub fn pool(&self) -> Option<&str> {
        self.pool.as_deref()
    }

    pub fn modules_open(&self) -> bool {
        self.modules_open
    }

    /// Scalars are only written once both lists reconciled.
    pub fn set_database(&mut self, database: &Database) -> Result<()> {
        let badges: Vec<_> =
            database.schemas.iter().map(|name| (name.clone(), SchemaBadge(name))).collect();
        let outcome = self.schemas.reconcile(badges)?;
        for key in &outcome.created {
            if let Some(node) = self.schemas.get_mut(key) {
                node.add_listener(CLICK);
            }
        }

        let modules: Vec<_> =
            database.modules.iter().map(|name| (name.clone(), ModuleItem(name))).collect();
        self.modules.reconcile(modules)?;

        self.version = database.version.clone();
        self.pool = database.pool.map(|pool| pool.label());
        Ok(())
    }

    pub fn click_schema(&mut self, id: NodeId) -> Result<()> {
        let Some(name) = self.schemas.key_of(id) else {
            return Err(Error::UnknownNode(id));
        };
        if self.schemas.get(name).is_some_and(|node| node.has_listener(CLICK)) {
            let name = name.clone();
            self.events.emit(DatabaseEvent::SchemaSelected(name));
        }
        Ok(())
    }

    pub fn click_action(&mut self, action: &str) {
        self.events.emit(DatabaseEvent::ActionRequested(action.to_string()));
    }

    /// Open the modules panel. Shows whatever the last snapshot populated.
    pub fn show_modules(&mut self) {
        self.modules_open = true;
    }

    pub fn hide_modules(&mut self) {
        self.modules_open = false;
    }
}
