//! Component templates and the registry that owns them.
//!
//! The registry is built once at startup and passed by reference to whatever
//! composes views. Asking for a template that was never registered is a
//! configuration error.

use std::collections::HashMap;

use crate::error::{Error, Result};

use super::node::Node;

pub const TABLE_TAB: &str = "schema-table-tab";
pub const SCHEMA_BADGE: &str = "database-schema-badge";
pub const MODULE_ITEM: &str = "database-module-item";
pub const COLUMN_HEADER: &str = "table-column-header";
pub const DATA_ROW: &str = "table-data-row";

/// Blueprint for a display node: its default classes and text slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    classes: Vec<String>,
    slots: Vec<String>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), classes: Vec::new(), slots: Vec::new() }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn slot(mut self, slot: impl Into<String>) -> Self {
        self.slots.push(slot.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Create a fresh node with a new identity.
    pub fn instantiate(&self) -> Node {
        Node::from_template(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    templates: HashMap<String, Template>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every template the console views use.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Template::new(TABLE_TAB).class("nav-link").slot("name").slot("count"));
        registry.register(Template::new(SCHEMA_BADGE).class("badge").slot("schema"));
        registry.register(Template::new(MODULE_ITEM).class("list-group-item").slot("module"));
        registry.register(Template::new(COLUMN_HEADER).slot("name").slot("type"));
        registry.register(Template::new(DATA_ROW).slot("cells"));
        registry
    }

    /// Register a template, returning the one it replaced.
    pub fn register(&mut self, template: Template) -> Option<Template> {
        self.templates.insert(template.name.clone(), template)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn template(&self, name: &str) -> Result<&Template> {
        self.templates.get(name).ok_or_else(|| Error::UnknownTemplate(name.to_string()))
    }
}
