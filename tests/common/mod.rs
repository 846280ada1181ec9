//! Common test utilities for the console integration tests.
//!
//! Everything here is in-process: entities are built directly or decoded from
//! JSON literals, and view notifications are captured with [`recorder`].

#![allow(dead_code)]

pub mod fixtures;

use std::cell::RefCell;
use std::rc::Rc;

use sqlite_console::components::{ComponentRegistry, Node, NodeId};
use sqlite_console::models::TableKey;
use sqlite_console::views::SchemaView;

/// Shared event log plus a cloneable observer that appends to it.
pub fn recorder<E: Clone + 'static>() -> (Rc<RefCell<Vec<E>>>, impl FnMut(&E) + 'static) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    (events, move |event: &E| sink.borrow_mut().push(event.clone()))
}

pub fn registry() -> ComponentRegistry {
    ComponentRegistry::standard()
}

/// Node id of the tab rendered for `schema.table`.
pub fn tab_id(view: &SchemaView, schema: &str, table: &str) -> NodeId {
    view.tabs()
        .items()
        .get(&TableKey::new(schema, table))
        .map(Node::id)
        .unwrap_or_else(|| panic!("no tab for {schema}.{table}"))
}

/// Table names in display order.
pub fn tab_names(view: &SchemaView) -> Vec<String> {
    view.tabs().items().keys().iter().map(|key| key.name.clone()).collect()
}
