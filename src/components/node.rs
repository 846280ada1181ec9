//! Headless display nodes.
//!
//! A [`Node`] is the unit the reconciler creates, updates in place, and removes.
//! Its [`NodeId`] is fixed at creation, so anything attached to the node
//! (listeners, attributes, focus or scroll state) survives content updates.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use uuid::Uuid;

use crate::error::{Error, Result};

use super::registry::Template;

/// Identity of a display node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node:{}", self.0)
    }
}

/// Event name used for click listeners.
pub const CLICK: &str = "click";

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    template: String,
    classes: BTreeSet<String>,
    slots: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    listeners: Vec<String>,
    active: bool,
    revision: u64,
}

impl Node {
    pub(crate) fn from_template(template: &Template) -> Self {
        Self {
            id: NodeId::new(),
            template: template.name().to_string(),
            classes: template.classes().iter().cloned().collect(),
            slots: template.slots().iter().map(|slot| (slot.clone(), String::new())).collect(),
            attributes: BTreeMap::new(),
            listeners: Vec::new(),
            active: false,
            revision: 0,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Number of content changes applied since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn text(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    /// Replace the text of a slot. Returns true if the visible text changed.
    pub fn set_text(&mut self, slot: &str, text: &str) -> Result<bool> {
        let Some(current) = self.slots.get_mut(slot) else {
            return Err(Error::UnknownSlot {
                template: self.template.clone(),
                slot: slot.to_string(),
            });
        };
        if current == text {
            return Ok(false);
        }
        current.clear();
        current.push_str(text);
        self.revision += 1;
        Ok(true)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Add or remove a class. Returns true if the class set changed.
    pub fn set_class(&mut self, class: &str, enabled: bool) -> bool {
        let changed = if enabled {
            self.classes.insert(class.to_string())
        } else {
            self.classes.remove(class)
        };
        if changed {
            self.revision += 1;
        }
        changed
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn add_listener(&mut self, event: &str) {
        self.listeners.push(event.to_string());
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.iter().filter(|name| name.as_str() == event).count()
    }

    pub fn has_listener(&self, event: &str) -> bool {
        self.listener_count(event) > 0
    }

    /// Whether this node carries the active marker of its nav list.
    pub fn is_active(&self) -> bool {
        self.active
    }

    // Only the nav list may move the active marker.
    pub(super) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Content that knows how to draw itself into a node.
pub trait Renderable {
    fn render(&self, node: &mut Node) -> Result<()>;
}
