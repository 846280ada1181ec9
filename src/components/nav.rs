//! Nav list: a keyed list with an exclusive active selection.
//!
//! At most one node is active at any time. The active marker is only moved
//! here; removing the active node leaves the list with nothing selected, and
//! the first-child default applies once, when the list is mounted.

use std::fmt::Display;
use std::hash::Hash;

use crate::error::{Error, Result};

use super::channel::{Channel, SubscriptionId};
use super::keyed_list::{KeyedList, Reconciled};
use super::node::{Node, NodeId, Renderable};
use super::registry::ComponentRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    NoActive,
    ActiveAt(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Activated(NodeId),
    Deactivated(NodeId),
    /// A child was clicked. Selection is left to the consumer.
    Clicked(NodeId),
}

pub struct NavList<K> {
    items: KeyedList<K>,
    active: Option<NodeId>,
    mounted: bool,
    events: Channel<NavEvent>,
}

impl<K> NavList<K>
where
    K: Clone + Eq + Hash + Display,
{
    pub fn new(registry: &ComponentRegistry, template: &str) -> Result<Self> {
        Ok(Self {
            items: KeyedList::new(registry, template)?,
            active: None,
            mounted: false,
            events: Channel::new(),
        })
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&NavEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(observer)
    }

    pub fn items(&self) -> &KeyedList<K> {
        &self.items
    }

    /// Mutable access to a node's attachments. The active marker stays with the list.
    pub fn node_mut(&mut self, key: &K) -> Option<&mut Node> {
        self.items.get_mut(key)
    }

    pub fn selection(&self) -> Selection {
        match self.active {
            Some(id) => Selection::ActiveAt(id),
            None => Selection::NoActive,
        }
    }

    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    pub fn active_key(&self) -> Option<&K> {
        self.active.and_then(|id| self.items.key_of(id))
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Reconcile the children. Removing the active child clears the selection.
    pub fn reconcile<C: Renderable>(&mut self, entries: Vec<(K, C)>) -> Result<Reconciled<K>> {
        let mut outcome = self.items.reconcile(entries)?;
        for (_, node) in outcome.removed.iter_mut() {
            self.node_removed(node);
        }
        Ok(outcome)
    }

    pub fn remove(&mut self, key: &K) -> Option<Node> {
        let mut node = self.items.remove(key)?;
        self.node_removed(&mut node);
        Some(node)
    }

    fn node_removed(&mut self, node: &mut Node) {
        node.set_active(false);
        if self.active == Some(node.id()) {
            self.active = None;
            log::debug!("Active node {} removed", node.id());
            self.events.emit(NavEvent::Deactivated(node.id()));
        }
    }

    pub fn set_active(&mut self, target: Option<NodeId>) -> Result<()> {
        if target == self.active {
            return Ok(());
        }
        if let Some(id) = target
            && !self.items.contains_node(id)
        {
            return Err(Error::UnknownNode(id));
        }

        if let Some(previous) = self.active.take() {
            if let Some(node) = self.items.node_by_id_mut(previous) {
                node.set_active(false);
            }
            self.events.emit(NavEvent::Deactivated(previous));
        }

        if let Some(id) = target {
            if let Some(node) = self.items.node_by_id_mut(id) {
                node.set_active(true);
            }
            self.active = Some(id);
            self.events.emit(NavEvent::Activated(id));
        }
        Ok(())
    }

    /// First attachment: select the first child unless something is already active.
    pub fn mount(&mut self) -> Result<()> {
        if self.mounted {
            return Ok(());
        }
        self.mounted = true;
        if self.active.is_none()
            && let Some(first) = self.items.first().map(Node::id)
        {
            self.set_active(Some(first))?;
        }
        Ok(())
    }

    pub fn click(&mut self, id: NodeId) -> Result<()> {
        if !self.items.contains_node(id) {
            return Err(Error::UnknownNode(id));
        }
        self.events.emit(NavEvent::Clicked(id));
        Ok(())
    }
}
