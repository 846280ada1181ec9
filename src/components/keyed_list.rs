//! Keyed list reconciliation.
//!
//! [`KeyedList`] keeps a live, ordered set of nodes in step with a desired list
//! of `(key, content)` entries:
//! - a key seen for the first time gets a fresh node from the list's template;
//! - a surviving key keeps its node and only has its content re-rendered;
//! - a key missing from the new entries loses its node.
//!
//! Only insertions and removals count as structural changes. Reordering moves
//! nodes without recreating them.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

use crate::error::{Error, Result};

use super::node::{Node, NodeId, Renderable};
use super::registry::{ComponentRegistry, Template};

/// Outcome of a single reconciliation pass.
#[derive(Debug)]
pub struct Reconciled<K> {
    pub created: Vec<K>,
    pub updated: Vec<K>,
    pub removed: Vec<(K, Node)>,
    pub reordered: bool,
}

impl<K> Reconciled<K> {
    /// True if any node was inserted or removed.
    pub fn is_structural(&self) -> bool {
        !self.created.is_empty() || !self.removed.is_empty()
    }
}

pub struct KeyedList<K> {
    template: Template,
    order: Vec<K>,
    nodes: HashMap<K, Node>,
    ids: HashMap<NodeId, K>,
}

impl<K> KeyedList<K>
where
    K: Clone + Eq + Hash + Display,
{
    pub fn new(registry: &ComponentRegistry, template: &str) -> Result<Self> {
        let template = registry.template(template)?.clone();
        Ok(Self { template, order: Vec::new(), nodes: HashMap::new(), ids: HashMap::new() })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn reconcile<C: Renderable>(&mut self, entries: Vec<(K, C)>) -> Result<Reconciled<K>> {
        let mut wanted = HashSet::with_capacity(entries.len());
        for (key, _) in &entries {
            if !wanted.insert(key.clone()) {
                return Err(Error::DuplicateKey(key.to_string()));
            }
        }

        // Render everything into staged nodes first so a failing render
        // leaves the list as it was.
        let mut staged = Vec::with_capacity(entries.len());
        for (key, content) in entries {
            let (mut node, created) = match self.nodes.get(&key) {
                Some(node) => (node.clone(), false),
                None => (self.template.instantiate(), true),
            };
            content.render(&mut node)?;
            staged.push((key, node, created));
        }

        let mut removed = Vec::new();
        for key in self.order.iter().filter(|key| !wanted.contains(*key)) {
            if let Some(node) = self.nodes.remove(key) {
                self.ids.remove(&node.id());
                removed.push((key.clone(), node));
            }
        }

        let survivors_before: Vec<&K> =
            self.order.iter().filter(|key| self.nodes.contains_key(*key)).collect();
        let survivors_after: Vec<&K> = staged
            .iter()
            .filter(|(_, _, created)| !created)
            .map(|(key, _, _)| key)
            .collect();
        let reordered = survivors_before != survivors_after;

        let mut created = Vec::new();
        let mut updated = Vec::new();
        let mut order = Vec::with_capacity(staged.len());
        for (key, node, is_new) in staged {
            if is_new {
                self.ids.insert(node.id(), key.clone());
                created.push(key.clone());
            } else {
                updated.push(key.clone());
            }
            self.nodes.insert(key.clone(), node);
            order.push(key);
        }
        self.order = order;

        log::debug!(
            "Reconciled {} list: {} created, {} updated, {} removed",
            self.template.name(),
            created.len(),
            updated.len(),
            removed.len()
        );

        Ok(Reconciled { created, updated, removed, reordered })
    }

    /// Remove a single node outside of a reconciliation pass.
    pub fn remove(&mut self, key: &K) -> Option<Node> {
        let node = self.nodes.remove(key)?;
        self.ids.remove(&node.id());
        self.order.retain(|existing| existing != key);
        Some(node)
    }

    /// Drop every node, returning them in display order.
    pub fn clear(&mut self) -> Vec<(K, Node)> {
        self.ids.clear();
        let mut nodes = std::mem::take(&mut self.nodes);
        std::mem::take(&mut self.order)
            .into_iter()
            .filter_map(|key| nodes.remove(&key).map(|node| (key, node)))
            .collect()
    }

    pub fn get(&self, key: &K) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    pub fn key_of(&self, id: NodeId) -> Option<&K> {
        self.ids.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.ids.contains_key(&id)
    }

    pub(super) fn node_by_id_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let key = self.ids.get(&id)?;
        self.nodes.get_mut(key)
    }

    /// Keys in display order.
    pub fn keys(&self) -> &[K] {
        &self.order
    }

    /// Nodes in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Node)> {
        self.order.iter().filter_map(|key| self.nodes.get(key).map(|node| (key, node)))
    }

    pub fn first(&self) -> Option<&Node> {
        self.order.first().and_then(|key| self.nodes.get(key))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
