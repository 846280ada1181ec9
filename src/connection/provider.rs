//! Snapshot providers: turn full snapshots into per-entity lifecycle events.

use std::collections::HashMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::Entity;

/// Lifecycle notification for one entity, keyed by its identity.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEvent<T: Entity> {
    Added(T::Key, T),
    Changed(T::Key, T),
    Deleted(T::Key),
    Error(String),
}

/// Remembers the last snapshot and diffs the next one against it.
pub struct Provider<T: Entity> {
    name: &'static str,
    cache: HashMap<T::Key, T>,
    order: Vec<T::Key>,
}

impl<T: Entity> Provider<T> {
    pub fn new(name: &'static str) -> Self {
        Self { name, cache: HashMap::new(), order: Vec::new() }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.cache.get(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Replace the cached snapshot. Within one snapshot the last entity per key wins.
    pub fn apply(&mut self, snapshot: Vec<T>) -> Vec<ProviderEvent<T>> {
        let mut next: HashMap<T::Key, T> = HashMap::with_capacity(snapshot.len());
        let mut order = Vec::with_capacity(snapshot.len());
        for entity in snapshot {
            let key = entity.key();
            if next.insert(key.clone(), entity).is_some() {
                log::warn!("{}: duplicate key {:?} in snapshot", self.name, key);
            } else {
                order.push(key);
            }
        }

        let mut events = Vec::new();
        for key in &order {
            let Some(entity) = next.get(key) else {
                continue;
            };
            match self.cache.get(key) {
                None => events.push(ProviderEvent::Added(key.clone(), entity.clone())),
                Some(previous) if previous != entity => {
                    events.push(ProviderEvent::Changed(key.clone(), entity.clone()))
                }
                Some(_) => {}
            }
        }
        for key in self.order.iter().filter(|key| !next.contains_key(*key)) {
            events.push(ProviderEvent::Deleted(key.clone()));
        }

        self.cache = next;
        self.order = order;
        events
    }

    /// Report a failed fetch. The cached snapshot is kept.
    pub fn fail(&self, message: impl Into<String>) -> ProviderEvent<T> {
        let message = message.into();
        log::warn!("{}: {}", self.name, message);
        ProviderEvent::Error(message)
    }

    pub fn receive(&mut self, result: Result<Vec<T>>) -> Vec<ProviderEvent<T>> {
        match result {
            Ok(snapshot) => self.apply(snapshot),
            Err(err) => vec![self.fail(err.to_string())],
        }
    }

    /// Forget everything, e.g. when the provider is re-targeted.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.order.clear();
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Decode a response body holding either one entity or a list of them.
pub fn decode_snapshot<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>> {
    let decoded: OneOrMany<T> = serde_json::from_slice(body)?;
    let snapshot = match decoded {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
    };
    Ok(snapshot)
}
