//! Explicit in-memory mirror of the persisted collections.
//!
//! # Responsibility
//! - Hold the decoded record list for each collection between reload and
//!   write-through.
//!
//! # Invariants
//! - The cache never invents state: a collection is only populated by an
//!   explicit `replace` (reload-before-use) and only leaves memory through
//!   `persist` (write-through) or `invalidate`.
//! - One cache belongs to one dispatcher; nothing here is process-global,
//!   so tests construct isolated instances freely.

use super::{persist_collection, CollectionStore, StoreResult};
use crate::model::EntityKind;
use serde_json::Value;
use std::collections::BTreeMap;

/// In-memory record lists keyed by collection.
#[derive(Debug, Default)]
pub struct CollectionCache {
    collections: BTreeMap<EntityKind, Vec<Value>>,
}

impl CollectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached records for `kind` with a freshly loaded list.
    pub fn replace(&mut self, kind: EntityKind, records: Vec<Value>) {
        self.collections.insert(kind, records);
    }

    /// Drops the cached records for `kind`; the next use must reload.
    pub fn invalidate(&mut self, kind: EntityKind) {
        self.collections.remove(&kind);
    }

    /// Returns the cached records for `kind`, empty when never loaded.
    pub fn records(&self, kind: EntityKind) -> &[Value] {
        self.collections
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns mutable cached records for `kind`, materializing an empty
    /// list when never loaded.
    pub fn records_mut(&mut self, kind: EntityKind) -> &mut Vec<Value> {
        self.collections.entry(kind).or_default()
    }

    /// Writes the cached records for `kind` through to the backing store.
    pub fn persist(&self, kind: EntityKind, store: &dyn CollectionStore) -> StoreResult<()> {
        persist_collection(store, kind.collection_key(), self.records(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::CollectionCache;
    use crate::model::EntityKind;
    use serde_json::json;

    #[test]
    fn records_default_to_empty_until_replaced() {
        let mut cache = CollectionCache::new();
        assert!(cache.records(EntityKind::Medications).is_empty());

        cache.replace(EntityKind::Medications, vec![json!({"id": "m1"})]);
        assert_eq!(cache.records(EntityKind::Medications).len(), 1);
        assert!(cache.records(EntityKind::Prescriptions).is_empty());
    }

    #[test]
    fn invalidate_forces_reload_semantics() {
        let mut cache = CollectionCache::new();
        cache.replace(EntityKind::Appointments, vec![json!({"id": "a1"})]);
        cache.invalidate(EntityKind::Appointments);
        assert!(cache.records(EntityKind::Appointments).is_empty());
    }
}
