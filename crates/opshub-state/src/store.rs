//! Owned record store with pure collection-replacement reducers.
//!
//! Each view holds the authoritative ordered collection of its records in
//! one [`RecordStore`]. Reducers never mutate in place: every operation
//! returns a new store value that the owner assigns back wholesale, which
//! keeps mutations auditable and testable without any rendering
//! environment.

use serde::{Deserialize, Serialize};

use opshub_core::types::Keyed;

/// Ordered collection of domain records for one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Keyed + Clone> RecordStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an existing ordered collection.
    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by identifier.
    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.iter().find(|r| r.key() == key)
    }

    /// Check whether a record with the given identifier exists.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Append a record, preserving prior order.
    ///
    /// No duplicate-identifier check is performed; the caller guarantees
    /// uniqueness (normally via `IdSequence`).
    #[must_use]
    pub fn add(&self, record: R) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Replace the first record whose identifier equals `key` with
    /// `new_record`. Records not matching pass through unchanged; when no
    /// record matches the store is returned unchanged (silent no-op).
    #[must_use]
    pub fn update_by_key(&self, key: &str, new_record: R) -> Self {
        let records = self
            .records
            .iter()
            .map(|r| {
                if r.key() == key {
                    new_record.clone()
                } else {
                    r.clone()
                }
            })
            .collect();
        Self { records }
    }

    /// Remove the record matching `key`. Idempotent: removing an absent
    /// key is a no-op.
    #[must_use]
    pub fn remove_by_key(&self, key: &str) -> Self {
        let records = self
            .records
            .iter()
            .filter(|r| r.key() != key)
            .cloned()
            .collect();
        Self { records }
    }

    /// Rewrite the record matching `key` with `f`, leaving every other
    /// record untouched. A key miss is a silent no-op. Restricted updates
    /// such as status-only transitions are built on this.
    #[must_use]
    pub fn map_by_key(&self, key: &str, f: impl FnOnce(&R) -> R) -> Self {
        match self.records.iter().position(|r| r.key() == key) {
            Some(index) => {
                let mut records = self.records.clone();
                records[index] = f(&self.records[index]);
                Self { records }
            }
            None => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
        value: u32,
    }

    impl Keyed for Item {
        fn key(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, value: u32) -> Item {
        Item {
            id: id.to_string(),
            value,
        }
    }

    fn store() -> RecordStore<Item> {
        RecordStore::from_records(vec![item("A-1", 1), item("A-2", 2), item("A-3", 3)])
    }

    #[test]
    fn test_add_appends_with_stable_order() {
        let updated = store().add(item("A-4", 4));
        let keys: Vec<&str> = updated.records().iter().map(|r| r.key()).collect();
        assert_eq!(keys, vec!["A-1", "A-2", "A-3", "A-4"]);
    }

    #[test]
    fn test_add_does_not_touch_original() {
        let original = store();
        let _updated = original.add(item("A-4", 4));
        assert_eq!(original.len(), 3);
    }

    #[test]
    fn test_update_by_key_replaces_only_match() {
        let updated = store().update_by_key("A-2", item("A-2", 20));
        assert_eq!(updated.get("A-2").unwrap().value, 20);
        assert_eq!(updated.get("A-1").unwrap().value, 1);
        assert_eq!(updated.get("A-3").unwrap().value, 3);
    }

    #[test]
    fn test_update_by_key_miss_is_noop() {
        let original = store();
        let updated = original.update_by_key("A-9", item("A-9", 9));
        assert_eq!(updated, original);
    }

    #[test]
    fn test_remove_by_key_is_idempotent() {
        let removed = store().remove_by_key("A-2");
        assert_eq!(removed.len(), 2);
        assert!(!removed.contains("A-2"));
        let removed_again = removed.remove_by_key("A-2");
        assert_eq!(removed_again, removed);
    }

    #[test]
    fn test_map_by_key_rewrites_single_record() {
        let updated = store().map_by_key("A-3", |r| Item {
            value: r.value * 10,
            ..r.clone()
        });
        assert_eq!(updated.get("A-3").unwrap().value, 30);
        assert_eq!(updated.get("A-1").unwrap().value, 1);
    }

    #[test]
    fn test_map_by_key_miss_is_noop() {
        let original = store();
        let updated = original.map_by_key("A-9", |r| r.clone());
        assert_eq!(updated, original);
    }
}
