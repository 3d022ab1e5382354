//! The flat key space backing one engine instance.

use std::collections::HashMap;

use crate::record::ObjectRecord;

/// A single flat namespace of file keys.
///
/// Directories are never stored; a directory exists only while at least
/// one key carries its prefix. Keys are unique and no iteration order is
/// guaranteed by the map itself — prefix queries sort their output.
#[derive(Clone, Debug, Default)]
pub struct Bucket {
    objects: HashMap<String, ObjectRecord>,
}

impl Bucket {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when no objects are stored.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &str) -> Option<&ObjectRecord> {
        self.objects.get(key)
    }

    /// Whether an object is stored exactly at `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    /// Insert or fully replace the record stored at its id.
    pub fn upsert(&mut self, record: ObjectRecord) {
        self.objects.insert(record.id.clone(), record);
    }

    /// Remove the record at `key`, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.objects.remove(key).is_some()
    }

    /// Whether any stored key starts with `prefix`.
    pub fn any_with_prefix(&self, prefix: &str) -> bool {
        self.objects.keys().any(|k| k.starts_with(prefix))
    }

    /// All keys starting with `prefix`, sorted.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .objects
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    /// Clones of all records whose key starts with `prefix`, sorted by id.
    pub fn records_with_prefix(&self, prefix: &str) -> Vec<ObjectRecord> {
        let mut records: Vec<ObjectRecord> = self
            .objects
            .values()
            .filter(|r| r.id.starts_with(prefix))
            .cloned()
            .collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }
}
