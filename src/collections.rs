//! Persisted user collections
//!
//! The app keeps two user-editable lists: saved historical missions and
//! user-created expeditions. Entries carry arbitrary user-supplied fields
//! (name, notes, image reference) that this layer treats as opaque JSON.
//! Each list round-trips through the key-value blob store as one JSON blob.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::KvStore;

/// The two named lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collection {
    /// Saved historical missions
    Missions,
    /// User-created expeditions
    Expeditions,
}

impl Collection {
    fn storage_key(self) -> &'static str {
        match self {
            Collection::Missions => "astro_drop_missions",
            Collection::Expeditions => "astro_drop_expeditions",
        }
    }
}

/// A single entry in a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionEntry {
    /// Creation-time identifier (Unix ms, bumped to stay strictly
    /// monotonic so same-millisecond adds never collide)
    pub id: u64,
    /// User-supplied fields, opaque to this layer
    pub payload: Value,
}

/// Both collections plus the id high-water mark.
#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    missions: Vec<CollectionEntry>,
    expeditions: Vec<CollectionEntry>,
    last_id: u64,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load both lists from storage; a missing or corrupt blob yields an
    /// empty list for that collection.
    pub fn load(store: &dyn KvStore) -> Self {
        let missions = load_list(store, Collection::Missions);
        let expeditions = load_list(store, Collection::Expeditions);
        let last_id = missions
            .iter()
            .chain(expeditions.iter())
            .map(|e| e.id)
            .max()
            .unwrap_or(0);
        Self {
            missions,
            expeditions,
            last_id,
        }
    }

    fn list(&self, collection: Collection) -> &Vec<CollectionEntry> {
        match collection {
            Collection::Missions => &self.missions,
            Collection::Expeditions => &self.expeditions,
        }
    }

    fn list_mut(&mut self, collection: Collection) -> &mut Vec<CollectionEntry> {
        match collection {
            Collection::Missions => &mut self.missions,
            Collection::Expeditions => &mut self.expeditions,
        }
    }

    /// Append an entry and return its new id.
    pub fn add_entry(&mut self, collection: Collection, payload: Value) -> u64 {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;

        self.list_mut(collection).push(CollectionEntry { id, payload });
        log::debug!("added entry {id} to {collection:?}");
        id
    }

    /// Remove the entry with `id`; returns whether anything was removed.
    pub fn remove_entry(&mut self, collection: Collection, id: u64) -> bool {
        let list = self.list_mut(collection);
        let before = list.len();
        list.retain(|e| e.id != id);
        list.len() != before
    }

    /// Empty one list.
    pub fn clear(&mut self, collection: Collection) {
        self.list_mut(collection).clear();
    }

    /// Entries in insertion order.
    pub fn entries(&self, collection: Collection) -> &[CollectionEntry] {
        self.list(collection)
    }

    /// Write both lists back to storage (best-effort).
    pub fn save(&self, store: &mut dyn KvStore) {
        save_list(store, Collection::Missions, &self.missions);
        save_list(store, Collection::Expeditions, &self.expeditions);
    }
}

fn load_list(store: &dyn KvStore, collection: Collection) -> Vec<CollectionEntry> {
    if let Some(json) = store.get(collection.storage_key()) {
        match serde_json::from_str::<Vec<CollectionEntry>>(&json) {
            Ok(entries) => {
                log::info!("Loaded {} entries for {collection:?}", entries.len());
                return entries;
            }
            Err(err) => log::warn!("Discarding corrupt {collection:?} blob: {err}"),
        }
    }
    Vec::new()
}

fn save_list(store: &mut dyn KvStore, collection: Collection, entries: &[CollectionEntry]) {
    match serde_json::to_string(entries) {
        Ok(json) => store.set(collection.storage_key(), &json),
        Err(err) => log::warn!("Failed to serialize {collection:?}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_add_assigns_monotonic_ids() {
        let mut store = CollectionStore::new();
        let a = store.add_entry(Collection::Missions, json!({"name": "Apollo 11"}));
        let b = store.add_entry(Collection::Missions, json!({"name": "Voyager 1"}));
        let c = store.add_entry(Collection::Expeditions, json!({"name": "Mars trek"}));
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_lists_are_independent() {
        let mut store = CollectionStore::new();
        let id = store.add_entry(Collection::Missions, json!({"name": "Apollo 11"}));
        store.add_entry(Collection::Expeditions, json!({"name": "Mars trek"}));

        // Removing from the wrong list does nothing
        assert!(!store.remove_entry(Collection::Expeditions, id));
        assert_eq!(store.entries(Collection::Missions).len(), 1);

        assert!(store.remove_entry(Collection::Missions, id));
        assert!(store.entries(Collection::Missions).is_empty());
        assert_eq!(store.entries(Collection::Expeditions).len(), 1);
    }

    #[test]
    fn test_clear_empties_one_list() {
        let mut store = CollectionStore::new();
        store.add_entry(Collection::Missions, json!({"name": "Apollo 11"}));
        store.add_entry(Collection::Expeditions, json!({"name": "Mars trek"}));

        store.clear(Collection::Missions);
        assert!(store.entries(Collection::Missions).is_empty());
        assert_eq!(store.entries(Collection::Expeditions).len(), 1);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut store = CollectionStore::new();
        for name in ["Mercury", "Gemini", "Apollo"] {
            store.add_entry(Collection::Missions, json!({ "name": name }));
        }
        let names: Vec<_> = store
            .entries(Collection::Missions)
            .iter()
            .map(|e| e.payload["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Mercury", "Gemini", "Apollo"]);
    }

    #[test]
    fn test_persistence_round_trip() {
        let mut kv = MemoryStore::new();
        let mut store = CollectionStore::new();
        let kept = store.add_entry(Collection::Missions, json!({"name": "Apollo 11", "notes": "lunar"}));
        store.add_entry(Collection::Expeditions, json!({"name": "Mars trek"}));
        store.save(&mut kv);

        let restored = CollectionStore::load(&kv);
        assert_eq!(restored.entries(Collection::Missions), store.entries(Collection::Missions));
        assert_eq!(
            restored.entries(Collection::Expeditions),
            store.entries(Collection::Expeditions)
        );

        // Ids keep climbing after a reload
        let mut restored = restored;
        let next = restored.add_entry(Collection::Missions, json!({"name": "Skylab"}));
        assert!(next > kept);
    }

    #[test]
    fn test_load_corrupt_blob_yields_empty() {
        let mut kv = MemoryStore::new();
        kv.set("astro_drop_missions", "][");
        let store = CollectionStore::load(&kv);
        assert!(store.entries(Collection::Missions).is_empty());
    }
}
