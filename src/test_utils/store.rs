//! In-memory metadata store doubles.

use std::collections::HashMap;

use crate::core::{ItemId, StoreError};
use crate::host::MetadataStore;

/// Hash-map-backed [`MetadataStore`] mirroring the host's per-item
/// key/value semantics: writes overwrite, deletes of absent keys succeed.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: HashMap<(ItemId, String), String>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values, across all items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetadataStore for InMemoryStore {
    fn read(&self, item: ItemId, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(&(item, key.to_string())).cloned())
    }

    fn write(&mut self, item: ItemId, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert((item, key.to_string()), value.to_string());
        Ok(())
    }

    fn delete(&mut self, item: ItemId, key: &str) -> Result<(), StoreError> {
        self.entries.remove(&(item, key.to_string()));
        Ok(())
    }
}

/// Store whose every operation fails with a backend error; used to verify
/// that the render path degrades to empty fragments instead of erroring.
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    fn offline() -> StoreError {
        StoreError::Backend {
            reason: "backing store offline".to_string(),
        }
    }
}

impl MetadataStore for FailingStore {
    fn read(&self, _item: ItemId, _key: &str) -> Result<Option<String>, StoreError> {
        Err(Self::offline())
    }

    fn write(&mut self, _item: ItemId, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(Self::offline())
    }

    fn delete(&mut self, _item: ItemId, _key: &str) -> Result<(), StoreError> {
        Err(Self::offline())
    }
}
