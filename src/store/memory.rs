//! In-Memory Store Module
//!
//! Default `StateStore` implementation over a locked HashMap.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::{Result, StateError};
use crate::store::StateStore;

// == Memory Store ==
/// In-process key-value store backed by a `HashMap`.
///
/// Interior locking makes the store safe to share behind an `Arc`; callers
/// never hold a lock across calls. Entries live until removed or flushed,
/// there is no eviction or expiration at this layer.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn add(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        if entries.contains_key(key) {
            return Err(StateError::DuplicateKey(key.to_string()));
        }
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.write().unwrap().remove(key);
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.read().unwrap().contains_key(key)
    }

    fn flush(&self) {
        self.entries.write().unwrap().clear();
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}
