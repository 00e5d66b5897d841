//! Cache Facade Module
//!
//! Typed get/set/remove/contains/clear operations over one resolved
//! backing store. The facade holds no state of its own; values live in
//! the store it was bound to.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, StateError};
use crate::store::StateStore;

// == Cache Facade ==
/// Stateless typed accessor over a single backing store.
///
/// Reads are total over absent and empty keys: a missing entry resolves to
/// the requested type's default value, never an error. The one read
/// failure that does surface is a stored value that refuses to
/// deserialize to the requested type.
pub struct CacheFacade {
    store: Arc<dyn StateStore>,
}

impl CacheFacade {
    // == Constructor ==
    /// Creates a facade bound to the given store.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    // == Contains ==
    /// Determines whether an item is already cached under `key`.
    pub fn is_cached(&self, key: impl AsRef<str>) -> bool {
        self.store.contains(key.as_ref())
    }

    // == Get ==
    /// Retrieves the item cached under `key`, deserialized to `T`.
    ///
    /// Returns `T::default()` when the key is empty or nothing is cached
    /// under it. Fails only when a cached value exists but is not a `T`.
    pub fn get_item<T>(&self, key: impl AsRef<str>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Ok(T::default());
        }
        match self.store.get(key) {
            None => Ok(T::default()),
            Some(value) => {
                serde_json::from_value(value).map_err(|_| StateError::TypeMismatch {
                    key: key.to_string(),
                    expected: std::any::type_name::<T>(),
                })
            }
        }
    }

    /// Retrieves the raw cached value under `key`.
    ///
    /// Returns `None` when the key is empty or nothing is cached under it.
    pub fn get_raw(&self, key: impl AsRef<str>) -> Option<Value> {
        let key = key.as_ref();
        if key.is_empty() {
            return None;
        }
        self.store.get(key)
    }

    // == Set ==
    /// Caches an item under `key`, replacing any existing entry.
    ///
    /// The existing entry is removed before the add. The store contract
    /// rejects duplicate adds, so replacement must go through removal; the
    /// ordering makes `set_item` idempotent against any conforming store.
    pub fn set_item<T: Serialize>(&self, key: impl AsRef<str>, value: T) -> Result<()> {
        let key = key.as_ref();
        let value = serde_json::to_value(value)?;
        self.remove_item(key);
        self.store.add(key, value)?;
        debug!(key, "Cache item set");
        Ok(())
    }

    // == Remove ==
    /// Removes the item cached under `key`, if present. No-op otherwise.
    pub fn remove_item(&self, key: impl AsRef<str>) {
        let key = key.as_ref();
        if self.is_cached(key) {
            self.store.remove(key);
            debug!(key, "Cache item removed");
        }
    }

    // == Clear ==
    /// Removes every entry from the bound store.
    ///
    /// Only this store is affected; in scoped mode that is exactly the
    /// bound identity's partition.
    pub fn clear(&self) {
        self.store.flush();
        debug!("Cache cleared");
    }
}
