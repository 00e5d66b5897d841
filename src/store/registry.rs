//! Store Registry Module
//!
//! Central registration and resolution of named backing stores. The
//! application store exists for the lifetime of the registry; session
//! partitions are registered per identity by application initialisation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::config::StateConfig;
use crate::error::{Result, StateError};
use crate::store::{MemoryStore, StateStore};

// == Store Registry ==
/// Registry of named backing stores.
///
/// Resolution by store id is how the facades find their backing store:
/// the process-wide application store is created eagerly at construction
/// and always resolvable, while per-identity session partitions must be
/// registered before a `SessionState` bound to that identity can operate.
///
/// Cloning is cheap and shares the underlying registrations.
#[derive(Clone)]
pub struct StoreRegistry {
    stores: Arc<RwLock<HashMap<String, Arc<dyn StateStore>>>>,
    config: Arc<StateConfig>,
}

impl StoreRegistry {
    // == Constructor ==
    /// Creates a registry with default naming configuration.
    pub fn new() -> Self {
        Self::with_config(StateConfig::default())
    }

    /// Creates a registry with the given naming configuration.
    ///
    /// The application store is registered immediately under the
    /// configured name.
    pub fn with_config(config: StateConfig) -> Self {
        let mut stores: HashMap<String, Arc<dyn StateStore>> = HashMap::new();
        stores.insert(
            config.application_store_name.clone(),
            Arc::new(MemoryStore::new()),
        );
        info!(
            application_store = %config.application_store_name,
            "Store registry initialized"
        );
        Self {
            stores: Arc::new(RwLock::new(stores)),
            config: Arc::new(config),
        }
    }

    // == Resolution ==
    /// Resolves the backing store registered under `store_id`.
    ///
    /// Fails with `StateError::StoreNotConfigured` when no store has been
    /// registered under that id.
    pub fn resolve(&self, store_id: &str) -> Result<Arc<dyn StateStore>> {
        self.stores
            .read()
            .unwrap()
            .get(store_id)
            .cloned()
            .ok_or_else(|| StateError::StoreNotConfigured(store_id.to_string()))
    }

    /// Returns the process-wide application store.
    ///
    /// Always present; registered at construction.
    pub fn application_store(&self) -> Arc<dyn StateStore> {
        self.stores
            .read()
            .unwrap()
            .get(&self.config.application_store_name)
            .cloned()
            .expect("application store is registered at construction")
    }

    /// Formats the session partition key for an identity name.
    pub fn session_store_id(&self, identity: &str) -> String {
        format!("{}:{}", self.config.session_store_prefix, identity)
    }

    // == Registration ==
    /// Registers a backing store under `store_id`, replacing any existing
    /// registration.
    pub fn register(&self, store_id: &str, store: Arc<dyn StateStore>) {
        debug!(store_id, "Registering store");
        self.stores
            .write()
            .unwrap()
            .insert(store_id.to_string(), store);
    }

    /// Registers an in-memory session partition for `identity` and returns
    /// its store id.
    ///
    /// Re-registering an identity that already has a partition keeps the
    /// existing partition and its contents.
    pub fn register_session_store(&self, identity: &str) -> String {
        let store_id = self.session_store_id(identity);
        let mut stores = self.stores.write().unwrap();
        if !stores.contains_key(&store_id) {
            debug!(store_id = %store_id, "Registering session partition");
            stores.insert(store_id.clone(), Arc::new(MemoryStore::new()));
        }
        store_id
    }

    /// Returns true if a store is registered under `store_id`.
    pub fn contains(&self, store_id: &str) -> bool {
        self.stores.read().unwrap().contains_key(store_id)
    }

    /// Returns the ids of all registered stores.
    pub fn store_ids(&self) -> Vec<String> {
        self.stores.read().unwrap().keys().cloned().collect()
    }

    // == Clear All ==
    /// Flushes every registered store.
    ///
    /// Registrations survive; only contents are wiped.
    pub fn clear_all(&self) {
        let stores = self.stores.read().unwrap();
        for (store_id, store) in stores.iter() {
            debug!(store_id = %store_id, "Flushing store");
            store.flush();
        }
    }

    /// Returns the naming configuration this registry was built with.
    pub fn config(&self) -> &StateConfig {
        &self.config
    }
}

impl Default for StoreRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StoreRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stores = self.stores.read().unwrap();
        f.debug_struct("StoreRegistry")
            .field("store_count", &stores.len())
            .field("store_ids", &stores.keys().collect::<Vec<_>>())
            .finish()
    }
}
