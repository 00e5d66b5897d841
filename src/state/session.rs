//! Session State Module
//!
//! Per-identity scoped state binding. Each instance is created for one
//! processing context (a request or a window) with the identity name
//! passed explicitly; the partition key computed from it isolates the
//! identity's entries from every other concurrent identity.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::keys::ItemKey;
use crate::state::CacheFacade;
use crate::store::StoreRegistry;

// == Session State ==
/// State accessor scoped to one authenticated identity.
///
/// The backing partition is resolved lazily on each operation, so an
/// instance can be constructed before application initialisation has
/// registered the partition; operations fail with `StoreNotConfigured`
/// until it has.
#[derive(Debug, Clone)]
pub struct SessionState {
    registry: StoreRegistry,
    partition_key: String,
    identity: String,
}

impl SessionState {
    // == Constructor ==
    /// Creates a session state accessor for the given identity name.
    pub fn new(registry: StoreRegistry, identity: impl Into<String>) -> Self {
        let identity = identity.into();
        let partition_key = registry.session_store_id(&identity);
        Self {
            registry,
            partition_key,
            identity,
        }
    }

    /// The identity this session state is scoped to.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The partition key the backing store is resolved by.
    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    /// Resolves the identity's partition and binds a facade to it.
    fn store(&self) -> Result<CacheFacade> {
        let store = self.registry.resolve(&self.partition_key)?;
        Ok(CacheFacade::new(store))
    }

    // == Cache Operations ==
    /// Determines whether an item is already cached under `key`.
    pub fn is_cached(&self, key: impl AsRef<str>) -> Result<bool> {
        Ok(self.store()?.is_cached(key))
    }

    /// Retrieves the item cached under `key`, deserialized to `T`.
    ///
    /// Absent and empty keys resolve to `T::default()`.
    pub fn get_item<T>(&self, key: impl AsRef<str>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.store()?.get_item(key)
    }

    /// Retrieves the raw cached value under `key`.
    pub fn get_raw(&self, key: impl AsRef<str>) -> Result<Option<Value>> {
        Ok(self.store()?.get_raw(key))
    }

    /// Caches an item under `key`, replacing any existing entry.
    pub fn set_item<T: Serialize>(&self, key: impl AsRef<str>, value: T) -> Result<()> {
        self.store()?.set_item(key, value)
    }

    /// Removes the item cached under `key`, if present.
    pub fn remove_item(&self, key: impl AsRef<str>) -> Result<()> {
        self.store()?.remove_item(key);
        Ok(())
    }

    /// Wipes this identity's partition.
    ///
    /// Partitions bound to other identities are unaffected.
    pub fn clear(&self) -> Result<()> {
        self.store()?.clear();
        Ok(())
    }

    // == Standard Cache Items ==

    /// Number of failed authentication attempts within the current session.
    pub fn authentication_failure_count(&self) -> Result<u32> {
        self.get_item(ItemKey::AUTHENTICATION_FAILURE_COUNT)
    }

    pub fn set_authentication_failure_count(&self, count: u32) -> Result<()> {
        self.set_item(ItemKey::AUTHENTICATION_FAILURE_COUNT, count)
    }

    /// The session user id.
    pub fn user_id(&self) -> Result<i32> {
        self.get_item(ItemKey::USER_ID)
    }

    pub fn set_user_id(&self, id: i32) -> Result<()> {
        self.set_item(ItemKey::USER_ID, id)
    }

    /// The session user name.
    pub fn user_name(&self) -> Result<String> {
        self.get_item(ItemKey::USER_NAME)
    }

    pub fn set_user_name(&self, name: &str) -> Result<()> {
        self.set_item(ItemKey::USER_NAME, name)
    }

    /// The session culture.
    pub fn user_culture(&self) -> Result<String> {
        self.get_item(ItemKey::USER_CULTURE)
    }

    pub fn set_user_culture(&self, culture: &str) -> Result<()> {
        self.set_item(ItemKey::USER_CULTURE, culture)
    }

    /// The session user role type ids.
    pub fn user_role_ids(&self) -> Result<Vec<i32>> {
        self.get_item(ItemKey::USER_ROLE_TYPE_IDS)
    }

    pub fn set_user_role_ids(&self, ids: &[i32]) -> Result<()> {
        self.set_item(ItemKey::USER_ROLE_TYPE_IDS, ids)
    }

    /// The session user role names.
    pub fn user_roles(&self) -> Result<Vec<String>> {
        self.get_item(ItemKey::USER_ROLES)
    }

    pub fn set_user_roles(&self, roles: &[String]) -> Result<()> {
        self.set_item(ItemKey::USER_ROLES, roles)
    }

    /// The session theme.
    pub fn user_theme(&self) -> Result<String> {
        self.get_item(ItemKey::USER_THEME)
    }

    pub fn set_user_theme(&self, theme: &str) -> Result<()> {
        self.set_item(ItemKey::USER_THEME, theme)
    }
}
