//! Application State Module
//!
//! Process-wide state binding over the registry's ambient application
//! store. One shared key-value space, visible to every concurrent context;
//! whatever atomicity the backing store provides is all there is.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::keys::ItemKey;
use crate::state::CacheFacade;
use crate::store::StoreRegistry;

// == Application State ==
/// State accessor over the single process-wide store.
///
/// Unlike the session variant there is no partition computation and no
/// resolution failure: the application store exists for the lifetime of
/// the registry.
#[derive(Debug, Clone)]
pub struct ApplicationState {
    registry: StoreRegistry,
}

impl ApplicationState {
    // == Constructor ==
    /// Creates an application state accessor over the registry's ambient store.
    pub fn new(registry: StoreRegistry) -> Self {
        Self { registry }
    }

    /// Binds a facade to the ambient application store.
    fn store(&self) -> CacheFacade {
        CacheFacade::new(self.registry.application_store())
    }

    // == Cache Operations ==
    /// Determines whether an item is already cached under `key`.
    pub fn is_cached(&self, key: impl AsRef<str>) -> bool {
        self.store().is_cached(key)
    }

    /// Retrieves the item cached under `key`, deserialized to `T`.
    ///
    /// Absent and empty keys resolve to `T::default()`.
    pub fn get_item<T>(&self, key: impl AsRef<str>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.store().get_item(key)
    }

    /// Retrieves the raw cached value under `key`.
    pub fn get_raw(&self, key: impl AsRef<str>) -> Option<Value> {
        self.store().get_raw(key)
    }

    /// Caches an item under `key`, replacing any existing entry.
    pub fn set_item<T: Serialize>(&self, key: impl AsRef<str>, value: T) -> Result<()> {
        self.store().set_item(key, value)
    }

    /// Removes the item cached under `key`, if present.
    pub fn remove_item(&self, key: impl AsRef<str>) {
        self.store().remove_item(key);
    }

    /// Wipes the entire application store.
    pub fn clear(&self) {
        self.store().clear();
    }

    // == Standard Cache Items ==

    /// The application version set up during initialisation.
    pub fn application_version(&self) -> Result<String> {
        self.get_item(ItemKey::APPLICATION_VERSION)
    }

    /// The application release date set up during initialisation.
    pub fn application_release_date(&self) -> Result<String> {
        self.get_item(ItemKey::APPLICATION_RELEASE_DATE)
    }

    /// The client name set up during initialisation.
    pub fn client_name(&self) -> Result<String> {
        self.get_item(ItemKey::CLIENT_NAME)
    }

    /// The default culture id set up during initialisation.
    pub fn default_user_culture_id(&self) -> Result<i32> {
        self.get_item(ItemKey::DEFAULT_USER_CULTURE_ID)
    }

    /// The number of authentication attempts after which a user is locked out.
    pub fn authentication_lockout(&self) -> Result<u32> {
        self.get_item(ItemKey::AUTHENTICATION_LOCKOUT)
    }

    pub fn set_authentication_lockout(&self, attempts: u32) -> Result<()> {
        self.set_item(ItemKey::AUTHENTICATION_LOCKOUT, attempts)
    }

    /// The admin password minimum length.
    pub fn password_admin_min_length(&self) -> Result<u32> {
        self.get_item(ItemKey::PASSWORD_ADMIN_MIN_LENGTH)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn app_state() -> ApplicationState {
        ApplicationState::new(StoreRegistry::new())
    }

    #[test]
    fn test_application_unset_items_default() {
        let app = app_state();

        assert_eq!(app.application_version().unwrap(), "");
        assert_eq!(app.client_name().unwrap(), "");
        assert_eq!(app.authentication_lockout().unwrap(), 0);
        assert_eq!(app.default_user_culture_id().unwrap(), 0);
    }

    #[test]
    fn test_application_init_roundtrip() {
        let app = app_state();

        app.set_item(ItemKey::APPLICATION_VERSION, "2.4.1").unwrap();
        app.set_item(ItemKey::APPLICATION_RELEASE_DATE, "2009-01-15").unwrap();
        app.set_item(ItemKey::CLIENT_NAME, "Acme").unwrap();
        app.set_item(ItemKey::DEFAULT_USER_CULTURE_ID, 7).unwrap();
        app.set_item(ItemKey::PASSWORD_ADMIN_MIN_LENGTH, 12).unwrap();
        app.set_authentication_lockout(3).unwrap();

        assert_eq!(app.application_version().unwrap(), "2.4.1");
        assert_eq!(app.application_release_date().unwrap(), "2009-01-15");
        assert_eq!(app.client_name().unwrap(), "Acme");
        assert_eq!(app.default_user_culture_id().unwrap(), 7);
        assert_eq!(app.password_admin_min_length().unwrap(), 12);
        assert_eq!(app.authentication_lockout().unwrap(), 3);
    }

    #[test]
    fn test_application_shared_across_accessors() {
        let registry = StoreRegistry::new();
        let writer = ApplicationState::new(registry.clone());
        let reader = ApplicationState::new(registry);

        writer.set_item(ItemKey::CLIENT_NAME, "Acme").unwrap();

        assert_eq!(reader.client_name().unwrap(), "Acme");
    }

    #[test]
    fn test_application_remove_and_clear() {
        let app = app_state();

        app.set_item("a", 1).unwrap();
        app.set_item("b", 2).unwrap();

        app.remove_item("a");
        assert!(!app.is_cached("a"));
        assert!(app.is_cached("b"));

        app.clear();
        assert!(!app.is_cached("b"));
    }
}
