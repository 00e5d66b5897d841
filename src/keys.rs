//! Well-Known Item Keys
//!
//! Tagged constants for the cache slots that callers access as first-class
//! fields. Each constant wraps the literal string used as the cache key, so
//! the mapping is stable across process restarts by construction. Arbitrary
//! string keys remain valid everywhere an `ItemKey` is accepted.

use std::fmt;

// == Item Key ==
/// A well-known cache item key.
///
/// A thin wrapper over a static string; the facade APIs take
/// `impl AsRef<str>`, so call sites can pass either an `ItemKey` constant
/// or a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemKey(&'static str);

impl ItemKey {
    // Per-user session slots
    pub const USER_ID: ItemKey = ItemKey("UserId");
    pub const USER_NAME: ItemKey = ItemKey("UserName");
    pub const USER_DISPLAY_NAME: ItemKey = ItemKey("UserDisplayName");
    pub const USER_CULTURE: ItemKey = ItemKey("UserCulture");
    pub const USER_CULTURE_ID: ItemKey = ItemKey("UserCultureId");
    pub const USER_UI_CULTURE: ItemKey = ItemKey("UserUICulture");
    pub const USER_ROLES: ItemKey = ItemKey("UserRoles");
    pub const USER_ROLE_TYPE_IDS: ItemKey = ItemKey("UserRoleTypeIds");
    pub const USER_THEME: ItemKey = ItemKey("UserTheme");
    pub const USER_META_DATA: ItemKey = ItemKey("UserMetaData");
    pub const AUTHENTICATION_FAILURE_COUNT: ItemKey = ItemKey("AuthenticationFailureCount");

    // Process-wide application slots
    pub const APPLICATION_VERSION: ItemKey = ItemKey("ApplicationVersion");
    pub const APPLICATION_RELEASE_DATE: ItemKey = ItemKey("ApplicationReleaseDate");
    pub const APPLICATION_META_DATA: ItemKey = ItemKey("ApplicationMetaData");
    pub const CLIENT_NAME: ItemKey = ItemKey("ClientName");
    pub const CLIENT_META_DATA: ItemKey = ItemKey("ClientMetaData");
    pub const CONFIG_ROOT_FOLDER_PATH: ItemKey = ItemKey("ConfigRootFolderPath");
    pub const DEFAULT_CLIENT_EMAIL_ADDRESS: ItemKey = ItemKey("DefaultClientEmailAddress");
    pub const DEFAULT_USER_CULTURE: ItemKey = ItemKey("DefaultUserCulture");
    pub const DEFAULT_USER_CULTURE_ID: ItemKey = ItemKey("DefaultUserCultureId");
    pub const DEFAULT_USER_UI_CULTURE: ItemKey = ItemKey("DefaultUserUICulture");
    pub const DEFAULT_USER_THEME: ItemKey = ItemKey("DefaultUserTheme");
    pub const DEFAULT_USER_ROLE_ID: ItemKey = ItemKey("DefaultUserRoleId");
    pub const DEFAULT_USER_META_DATA: ItemKey = ItemKey("DefaultUserMetaData");
    pub const AUTHENTICATION_LOCKOUT: ItemKey = ItemKey("AuthenticationLockout");
    pub const PASSWORD_ADMIN_MIN_LENGTH: ItemKey = ItemKey("PasswordAdminMinLength");

    /// Returns the canonical cache key string.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl AsRef<str> for ItemKey {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
