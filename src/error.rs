//! Error types for the state cache library
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == State Error Enum ==
/// Unified error type for the state cache library.
///
/// An absent key is never an error: reads resolve absence to a default
/// value. The variants below cover the conditions that do surface.
#[derive(Error, Debug)]
pub enum StateError {
    /// No backing store is registered under the resolved store id
    #[error("Store not configured: '{0}' must be registered before use")]
    StoreNotConfigured(String),

    /// The backing store rejected an add because the key already exists
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A stored value exists but does not deserialize to the requested type
    #[error("Type mismatch for key '{key}': stored value is not a {expected}")]
    TypeMismatch {
        /// The cache item key
        key: String,
        /// Name of the requested type
        expected: &'static str,
    },

    /// The value could not be serialized for storage
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the state cache library.
pub type Result<T> = std::result::Result<T, StateError>;
