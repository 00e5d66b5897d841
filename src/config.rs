//! Configuration Module
//!
//! Handles loading and managing store naming configuration from environment variables.

use std::env;

/// Store naming configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct StateConfig {
    /// Prefix used when formatting per-identity session partition keys
    pub session_store_prefix: String,
    /// Name of the single process-wide application store
    pub application_store_name: String,
}

impl StateConfig {
    /// Creates a new StateConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SESSION_STORE_PREFIX` - Session partition key prefix (default: "session-state")
    /// - `APPLICATION_STORE_NAME` - Application store name (default: "application-state")
    pub fn from_env() -> Self {
        Self {
            session_store_prefix: env::var("SESSION_STORE_PREFIX")
                .unwrap_or_else(|_| "session-state".to_string()),
            application_store_name: env::var("APPLICATION_STORE_NAME")
                .unwrap_or_else(|_| "application-state".to_string()),
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            session_store_prefix: "session-state".to_string(),
            application_store_name: "application-state".to_string(),
        }
    }
}
