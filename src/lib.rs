//! State Cache - session and application state caching facades
//!
//! Provides typed get/set/remove/contains/clear access over pluggable
//! backing stores, scoped either per authenticated identity or
//! process-wide, plus filterable resource collections and the message
//! DTOs the state layer exchanges with surrounding services.

pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod resources;
pub mod state;
pub mod store;

pub use config::StateConfig;
pub use error::{Result, StateError};
pub use keys::ItemKey;
pub use state::{ApplicationState, CacheFacade, SessionState};
pub use store::{MemoryStore, StateStore, StoreRegistry};
