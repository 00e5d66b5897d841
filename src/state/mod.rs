//! State Module
//!
//! The typed cache facade and its two binding modes: per-identity session
//! state and process-wide application state.

mod application;
mod facade;
mod session;


// Re-export public types
pub use application::ApplicationState;
pub use facade::CacheFacade;
pub use session::SessionState;
