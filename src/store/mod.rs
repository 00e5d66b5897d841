//! Store Module
//!
//! Backing-store contract, the default in-memory implementation, and the
//! registry that resolves stores by name.

mod backend;
mod memory;
mod registry;

// Re-export public types
pub use backend::StateStore;
pub use memory::MemoryStore;
pub use registry::StoreRegistry;
