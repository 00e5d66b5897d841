//! Resources Module
//!
//! Filterable in-memory resource collections and their record types.

mod collection;
mod types;

// Re-export public types
pub use collection::{Categorized, ResourceCollection};
pub use types::{
    BinaryResource, BinaryResourceCollection, StringResource, StringResourceCollection,
};
