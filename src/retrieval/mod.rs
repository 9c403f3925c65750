//! Document-retrieval action group: policy keyword lookup and naive search

pub mod catalog;
pub mod handler;

// Re-export the main types for convenience
pub use catalog::{CatalogEntry, PolicyCatalog};
pub use handler::handler;
