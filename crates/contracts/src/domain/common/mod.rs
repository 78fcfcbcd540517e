//! Common types and traits for all catalog items

pub mod catalog;
pub mod catalog_item;

// Re-exports
pub use catalog::{Catalog, CatalogError};
pub use catalog_item::{CatalogItem, CategoryValue};
