//! Application layer for dlinrt-compare
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ComparisonParams;
pub use ports::product_catalog::{CatalogError, InMemoryProductCatalog, ProductCatalog};
pub use use_cases::compare_structures::{
    CompareStructuresError, CompareStructuresOutput, CompareStructuresUseCase, ProductSummary,
    select_products,
};
