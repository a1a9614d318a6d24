//! Product catalog adapters

mod json_catalog;

pub use json_catalog::JsonProductCatalog;
