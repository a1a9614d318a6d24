//! Infrastructure layer for dlinrt-compare
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use catalog::JsonProductCatalog;
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileConfig, FileFilterConfig,
    FileOutputConfig, FileOutputFormat, FileSelectionConfig,
};
