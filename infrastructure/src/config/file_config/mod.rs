//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod filter;
mod output;
mod selection;

pub use catalog::FileCatalogConfig;
pub use filter::FileFilterConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use selection::FileSelectionConfig;

use dlinrt_application::ComparisonParams;
use dlinrt_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal configuration problems
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("no product catalog configured (use --catalog or [catalog] path)")]
    MissingCatalog,

    #[error("catalog path cannot be empty")]
    EmptyCatalogPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Catalog source
    pub catalog: FileCatalogConfig,
    /// Which products to compare
    pub selection: FileSelectionConfig,
    /// Row filters
    pub filter: FileFilterConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks product ids for blanks and duplicates and filter values
    /// against their vocabularies.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.selection.parse_products().1);
        issues.extend(self.filter.to_filters().1);
        issues
    }

    /// Catalog path, if one is configured
    pub fn catalog_path(&self) -> Result<&str, ConfigValidationError> {
        match self.catalog.path.as_deref() {
            None => Err(ConfigValidationError::MissingCatalog),
            Some(path) if path.trim().is_empty() => Err(ConfigValidationError::EmptyCatalogPath),
            Some(path) => Ok(path),
        }
    }

    /// Resolve the selection and filter sections into use case parameters.
    ///
    /// Invalid values are dropped; see [`FileConfig::validate`] for the issues.
    pub fn to_comparison_params(&self) -> ComparisonParams {
        let (product_ids, _) = self.selection.parse_products();
        let (filters, _) = self.filter.to_filters();

        let mut params = ComparisonParams::default()
            .with_products(product_ids)
            .with_include_empty(self.selection.include_empty)
            .with_filters(filters);
        if let Some(category) = self
            .selection
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
        {
            params = params.with_category(category);
        }
        params
    }
}
