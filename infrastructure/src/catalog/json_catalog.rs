//! JSON file product catalog
//!
//! Reads a catalog export from disk. Two layouts are accepted:
//!
//! ```text
//! [ { "id": "...", "supportedStructures": [...] }, ... ]
//! { "products": [ { "id": "...", ... }, ... ] }
//! ```
//!
//! Entries that are not objects with a string `id` are skipped with a
//! warning; a malformed `supportedStructures` never fails the load.

use async_trait::async_trait;
use dlinrt_application::{CatalogError, ProductCatalog};
use dlinrt_domain::Product;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Catalog adapter backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonProductCatalog {
    path: PathBuf,
}

impl JsonProductCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse catalog JSON text into products.
    pub fn parse(content: &str) -> Result<Vec<Product>, CatalogError> {
        let root: Value =
            serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let entries = match root {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("products") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(CatalogError::Parse(
                        "expected a \"products\" array at the top level".to_string(),
                    ));
                }
            },
            _ => {
                return Err(CatalogError::Parse(
                    "expected an array of products or an object with \"products\"".to_string(),
                ));
            }
        };

        let mut products = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Product>(entry) {
                Ok(product) => products.push(product),
                Err(e) => warn!("Skipping catalog entry #{}: {}", index, e),
            }
        }

        Ok(products)
    }
}

#[async_trait]
impl ProductCatalog for JsonProductCatalog {
    async fn load_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Reading catalog from {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => CatalogError::NotFound(self.path.display().to_string()),
                _ => CatalogError::Io(format!("{}: {}", self.path.display(), e)),
            })?;

        let products = Self::parse(&content)?;
        info!(
            "Loaded {} products from {}",
            products.len(),
            self.path.display()
        );
        Ok(products)
    }
}
