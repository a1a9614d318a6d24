//! Product catalog port
//!
//! Defines how the application layer obtains catalog products.

use async_trait::async_trait;
use dlinrt_domain::Product;
use thiserror::Error;

/// Errors that can occur while loading the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog not found: {0}")]
    NotFound(String),

    #[error("Failed to read catalog: {0}")]
    Io(String),

    #[error("Invalid catalog data: {0}")]
    Parse(String),
}

/// Source of catalog products
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Load every product of the catalog, in catalog order
    async fn load_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Catalog backed by an in-memory product list
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductCatalog {
    products: Vec<Product>,
}

impl InMemoryProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn load_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_catalog_returns_products() {
        let catalog = InMemoryProductCatalog::new(vec![Product::new("a"), Product::new("b")]);
        let products = catalog.load_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].id, "b");
    }

    #[test]
    fn test_error_display() {
        let error = CatalogError::NotFound("products.json".to_string());
        assert_eq!(error.to_string(), "Catalog not found: products.json");
    }
}
