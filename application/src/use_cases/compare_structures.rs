//! Compare Structures use case.
//!
//! Loads the catalog, selects the products to compare, runs the structure
//! comparison and applies the row filters.

use crate::config::ComparisonParams;
use crate::ports::product_catalog::{CatalogError, ProductCatalog};
use dlinrt_domain::{
    Product, StructureComparisonResult, StructureFilters, StructureRow, compare_structures,
    filter_structures,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a comparison run.
#[derive(Error, Debug)]
pub enum CompareStructuresError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("No products to compare")]
    NoProducts,
}

/// Product identity as shown next to the comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub company: String,
    pub display_name: String,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            company: product.company.clone(),
            display_name: product.display_name(),
        }
    }
}

/// Output of the [`CompareStructuresUseCase`].
#[derive(Debug, Clone, Serialize)]
pub struct CompareStructuresOutput {
    /// Compared products, in comparison order
    pub products: Vec<ProductSummary>,
    /// Unfiltered comparison
    pub result: StructureComparisonResult,
    /// Filters that produced `rows`
    pub filters: StructureFilters,
    /// Rows left after filtering
    pub rows: Vec<StructureRow>,
}

impl CompareStructuresOutput {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

/// Pick the products to compare from the catalog.
///
/// Explicit ids keep the requested order and must all exist. Without ids,
/// every product is a candidate, skipping products without structures
/// unless `include_empty` is set. The (optional) category applies to both.
pub fn select_products(
    catalog: &[Product],
    params: &ComparisonParams,
) -> Result<Vec<Product>, CompareStructuresError> {
    let in_category = |p: &Product| match &params.category {
        Some(category) => p
            .category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category.trim())),
        None => true,
    };

    let selected: Vec<Product> = if params.has_explicit_selection() {
        let by_id: HashMap<&str, &Product> = catalog
            .iter()
            .rev()
            .map(|p| (p.id.as_str(), p))
            .collect();

        let mut seen = HashSet::new();
        let mut selected = Vec::with_capacity(params.product_ids.len());
        for id in &params.product_ids {
            let id = id.trim();
            if !seen.insert(id) {
                continue;
            }
            let product = by_id
                .get(id)
                .ok_or_else(|| CompareStructuresError::UnknownProduct(id.to_string()))?;
            if !in_category(*product) {
                warn!(
                    "Skipping product {}: not in category {:?}",
                    id, params.category
                );
                continue;
            }
            selected.push((*product).clone());
        }
        selected
    } else {
        catalog
            .iter()
            .filter(|p| in_category(*p))
            .filter(|p| params.include_empty || p.has_structures())
            .cloned()
            .collect()
    };

    if selected.is_empty() {
        return Err(CompareStructuresError::NoProducts);
    }

    Ok(selected)
}

fn warn_duplicate_ids(catalog: &[Product]) {
    let mut seen = HashSet::new();
    for product in catalog {
        if !seen.insert(product.id.as_str()) {
            warn!("Duplicate product id in catalog: {}", product.id);
        }
    }
}

/// Use case for comparing the structure coverage of catalog products.
pub struct CompareStructuresUseCase {
    catalog: Arc<dyn ProductCatalog>,
}

impl Clone for CompareStructuresUseCase {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
        }
    }
}

impl CompareStructuresUseCase {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    /// Load, select, compare and filter.
    pub async fn execute(
        &self,
        params: &ComparisonParams,
    ) -> Result<CompareStructuresOutput, CompareStructuresError> {
        let catalog = self.catalog.load_products().await?;
        debug!("Catalog holds {} products", catalog.len());
        warn_duplicate_ids(&catalog);

        let products = select_products(&catalog, params)?;
        info!(
            "Comparing {} products: {}",
            products.len(),
            products
                .iter()
                .map(|p| p.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let result = compare_structures(&products);
        let rows = filter_structures(&result.all_structures, &params.filters, products.len());
        info!(
            "{} structures, {} common, {} after filtering",
            result.all_structures.len(),
            result.common_structures.len(),
            rows.len()
        );

        Ok(CompareStructuresOutput {
            products: products.iter().map(ProductSummary::from).collect(),
            result,
            filters: params.filters.clone(),
            rows,
        })
    }
}
