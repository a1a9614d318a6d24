//! Comparison parameters: which products to compare and how to filter.
//!
//! [`ComparisonParams`] is the resolved, domain-typed form of the
//! `[selection]` and `[filter]` config sections merged with CLI flags.

use dlinrt_domain::StructureFilters;
use serde::{Deserialize, Serialize};

/// Resolved comparison parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonParams {
    /// Product ids to compare; empty means every catalog product.
    pub product_ids: Vec<String>,
    /// Restrict the catalog to one category (case-insensitive).
    pub category: Option<String>,
    /// Keep products without structures when comparing the whole catalog.
    pub include_empty: bool,
    /// Row filters applied after the comparison.
    pub filters: StructureFilters,
}

impl ComparisonParams {
    // ==================== Builder Methods ====================

    pub fn with_products<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.product_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_include_empty(mut self, include: bool) -> Self {
        self.include_empty = include;
        self
    }

    pub fn with_filters(mut self, filters: StructureFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Whether an explicit product list was given
    pub fn has_explicit_selection(&self) -> bool {
        !self.product_ids.is_empty()
    }
}
