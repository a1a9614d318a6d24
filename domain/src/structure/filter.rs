//! Post-hoc filtering of comparison rows

use super::comparison::StructureRow;
use super::value_objects::{Modality, Region};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which uniqueness class of rows to keep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowOnly {
    #[default]
    All,
    /// Rows supported by exactly one product
    Unique,
    /// Rows supported by every product
    Common,
}

impl ShowOnly {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowOnly::All => "all",
            ShowOnly::Unique => "unique",
            ShowOnly::Common => "common",
        }
    }
}

impl std::fmt::Display for ShowOnly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShowOnly {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ShowOnly::All),
            "unique" => Ok(ShowOnly::Unique),
            "common" => Ok(ShowOnly::Common),
            _ => Err(DomainError::InvalidShowOnly(s.to_string())),
        }
    }
}

/// Row filter criteria; every set criterion must hold
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureFilters {
    pub region: Option<Region>,
    pub modality: Option<Modality>,
    pub show_only: ShowOnly,
    pub search_term: Option<String>,
}

impl StructureFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = Some(modality);
        self
    }

    pub fn with_show_only(mut self, show_only: ShowOnly) -> Self {
        self.show_only = show_only;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// True when no criterion would remove anything
    pub fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.modality.is_none()
            && self.show_only == ShowOnly::All
            && self.search_needle().is_none()
    }

    fn search_needle(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    fn accepts(&self, row: &StructureRow, needle: Option<&str>, product_count: usize) -> bool {
        if self.region.is_some_and(|r| r != row.region) {
            return false;
        }
        if self.modality.is_some_and(|m| m != row.modality) {
            return false;
        }
        let class_ok = match self.show_only {
            ShowOnly::All => true,
            ShowOnly::Unique => row.is_unique,
            ShowOnly::Common => row.supported_by_count == product_count,
        };
        if !class_ok {
            return false;
        }
        needle.is_none_or(|n| row.structure_name.to_lowercase().contains(n))
    }
}

/// Filter comparison rows, preserving their order.
///
/// `product_count` must be the number of products the rows were built
/// from; `common` rows are those supported by exactly that many products.
pub fn filter_structures(
    rows: &[StructureRow],
    filters: &StructureFilters,
    product_count: usize,
) -> Vec<StructureRow> {
    let needle = filters.search_needle();
    rows.iter()
        .filter(|row| filters.accepts(row, needle.as_deref(), product_count))
        .cloned()
        .collect()
}
