//! Domain layer for dlinrt-compare
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Products
//!
//! Catalog entries (typically auto-contouring software) advertising a list
//! of anatomical structures they can segment. Vendors name structures
//! inconsistently (`Parotid_L`, `Parotid-Left`, `Head & Neck: Parotid Left`).
//!
//! ## Structure Comparison
//!
//! - **Parsing**: best-effort region and modality classification
//! - **Normalization**: canonical names so vendors' labels line up
//! - **Comparison**: availability matrix, common/unique structures, stats
//! - **Filtering**: region, modality, uniqueness class, free-text search

pub mod config;
pub mod core;
pub mod product;
pub mod structure;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use product::{Product, StructureEntry};
pub use structure::{
    Modality, ProductStats, Region, ShowOnly, StructureComparisonResult, StructureFilters,
    StructureInfo, StructureRow, compare_structures, filter_structures, normalize_structure_name,
    parse_structure_info,
};
