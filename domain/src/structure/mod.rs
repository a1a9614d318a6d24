//! Structure comparison domain
//!
//! Reconciles anatomical structure names across vendors and compares the
//! structure coverage of a set of products.
//!
//! # Pipeline
//!
//! ```text
//! raw label ──► parsing   (region, modality)
//!           └─► normalize (canonical name, grouping key)
//!                   │
//!                   ▼
//! products ──► comparison (rows, common/unique, stats) ──► filter
//! ```
//!
//! Everything here is pure and synchronous; no state is kept between calls.

pub mod comparison;
pub mod filter;
pub mod normalize;
pub mod parsing;
pub mod value_objects;

pub use comparison::{ProductStats, StructureComparisonResult, StructureRow, compare_structures};
pub use filter::{ShowOnly, StructureFilters, filter_structures};
pub use normalize::normalize_structure_name;
pub use parsing::{classify_modality, classify_region, parse_structure_info};
pub use value_objects::{Modality, Region, StructureInfo};
