//! Application-level configuration.
//!
//! - [`ComparisonParams`]: product selection and row filters for a comparison run

pub mod selection;

pub use selection::ComparisonParams;
