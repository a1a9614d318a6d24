//! Catalog products as seen by the structure comparator

pub mod entities;

pub use entities::{Product, StructureEntry};
