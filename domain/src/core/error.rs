//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The comparator itself never fails; these errors only arise when a
/// caller turns user-supplied text into a domain value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid modality: {0}")]
    InvalidModality(String),

    #[error("Invalid show-only filter: {0} (expected all, unique or common)")]
    InvalidShowOnly(String),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),
}

impl DomainError {
    /// The rejected input value
    pub fn value(&self) -> &str {
        match self {
            DomainError::InvalidRegion(v)
            | DomainError::InvalidModality(v)
            | DomainError::InvalidShowOnly(v)
            | DomainError::InvalidOutputFormat(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_region_display() {
        let error = DomainError::InvalidRegion("Knee".to_string());
        assert_eq!(error.to_string(), "Invalid region: Knee");
    }

    #[test]
    fn test_value_accessor() {
        assert_eq!(DomainError::InvalidModality("PET".into()).value(), "PET");
        assert_eq!(DomainError::InvalidShowOnly("some".into()).value(), "some");
    }
}
