//! Configuration issues detected while turning raw settings into domain values.
//!
//! Loading never stops at the first problem: every issue is collected with a
//! severity so callers can log warnings and abort only on errors.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the setting is ignored and a default is used.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A value does not belong to the field's vocabulary.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A list contains an empty entry.
    EmptyValue { field: String },
    /// The same value is listed more than once.
    DuplicateValue { field: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_is_not_error() {
        let issue = ConfigIssue::warning(
            ConfigIssueCode::EmptyValue {
                field: "selection.products".to_string(),
            },
            "empty product id",
        );
        assert!(!issue.is_error());
        assert_eq!(issue.severity, Severity::Warning);
    }

    #[test]
    fn error_constructor() {
        let issue = ConfigIssue::error(
            ConfigIssueCode::DuplicateValue {
                field: "selection.products".to_string(),
                value: "a".to_string(),
            },
            "duplicate",
        );
        assert!(issue.is_error());
    }
}
