//! Product selection from TOML (`[selection]` section)

use dlinrt_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw product selection from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSelectionConfig {
    /// Product ids to compare (empty = whole catalog)
    pub products: Vec<String>,
    /// Restrict the catalog to a category
    pub category: Option<String>,
    /// Keep products that list no structures
    pub include_empty: bool,
}

impl FileSelectionConfig {
    /// Product ids with blanks removed, plus the issues found
    pub fn parse_products(&self) -> (Vec<String>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        let mut ids = Vec::new();

        for id in &self.products {
            let id = id.trim();
            if id.is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyValue {
                        field: "selection.products".to_string(),
                    },
                    "selection.products: empty product id ignored",
                ));
                continue;
            }
            if !seen.insert(id.to_string()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateValue {
                        field: "selection.products".to_string(),
                        value: id.to_string(),
                    },
                    format!("selection.products: '{}' listed more than once", id),
                ));
                continue;
            }
            ids.push(id.to_string());
        }

        (ids, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_products_drops_blank_and_duplicate() {
        let config = FileSelectionConfig {
            products: vec!["a".into(), " ".into(), "b".into(), "a".into()],
            ..Default::default()
        };
        let (ids, issues) = config.parse_products();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| !i.is_error()));
    }

    #[test]
    fn test_selection_deserialize() {
        let toml_str = r#"
[selection]
products = ["limbus-contour", "mirada-dlcexpert"]
category = "Auto-Contouring"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.selection.products.len(), 2);
        assert_eq!(config.selection.category.as_deref(), Some("Auto-Contouring"));
        assert!(!config.selection.include_empty);
    }
}
