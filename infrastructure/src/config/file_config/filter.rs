//! Row filter configuration from TOML (`[filter]` section)
//!
//! Values are kept as strings so a typo produces a warning instead of a
//! load failure; [`FileFilterConfig::to_filters`] converts them.

use dlinrt_domain::{
    ConfigIssue, ConfigIssueCode, Modality, Region, ShowOnly, StructureFilters,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw filter configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFilterConfig {
    /// Region name ("Brain", "Head and Neck", ...)
    pub region: Option<String>,
    /// Modality ("CT", "MR", "Unknown")
    pub modality: Option<String>,
    /// "all", "unique" or "common"
    pub show_only: Option<String>,
    /// Case-insensitive substring of the structure name
    pub search: Option<String>,
}

fn parse_field<T: FromStr>(
    field: &str,
    value: Option<&str>,
    valid_values: Vec<String>,
    issues: &mut Vec<ConfigIssue>,
) -> Option<T> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidEnumValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    valid_values,
                },
                format!("{}: unknown value '{}', filter ignored", field, value),
            ));
            None
        }
    }
}

impl FileFilterConfig {
    /// Convert to domain filters, reporting values that could not be parsed
    pub fn to_filters(&self) -> (StructureFilters, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let region = parse_field::<Region>(
            "filter.region",
            self.region.as_deref(),
            Region::ALL.iter().map(|r| r.to_string()).collect(),
            &mut issues,
        );
        let modality = parse_field::<Modality>(
            "filter.modality",
            self.modality.as_deref(),
            Modality::ALL.iter().map(|m| m.to_string()).collect(),
            &mut issues,
        );
        let show_only = parse_field::<ShowOnly>(
            "filter.show_only",
            self.show_only.as_deref(),
            [ShowOnly::All, ShowOnly::Unique, ShowOnly::Common]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            &mut issues,
        )
        .unwrap_or_default();

        let filters = StructureFilters {
            region,
            modality,
            show_only,
            search_term: self.search.clone().filter(|s| !s.trim().is_empty()),
        };

        (filters, issues)
    }
}
