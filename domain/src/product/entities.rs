//! Catalog product entities
//!
//! A [`Product`] is supplied by the catalog and is never mutated by the
//! comparator. Only the fields relevant to structure comparison are modeled;
//! unknown catalog fields are ignored during deserialization.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of a product's `supportedStructures` list.
///
/// Catalog data carries either a plain label (`"Brain: Brainstem"`) or a
/// record with a `name` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StructureEntry {
    Label(String),
    Record { name: String },
}

impl StructureEntry {
    /// The raw structure label of this entry
    pub fn name(&self) -> &str {
        match self {
            StructureEntry::Label(name) => name,
            StructureEntry::Record { name } => name,
        }
    }

    /// Convert an arbitrary JSON value into an entry, if it has a usable shape.
    ///
    /// Empty labels are rejected, like any other unusable entry.
    pub fn from_value(value: &Value) -> Option<Self> {
        let entry = match value {
            Value::String(s) => StructureEntry::Label(s.clone()),
            Value::Object(map) => match map.get("name") {
                Some(Value::String(name)) => StructureEntry::Record { name: name.clone() },
                _ => return None,
            },
            _ => return None,
        };

        if entry.name().is_empty() {
            None
        } else {
            Some(entry)
        }
    }
}

impl From<&str> for StructureEntry {
    fn from(label: &str) -> Self {
        StructureEntry::Label(label.to_string())
    }
}

/// A catalog product (auto-contouring software, typically)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier (stable across releases of the catalog)
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Manufacturer
    #[serde(default)]
    pub company: String,
    /// Catalog category (e.g. "Auto-Contouring")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Supported anatomical structures.
    ///
    /// Missing or non-array data deserializes to an empty list and entries of
    /// any other shape are dropped.
    #[serde(default, deserialize_with = "lenient_structures")]
    pub supported_structures: Vec<StructureEntry>,
}

impl Product {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            company: String::new(),
            category: None,
            supported_structures: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_structures<I, S>(mut self, structures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StructureEntry>,
    {
        self.supported_structures = structures.into_iter().map(Into::into).collect();
        self
    }

    /// Raw structure labels, skipping empty ones
    pub fn structure_labels(&self) -> impl Iterator<Item = &str> {
        self.supported_structures
            .iter()
            .map(StructureEntry::name)
            .filter(|name| !name.is_empty())
    }

    /// Whether the product advertises at least one structure
    pub fn has_structures(&self) -> bool {
        self.structure_labels().next().is_some()
    }

    /// Label used when presenting the product: "Company Name", or the id
    pub fn display_name(&self) -> String {
        match (self.company.trim(), self.name.trim()) {
            ("", "") => self.id.clone(),
            ("", name) => name.to_string(),
            (company, "") => format!("{} ({})", company, self.id),
            (company, name) => format!("{} {}", company, name),
        }
    }
}

fn lenient_structures<'de, D>(deserializer: D) -> Result<Vec<StructureEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(StructureEntry::from_value).collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_entries() {
        let json = r#"{
            "id": "p1",
            "name": "Contour+",
            "company": "Acme",
            "supportedStructures": [
                "Brain: Brainstem",
                {"name": "Thorax: Heart", "type": "OAR"},
                42,
                null,
                {"label": "no name"},
                ""
            ]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(
            product.structure_labels().collect::<Vec<_>>(),
            vec!["Brain: Brainstem", "Thorax: Heart"]
        );
    }

    #[test]
    fn test_missing_structures_is_empty() {
        let product: Product = serde_json::from_str(r#"{"id": "p2"}"#).unwrap();
        assert!(product.supported_structures.is_empty());
        assert!(!product.has_structures());
    }

    #[test]
    fn test_non_array_structures_is_empty() {
        let product: Product =
            serde_json::from_str(r#"{"id": "p3", "supportedStructures": "Heart"}"#).unwrap();
        assert!(product.supported_structures.is_empty());

        let product: Product =
            serde_json::from_str(r#"{"id": "p4", "supportedStructures": null}"#).unwrap();
        assert!(product.supported_structures.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"id": "p5", "certification": "CE", "category": "Auto-Contouring"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category.as_deref(), Some("Auto-Contouring"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Product::new("x").display_name(), "x");
        assert_eq!(
            Product::new("x").with_company("Acme").with_name("Seg").display_name(),
            "Acme Seg"
        );
        assert_eq!(Product::new("x").with_company("Acme").display_name(), "Acme (x)");
    }

    #[test]
    fn test_builder_accepts_str_labels() {
        let product = Product::new("p").with_structures(["Heart", "Lung_L"]);
        assert_eq!(product.supported_structures.len(), 2);
        assert_eq!(product.supported_structures[1], StructureEntry::Label("Lung_L".into()));
    }
}
