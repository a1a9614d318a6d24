//! Cross-product structure comparison
//!
//! [`compare_structures`] groups every structure label of every product by
//! its normalized name and reports, per group, which products support it.

use super::parsing::parse_structure_info;
use super::value_objects::{Modality, Region};
use crate::core::string::locale_cmp;
use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// One distinct (normalized) structure across the compared products
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureRow {
    /// Display name (first-seen normalized spelling)
    pub structure_name: String,
    /// Lower-cased grouping key
    pub normalized_name: String,
    pub region: Region,
    pub modality: Modality,
    /// Support flag for every compared product
    pub availability: BTreeMap<String, bool>,
    /// The label each supporting product uses for this structure
    pub original_names: BTreeMap<String, String>,
    pub is_unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_to_product_id: Option<String>,
    pub supported_by_count: usize,
}

impl StructureRow {
    /// Whether the given product supports this structure
    pub fn is_supported_by(&self, product_id: &str) -> bool {
        self.availability.get(product_id).copied().unwrap_or(false)
    }

    /// Whether every one of `product_count` products supports this structure
    pub fn is_common(&self, product_count: usize) -> bool {
        product_count > 0 && self.supported_by_count == product_count
    }
}

/// Per-product structure counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStats {
    /// Distinct normalized structures of the product
    pub total: usize,
    /// Structures no other compared product supports
    pub unique: usize,
    /// Structures every compared product supports
    pub common: usize,
}

/// Output of [`compare_structures`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureComparisonResult {
    pub all_structures: Vec<StructureRow>,
    pub common_structures: Vec<String>,
    pub unique_structures: BTreeMap<String, Vec<String>>,
    pub product_stats: BTreeMap<String, ProductStats>,
    pub regions: Vec<Region>,
    pub modalities: Vec<Modality>,
}

impl StructureComparisonResult {
    /// Number of products that took part in the comparison
    pub fn product_count(&self) -> usize {
        self.product_stats.len()
    }

    /// Number of rows per region, in vocabulary order
    pub fn region_breakdown(&self) -> Vec<(Region, usize)> {
        let mut counts: BTreeMap<Region, usize> = BTreeMap::new();
        for row in &self.all_structures {
            *counts.entry(row.region).or_default() += 1;
        }
        counts.into_iter().collect()
    }

    /// Look up a row by display name or normalized key (case-insensitive)
    pub fn row(&self, name: &str) -> Option<&StructureRow> {
        let key = name.to_lowercase();
        self.all_structures
            .iter()
            .find(|row| row.normalized_name == key)
    }
}

struct Group {
    display_name: String,
    region: Region,
    modality: Modality,
    original_names: BTreeMap<String, String>,
}

/// Compare the supported structures of a set of products.
///
/// Never fails: products without usable structure data simply contribute
/// nothing. A product id seen more than once is only taken into account
/// the first time.
///
/// # Example
///
/// ```
/// use dlinrt_domain::product::Product;
/// use dlinrt_domain::structure::compare_structures;
///
/// let products = vec![
///     Product::new("a").with_structures(["Brain: Brainstem", "Brain: Eye_L"]),
///     Product::new("b").with_structures(["Brain: Brainstem"]),
/// ];
///
/// let result = compare_structures(&products);
/// assert_eq!(result.common_structures, vec!["Brainstem"]);
/// assert_eq!(result.unique_structures["a"], vec!["Eye L"]);
/// assert!(result.unique_structures["b"].is_empty());
/// ```
pub fn compare_structures(products: &[Product]) -> StructureComparisonResult {
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let products: Vec<&Product> = products
        .iter()
        .filter(|p| seen_ids.insert(p.id.as_str()))
        .collect();
    let total_products = products.len();

    let mut groups: HashMap<String, Group> = HashMap::new();
    let mut key_sets: BTreeMap<&str, HashSet<String>> = BTreeMap::new();

    for product in &products {
        let keys = key_sets.entry(product.id.as_str()).or_default();

        for label in product.structure_labels() {
            let info = parse_structure_info(label);
            let key = info.grouping_key();
            if key.is_empty() {
                continue;
            }

            let group = groups.entry(key.clone()).or_insert_with(|| Group {
                display_name: info.normalized_name.clone(),
                region: info.region,
                modality: info.modality,
                original_names: BTreeMap::new(),
            });
            group
                .original_names
                .entry(product.id.clone())
                .or_insert_with(|| label.to_string());

            keys.insert(key);
        }
    }

    let mut rows: Vec<StructureRow> = groups
        .into_iter()
        .map(|(key, group)| {
            let availability: BTreeMap<String, bool> = products
                .iter()
                .map(|p| {
                    let supported = key_sets
                        .get(p.id.as_str())
                        .is_some_and(|keys| keys.contains(&key));
                    (p.id.clone(), supported)
                })
                .collect();

            let supporters: Vec<&String> = availability
                .iter()
                .filter(|&(_, supported)| *supported)
                .map(|(id, _)| id)
                .collect();
            let supported_by_count = supporters.len();
            let is_unique = supported_by_count == 1;

            StructureRow {
                structure_name: group.display_name,
                normalized_name: key,
                region: group.region,
                modality: group.modality,
                unique_to_product_id: if is_unique {
                    supporters.first().map(|id| (*id).clone())
                } else {
                    None
                },
                availability,
                original_names: group.original_names,
                is_unique,
                supported_by_count,
            }
        })
        .collect();

    rows.sort_by(|a, b| locale_cmp(&a.structure_name, &b.structure_name));

    let mut unique_structures: BTreeMap<String, Vec<String>> = products
        .iter()
        .map(|p| (p.id.clone(), Vec::new()))
        .collect();
    let mut common_structures = Vec::new();
    let mut common_keys: HashSet<&str> = HashSet::new();

    for row in &rows {
        if let Some(owner) = &row.unique_to_product_id {
            if let Some(names) = unique_structures.get_mut(owner) {
                names.push(row.structure_name.clone());
            }
        }
        if row.is_common(total_products) {
            common_structures.push(row.structure_name.clone());
            common_keys.insert(row.normalized_name.as_str());
        }
    }

    let product_stats: BTreeMap<String, ProductStats> = key_sets
        .iter()
        .map(|(id, keys)| {
            let stats = ProductStats {
                total: keys.len(),
                unique: unique_structures.get(*id).map_or(0, Vec::len),
                common: keys
                    .iter()
                    .filter(|k| common_keys.contains(k.as_str()))
                    .count(),
            };
            (id.to_string(), stats)
        })
        .collect();

    let regions: Vec<Region> = rows
        .iter()
        .map(|r| r.region)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let modalities: Vec<Modality> = rows
        .iter()
        .map(|r| r.modality)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    StructureComparisonResult {
        all_structures: rows,
        common_structures,
        unique_structures,
        product_stats,
        regions,
        modalities,
    }
}
