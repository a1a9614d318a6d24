//! Region and modality extraction from raw structure labels
//!
//! Vendors prefix labels in many ways (`"Head & Neck: Parotid_L"`,
//! `"Thorax-CT: Heart"`, plain `"Liver"`). Classification is a fixed,
//! ordered rule table: the first rule that matches decides the region, so
//! the order of [`REGION_RULES`] is the priority order.

use super::normalize::normalize_structure_name;
use super::value_objects::{Modality, Region, StructureInfo};
use regex::Regex;
use std::sync::LazyLock;

/// How a region rule inspects the upper-cased label
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Label starts with one of the keywords (after leading whitespace)
    Prefix(&'static [&'static str]),
    /// Label contains one of the keywords anywhere
    Contains(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, upper: &str) -> bool {
        match self {
            Matcher::Prefix(keywords) => {
                let trimmed = upper.trim_start();
                keywords.iter().any(|k| trimmed.starts_with(k))
            }
            Matcher::Contains(keywords) => keywords.iter().any(|k| upper.contains(k)),
        }
    }
}

/// A single `(predicate, result)` classification rule
#[derive(Debug, Clone, Copy)]
pub struct RegionRule {
    pub matcher: Matcher,
    pub region: Region,
}

const fn prefix(keywords: &'static [&'static str], region: Region) -> RegionRule {
    RegionRule {
        matcher: Matcher::Prefix(keywords),
        region,
    }
}

const fn contains(keywords: &'static [&'static str], region: Region) -> RegionRule {
    RegionRule {
        matcher: Matcher::Contains(keywords),
        region,
    }
}

/// Ordered region rules. Explicit region prefixes win over anatomy keywords.
pub const REGION_RULES: &[RegionRule] = &[
    // Explicit "<Region>: ..." prefixes
    prefix(&["BRAIN"], Region::Brain),
    prefix(
        &["HEAD & NECK", "HEAD AND NECK", "HEAD&NECK", "HEAD-NECK", "HEAD_AND_NECK", "H&N"],
        Region::HeadAndNeck,
    ),
    prefix(&["THORAX"], Region::Thorax),
    prefix(&["BREAST"], Region::Breast),
    prefix(&["ABDOMEN"], Region::Abdomen),
    prefix(&["GYN"], Region::Gynecological),
    prefix(&["PELVIS"], Region::Pelvis),
    // Anatomy keywords
    contains(
        &["BRAIN", "HIPPOCAMP", "CEREBELL", "CHIASM", "PITUITARY"],
        Region::Brain,
    ),
    contains(
        &[
            "PAROTID",
            "MANDIBLE",
            "LARYNX",
            "PHARYN",
            "SUBMANDIBULAR",
            "THYROID",
            "ORAL CAVITY",
            "COCHLEA",
            "LENS",
            "EYE",
            "GLOTTI",
        ],
        Region::HeadAndNeck,
    ),
    contains(&["BREAST", "CHESTWALL", "CHEST WALL"], Region::Breast),
    contains(
        &["THORAX", "LUNG", "HEART", "ESOPHAG", "OESOPHAG", "TRACHEA", "BRONCH"],
        Region::Thorax,
    ),
    contains(
        &[
            "ABDOMEN", "LIVER", "KIDNEY", "SPLEEN", "STOMACH", "PANCREAS", "DUODENUM", "BOWEL",
        ],
        Region::Abdomen,
    ),
    contains(
        &["UTERUS", "CERVIX", "OVARY", "OVARIES", "VAGINA"],
        Region::Gynecological,
    ),
    contains(
        &[
            "PELVI", "PROSTATE", "BLADDER", "RECTUM", "FEMUR", "FEMORAL", "SEMINAL", "SIGMOID",
            "PENILE",
        ],
        Region::Pelvis,
    ),
];

// Token boundaries: string edge, whitespace, '-', '_', ':', '/', parentheses
static CT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[\s\-_:/()])(?:CB)?CT(?:$|[\s\-_:/()])").expect("valid CT pattern")
});

static MR_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[\s\-_:/()])MRI?(?:$|[\s\-_:/()])").expect("valid MR pattern")
});

/// Classify the anatomical region of a raw label
pub fn classify_region(label: &str) -> Region {
    let upper = label.to_uppercase();
    REGION_RULES
        .iter()
        .find(|rule| rule.matcher.matches(&upper))
        .map(|rule| rule.region)
        .unwrap_or(Region::Other)
}

/// Classify the imaging modality mentioned in a raw label
pub fn classify_modality(label: &str) -> Modality {
    if CT_TOKEN.is_match(label) {
        Modality::Ct
    } else if MR_TOKEN.is_match(label) {
        Modality::Mr
    } else {
        Modality::Unknown
    }
}

/// Parse a raw structure label into its classified form.
///
/// # Example
///
/// ```
/// use dlinrt_domain::structure::{parse_structure_info, Modality, Region};
///
/// let info = parse_structure_info("Thorax-CT: Heart");
/// assert_eq!(info.region, Region::Thorax);
/// assert_eq!(info.modality, Modality::Ct);
/// assert_eq!(info.normalized_name, "Heart");
/// ```
pub fn parse_structure_info(label: &str) -> StructureInfo {
    StructureInfo {
        original_name: label.to_string(),
        normalized_name: normalize_structure_name(label),
        region: classify_region(label),
        modality: classify_modality(label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_explicit_prefix() {
        assert_eq!(classify_region("Head & Neck: Parotid_L"), Region::HeadAndNeck);
        assert_eq!(classify_region("Thorax-CT: Heart"), Region::Thorax);
        assert_eq!(classify_region("Pelvis: Uterus"), Region::Pelvis);
        assert_eq!(classify_region("Gyn: Bladder"), Region::Gynecological);
    }

    #[test]
    fn test_prefix_wins_over_keyword() {
        // "Brain" keyword appears, but the explicit prefix is Head and Neck
        assert_eq!(classify_region("Head and Neck: Brainstem"), Region::HeadAndNeck);
    }

    #[test]
    fn test_brain_checked_before_other_keywords() {
        // Contains both BRAIN and EYE keywords
        assert_eq!(classify_region("Brainstem near Eye"), Region::Brain);
    }

    #[test]
    fn test_region_from_keywords() {
        assert_eq!(classify_region("Liver"), Region::Abdomen);
        assert_eq!(classify_region("kidney_l"), Region::Abdomen);
        assert_eq!(classify_region("Prostate"), Region::Pelvis);
        assert_eq!(classify_region("Rectum"), Region::Pelvis);
        assert_eq!(classify_region("Lung_R"), Region::Thorax);
        assert_eq!(classify_region("Parotid Left"), Region::HeadAndNeck);
        assert_eq!(classify_region("CTV Breast"), Region::Breast);
        assert_eq!(classify_region("Cervix"), Region::Gynecological);
    }

    #[test]
    fn test_unknown_region_degrades_to_other() {
        assert_eq!(classify_region("Skin"), Region::Other);
        assert_eq!(classify_region(""), Region::Other);
    }

    #[test]
    fn test_modality_tokens() {
        assert_eq!(classify_modality("Thorax-CT: Heart"), Modality::Ct);
        assert_eq!(classify_modality("CT: Liver"), Modality::Ct);
        assert_eq!(classify_modality("Pelvis MR: Prostate"), Modality::Mr);
        assert_eq!(classify_modality("Brain (MRI): Hippocampus"), Modality::Mr);
        assert_eq!(classify_modality("Pelvis-CBCT: Bladder"), Modality::Ct);
    }

    #[test]
    fn test_modality_ignores_embedded_letters() {
        // "RECTUM" contains "CT", "SMRT" contains "MR"; neither is a token
        assert_eq!(classify_modality("Rectum"), Modality::Unknown);
        assert_eq!(classify_modality("SMRT"), Modality::Unknown);
        assert_eq!(classify_modality("Heart"), Modality::Unknown);
    }

    #[test]
    fn test_parse_structure_info() {
        let info = parse_structure_info("Head & Neck: Parotid_L");
        assert_eq!(info.original_name, "Head & Neck: Parotid_L");
        assert_eq!(info.normalized_name, "Parotid L");
        assert_eq!(info.region, Region::HeadAndNeck);
        assert_eq!(info.modality, Modality::Unknown);
        assert_eq!(info.grouping_key(), "parotid l");
    }
}
