//! Canonical naming of structure labels across vendors
//!
//! Two labels that name the same structure should normalize to the same
//! string: region/modality prefixes are removed, separators are unified and
//! a trailing laterality marker becomes a single ` L` / ` R` suffix.

use regex::Regex;
use std::sync::LazyLock;

/// Region spellings recognized in a leading `"<Region>[-modality]: "` prefix
const REGION_PREFIXES: &[&str] = &[
    r"head[\s_-]*(?:&|and)[\s_-]*neck",
    r"h\s*&\s*n",
    r"brain",
    r"thorax",
    r"breast",
    r"abdomen",
    r"pelvis",
    r"gynecological",
    r"gyn",
    r"other",
];

static PREFIX_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    REGION_PREFIXES
        .iter()
        .map(|region| {
            Regex::new(&format!(
                r"(?i)^\s*(?:{region})(?:[\s_-]+(?:cbct|ct|mri|mr))?[\s_-]*:\s*"
            ))
            .expect("valid region prefix pattern")
        })
        .collect()
});

static LATERALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\s+|\s*-\s*)(left|right|l|r)$").expect("valid laterality pattern")
});

/// Remove leading region prefixes, keeping the label if nothing would remain
fn strip_region_prefix(label: &str) -> &str {
    let mut rest = label;
    loop {
        let stripped = PREFIX_PATTERNS
            .iter()
            .find_map(|pattern| pattern.find(rest).map(|m| &rest[m.end()..]));

        match stripped {
            Some(remainder) if !remainder.trim().is_empty() => rest = remainder,
            _ => return rest,
        }
    }
}

fn canonical_laterality(name: &str) -> String {
    let Some(caps) = LATERALITY.captures(name) else {
        return name.to_string();
    };

    let side = match caps[1].to_lowercase().as_str() {
        "l" | "left" => "L",
        _ => "R",
    };
    let whole = caps.get(0).map_or(name.len(), |m| m.start());
    let base = name[..whole].trim_end_matches(|c: char| c.is_whitespace() || c == '-');
    format!("{} {}", base, side)
}

/// Normalize a raw structure label to its canonical display form.
///
/// The result is idempotent and is compared case-insensitively when
/// grouping structures.
///
/// # Example
///
/// ```
/// use dlinrt_domain::structure::normalize_structure_name;
///
/// assert_eq!(normalize_structure_name("Head & Neck: Parotid_L"), "Parotid L");
/// assert_eq!(normalize_structure_name("Parotid-Left"), "Parotid L");
/// ```
pub fn normalize_structure_name(label: &str) -> String {
    let spaced = label.replace('_', " ");
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    canonical_laterality(strip_region_prefix(&collapsed))
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_laterality_variants_collapse() {
        let expected = "Parotid L";
        assert_eq!(normalize_structure_name("Parotid_L"), expected);
        assert_eq!(normalize_structure_name("Parotid-Left"), expected);
        assert_eq!(normalize_structure_name("Parotid Left"), expected);
        assert_eq!(normalize_structure_name("Parotid - left"), expected);
        assert_eq!(normalize_structure_name("Parotid_l"), expected);
        assert_eq!(normalize_structure_name("Lung_Right"), "Lung R");
    }

    #[test]
    fn test_region_prefix_stripping() {
        assert_eq!(
            normalize_structure_name("Head & Neck: Mandible"),
            normalize_structure_name("Mandible")
        );
        assert_eq!(normalize_structure_name("Head and Neck: Mandible"), "Mandible");
        assert_eq!(normalize_structure_name("H&N: Mandible"), "Mandible");
        assert_eq!(normalize_structure_name("Thorax-CT: Heart"), "Heart");
        assert_eq!(normalize_structure_name("Pelvis MR: Prostate"), "Prostate");
        assert_eq!(normalize_structure_name("brain_mri:Brainstem"), "Brainstem");
        assert_eq!(normalize_structure_name("Brain_: Brainstem"), "Brainstem");
        assert_eq!(normalize_structure_name("Thorax__CT: Heart"), "Heart");
        assert_eq!(normalize_structure_name("Pelvis_-_MR: Prostate"), "Prostate");
        assert_eq!(normalize_structure_name("Head_&_Neck - CBCT : Parotid_L"), "Parotid L");
    }

    #[test]
    fn test_laterality_separator_run_collapses() {
        assert_eq!(normalize_structure_name("Eye- - L"), "Eye L");
        assert_eq!(normalize_structure_name("Eye -_- Right"), "Eye R");
    }

    #[test]
    fn test_prefix_only_label_is_kept() {
        assert_eq!(normalize_structure_name("Brain:"), "Brain:");
    }

    #[test]
    fn test_unknown_prefix_is_kept() {
        assert_eq!(normalize_structure_name("Knee: Patella"), "Knee: Patella");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(
            normalize_structure_name("  Optic__Nerve   L "),
            "Optic Nerve L"
        );
    }

    #[test]
    fn test_names_ending_in_l_or_r_without_separator() {
        assert_eq!(normalize_structure_name("Bowel"), "Bowel");
        assert_eq!(normalize_structure_name("Femur"), "Femur");
    }

    #[test]
    fn test_idempotent() {
        let labels = [
            "Head & Neck: Parotid_L",
            "Brain: Brain: Eye-Right",
            "Thorax-CT: Heart",
            "Brain:",
            "  spinal__cord ",
            "-L",
            "Knee: Patella_r",
            "Brain_: Brainstem",
            "Thorax__CT: Heart",
            "Pelvis_-_MR: Prostate",
            "Eye- - L",
            "Brain:_-L",
            "",
        ];
        for label in labels {
            let once = normalize_structure_name(label);
            assert_eq!(normalize_structure_name(&once), once, "label: {label:?}");
        }
    }

    const TOKENS: &[&str] = &[
        "Brain", "Head & Neck", "H&N", "head and neck", "Thorax", "Pelvis", "Gyn", "Other",
        "CT", "MR", "MRI", "cbct", "Parotid", "Heart", "Eye", "L", "R", "left", "Right", "_",
        "__", "-", " - ", ":", " ", "  ",
    ];

    fn label() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(TOKENS), 0..12).prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent_on_token_labels(label in label()) {
            let once = normalize_structure_name(&label);
            prop_assert_eq!(normalize_structure_name(&once), once);
        }

        #[test]
        fn normalize_is_idempotent_on_free_text(label in "[a-zA-Z&:_ -]{0,24}") {
            let once = normalize_structure_name(&label);
            prop_assert_eq!(normalize_structure_name(&once), once);
        }

        #[test]
        fn normalized_names_are_whitespace_clean(label in label()) {
            let name = normalize_structure_name(&label);
            prop_assert!(!name.contains('_'));
            prop_assert!(!name.contains("  "));
            prop_assert_eq!(name.trim(), name.as_str());
        }
    }
}
