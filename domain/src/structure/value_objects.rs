//! Structure classification value objects
//!
//! [`Region`] and [`Modality`] are fixed vocabularies. Classification is
//! best-effort: anything unrecognized lands in [`Region::Other`] or
//! [`Modality::Unknown`].

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Anatomical region of a structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Brain,
    #[serde(rename = "Head and Neck", alias = "Head & Neck")]
    HeadAndNeck,
    Thorax,
    Breast,
    Abdomen,
    Pelvis,
    Gynecological,
    Other,
}

impl Region {
    /// All regions, in vocabulary order
    pub const ALL: [Region; 8] = [
        Region::Brain,
        Region::HeadAndNeck,
        Region::Thorax,
        Region::Breast,
        Region::Abdomen,
        Region::Pelvis,
        Region::Gynecological,
        Region::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Brain => "Brain",
            Region::HeadAndNeck => "Head and Neck",
            Region::Thorax => "Thorax",
            Region::Breast => "Breast",
            Region::Abdomen => "Abdomen",
            Region::Pelvis => "Pelvis",
            Region::Gynecological => "Gynecological",
            Region::Other => "Other",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect();

        match key.split_whitespace().collect::<Vec<_>>().join(" ").as_str() {
            "brain" => Ok(Region::Brain),
            "head and neck" | "head & neck" | "h&n" | "hn" => Ok(Region::HeadAndNeck),
            "thorax" => Ok(Region::Thorax),
            "breast" => Ok(Region::Breast),
            "abdomen" => Ok(Region::Abdomen),
            "pelvis" => Ok(Region::Pelvis),
            "gynecological" | "gyn" => Ok(Region::Gynecological),
            "other" => Ok(Region::Other),
            _ => Err(DomainError::InvalidRegion(s.to_string())),
        }
    }
}

/// Imaging modality a structure model is trained on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modality {
    #[serde(rename = "CT")]
    Ct,
    #[serde(rename = "MR")]
    Mr,
    Unknown,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Ct, Modality::Mr, Modality::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Ct => "CT",
            Modality::Mr => "MR",
            Modality::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ct" | "cbct" => Ok(Modality::Ct),
            "mr" | "mri" => Ok(Modality::Mr),
            "unknown" => Ok(Modality::Unknown),
            _ => Err(DomainError::InvalidModality(s.to_string())),
        }
    }
}

/// Classification of a single raw structure label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureInfo {
    pub original_name: String,
    pub normalized_name: String,
    pub region: Region,
    pub modality: Modality,
}

impl StructureInfo {
    /// Key used to group equivalent structures across products
    pub fn grouping_key(&self) -> String {
        self.normalized_name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_str_aliases() {
        assert_eq!("brain".parse::<Region>().unwrap(), Region::Brain);
        assert_eq!("Head and Neck".parse::<Region>().unwrap(), Region::HeadAndNeck);
        assert_eq!("head-and-neck".parse::<Region>().unwrap(), Region::HeadAndNeck);
        assert_eq!("H&N".parse::<Region>().unwrap(), Region::HeadAndNeck);
        assert_eq!("GYN".parse::<Region>().unwrap(), Region::Gynecological);
        assert!("knee".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_serde_uses_display_names() {
        let json = serde_json::to_string(&Region::HeadAndNeck).unwrap();
        assert_eq!(json, "\"Head and Neck\"");
        let region: Region = serde_json::from_str("\"Head & Neck\"").unwrap();
        assert_eq!(region, Region::HeadAndNeck);
    }

    #[test]
    fn test_modality_from_str() {
        assert_eq!("MRI".parse::<Modality>().unwrap(), Modality::Mr);
        assert_eq!("ct".parse::<Modality>().unwrap(), Modality::Ct);
        assert!(matches!(
            "PET".parse::<Modality>(),
            Err(DomainError::InvalidModality(_))
        ));
    }

    #[test]
    fn test_modality_serde() {
        assert_eq!(serde_json::to_string(&Modality::Mr).unwrap(), "\"MR\"");
        assert_eq!(serde_json::to_string(&Modality::Unknown).unwrap(), "\"Unknown\"");
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }
}
