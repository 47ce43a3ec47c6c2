//! Enumerations shared across the metadata schema.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::MetadataError;

/// Declared type of a metadata document.
///
/// The schema keeps `type` open for forward compatibility: the two known
/// tags get their own variants, anything else is preserved verbatim in
/// [`MetadataType::Other`] so exhaustive matching stays sound.
///
/// # Example
///
/// ```
/// use scnexus_metadata::metadata::MetadataType;
///
/// let campaign = MetadataType::from("Campaign".to_string());
/// assert!(campaign.is_campaign());
///
/// let future = MetadataType::from("Scenario".to_string());
/// assert_eq!(future.to_string(), "Scenario");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MetadataType {
    /// A story campaign replacement.
    Campaign,
    /// User-made custom content (maps, mods, banks).
    Customize,
    /// A type tag this schema generation does not know about.
    Other(String),
}

impl MetadataType {
    /// Check if this is a Campaign document.
    pub fn is_campaign(&self) -> bool {
        matches!(self, MetadataType::Campaign)
    }

    /// Check if this is a Customize document.
    pub fn is_customize(&self) -> bool {
        matches!(self, MetadataType::Customize)
    }
}

impl From<String> for MetadataType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Campaign" => MetadataType::Campaign,
            "Customize" => MetadataType::Customize,
            _ => MetadataType::Other(value),
        }
    }
}

impl From<MetadataType> for String {
    fn from(value: MetadataType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for MetadataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataType::Campaign => write!(f, "Campaign"),
            MetadataType::Customize => write!(f, "Customize"),
            MetadataType::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// The four canonical campaign types.
///
/// These are the only values a Campaign document may declare; anything
/// else fails with [`MetadataError::UnknownCampaignType`] at narrowing.
///
/// # Example
///
/// ```
/// use scnexus_metadata::metadata::CampaignType;
///
/// let campaign: CampaignType = "WOL".parse().unwrap();
/// assert_eq!(campaign, CampaignType::Wol);
/// assert_eq!(campaign.name(), "Wings of Liberty");
///
/// assert!("BW".parse::<CampaignType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignType {
    /// Wings of Liberty.
    #[serde(rename = "WOL")]
    Wol,
    /// Heart of the Swarm.
    #[serde(rename = "HOTS")]
    Hots,
    /// Legacy of the Void.
    #[serde(rename = "LOTV")]
    Lotv,
    /// Nova Covert Ops.
    #[serde(rename = "NCO")]
    Nco,
}

impl CampaignType {
    /// All canonical campaign types in game release order.
    pub const ALL: [CampaignType; 4] = [
        CampaignType::Wol,
        CampaignType::Hots,
        CampaignType::Lotv,
        CampaignType::Nco,
    ];

    /// Get the declared wire code for this campaign type.
    pub fn code(&self) -> &'static str {
        match self {
            CampaignType::Wol => "WOL",
            CampaignType::Hots => "HOTS",
            CampaignType::Lotv => "LOTV",
            CampaignType::Nco => "NCO",
        }
    }

    /// Get the full campaign name.
    pub fn name(&self) -> &'static str {
        match self {
            CampaignType::Wol => "Wings of Liberty",
            CampaignType::Hots => "Heart of the Swarm",
            CampaignType::Lotv => "Legacy of the Void",
            CampaignType::Nco => "Nova Covert Ops",
        }
    }
}

impl FromStr for CampaignType {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WOL" => Ok(CampaignType::Wol),
            "HOTS" => Ok(CampaignType::Hots),
            "LOTV" => Ok(CampaignType::Lotv),
            "NCO" => Ok(CampaignType::Nco),
            _ => Err(MetadataError::UnknownCampaignType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Campaign bank handling mode.
///
/// The shipped schema spells the first value `offcial`; that spelling is
/// kept on the wire for compatibility, and the corrected spelling is
/// accepted as an input alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignBank {
    /// Use the game's official campaign bank.
    #[serde(rename = "offcial", alias = "official")]
    Official,
    /// The package ships its own bank files (see `banks`).
    #[serde(rename = "custom")]
    Custom,
    /// Bank handling is disabled for this package.
    #[serde(rename = "inactive")]
    Inactive,
}

impl fmt::Display for CampaignBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CampaignBank::Official => write!(f, "offcial"),
            CampaignBank::Custom => write!(f, "custom"),
            CampaignBank::Inactive => write!(f, "inactive"),
        }
    }
}

/// The tool that manages a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Manager {
    /// SCNexus, declared through `metadata.json`.
    #[serde(rename = "SCNexus")]
    ScNexus,
    /// The classic CCM manager, declared through `metadata.txt`.
    #[serde(rename = "CCM")]
    Ccm,
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Manager::ScNexus => write!(f, "SCNexus"),
            Manager::Ccm => write!(f, "CCM"),
        }
    }
}
