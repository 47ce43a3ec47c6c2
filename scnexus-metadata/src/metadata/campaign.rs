//! Campaign variant and its installed form.
//!
//! [`MetadataCampaign`] narrows a raw [`MetadataStandard`] into the
//! Campaign shape: the declared `campaign` string becomes a typed
//! [`CampaignType`] and the `maps` slot disappears structurally, because a
//! Campaign's maps are fixed by the game rather than declared.
//! [`CampaignInformation`] extends the variant with installation facts
//! using composition.

use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::core::{MetadataCore, MetadataStandard};
use super::error::{MetadataError, MetadataResult};
use super::local::MetadataLocal;
use super::types::{CampaignBank, CampaignType};
use crate::resolve::locale::resolve_locale;

/// A metadata document narrowed to the Campaign variant.
///
/// # Example
///
/// ```
/// use scnexus_metadata::metadata::{MetadataCampaign, MetadataStandard};
///
/// let doc: MetadataStandard = serde_json::from_str(
///     r#"{ "name": "WoL Remastered", "type": "Campaign", "campaign": "WOL" }"#,
/// ).unwrap();
///
/// let campaign = MetadataCampaign::from_standard(doc).unwrap();
/// assert_eq!(campaign.campaign.code(), "WOL");
/// assert_eq!(campaign.name, "WoL Remastered"); // Deref to MetadataCore
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataCampaign {
    /// Shared document fields (composition).
    #[serde(flatten)]
    pub core: MetadataCore,

    /// The campaign this package replaces.
    pub campaign: CampaignType,

    /// Campaign bank mode, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_bank: Option<CampaignBank>,
}

impl MetadataCampaign {
    /// Narrow a raw document to the Campaign variant.
    ///
    /// Fails with [`MetadataError::InvalidCampaignMetadata`] when the
    /// declared type is not Campaign, when the document carries map
    /// declarations, or when `campaign` is missing or empty. An
    /// unrecognized `campaign` value fails with the more specific
    /// [`MetadataError::UnknownCampaignType`].
    pub fn from_standard(doc: MetadataStandard) -> MetadataResult<Self> {
        if !doc.kind.is_campaign() {
            return Err(MetadataError::InvalidCampaignMetadata {
                reason: format!("declared type is \"{}\", not \"Campaign\"", doc.kind),
            });
        }

        if !doc.maps.is_empty() {
            return Err(MetadataError::InvalidCampaignMetadata {
                reason: format!(
                    "declares {} map file(s); campaign maps are fixed by the game",
                    doc.maps.len()
                ),
            });
        }

        let campaign = match doc.campaign.as_deref() {
            None | Some("") => {
                return Err(MetadataError::InvalidCampaignMetadata {
                    reason: "campaign type is missing".to_string(),
                });
            }
            Some(raw) => CampaignType::from_str(raw)?,
        };

        if doc.campaign_bank == Some(CampaignBank::Custom) && doc.core.banks.is_empty() {
            tracing::warn!(
                name = %doc.core.name,
                "campaign declares a custom bank but lists no banks"
            );
        }

        Ok(Self {
            core: doc.core,
            campaign,
            campaign_bank: doc.campaign_bank,
        })
    }

    /// Apply the localization overlay for `locale`, if the document
    /// declares one. See [`crate::resolve::locale`] for the merge rules.
    pub fn localize(mut self, locale: &str) -> MetadataResult<Self> {
        self.core = resolve_locale(self.core, locale)?;
        Ok(self)
    }
}

/// Deref to MetadataCore for convenient access to shared fields.
impl Deref for MetadataCampaign {
    type Target = MetadataCore;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

/// Convert back to the shared core (drops the Campaign-only fields).
impl From<MetadataCampaign> for MetadataCore {
    fn from(campaign: MetadataCampaign) -> Self {
        campaign.core
    }
}

impl AsRef<MetadataCore> for MetadataCampaign {
    fn as_ref(&self) -> &MetadataCore {
        &self.core
    }
}

/// An installed or actived Campaign: the narrowed document plus the facts
/// the filesystem scanner observed.
///
/// # Example
///
/// ```
/// use scnexus_metadata::metadata::{
///     CampaignInformation, MetadataCampaign, MetadataLocal, MetadataStandard,
/// };
///
/// let doc: MetadataStandard = serde_json::from_str(
///     r#"{ "name": "WoL Remastered", "type": "Campaign", "campaign": "WOL" }"#,
/// ).unwrap();
/// let campaign = MetadataCampaign::from_standard(doc).unwrap();
///
/// let info = CampaignInformation::new(
///     campaign,
///     MetadataLocal::installed("/library/wol/metadata.json", 4096, 7),
/// );
/// assert_eq!(info.name, "WoL Remastered");
/// assert!(!info.local.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignInformation {
    /// The resolved Campaign document (composition).
    #[serde(flatten)]
    pub metadata: MetadataCampaign,

    /// Installation facts supplied by the filesystem scanner.
    pub local: MetadataLocal,
}

impl CampaignInformation {
    /// Attach installation facts to a resolved Campaign.
    ///
    /// Pure structural combination; the supplied facts are taken as-is.
    pub fn new(metadata: MetadataCampaign, local: MetadataLocal) -> Self {
        Self { metadata, local }
    }
}

/// Deref to the Campaign variant (and transitively to MetadataCore).
impl Deref for CampaignInformation {
    type Target = MetadataCampaign;

    fn deref(&self) -> &Self::Target {
        &self.metadata
    }
}

/// Convert back to the bare variant (drops the installation facts).
impl From<CampaignInformation> for MetadataCampaign {
    fn from(info: CampaignInformation) -> Self {
        info.metadata
    }
}
