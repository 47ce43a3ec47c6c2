//! Customize variant and its installed form.
//!
//! [`MetadataCustomize`] narrows a raw [`MetadataStandard`] into the
//! Customize shape: declared maps are kept, and the `campaign_bank` slot
//! disappears structurally because bank semantics only apply to Campaigns.
//! [`CustomizeInformation`] extends the variant with installation facts
//! using composition.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::core::{MapEntry, MetadataCore, MetadataStandard};
use super::error::{MetadataError, MetadataResult};
use super::local::MetadataLocal;
use crate::resolve::locale::resolve_locale;

/// A metadata document narrowed to the Customize variant.
///
/// # Example
///
/// ```
/// use scnexus_metadata::metadata::{MetadataCustomize, MetadataStandard};
///
/// let doc: MetadataStandard = serde_json::from_str(
///     r#"{ "name": "Alt Co-op", "type": "Customize", "maps": [{ "name": "Level1.SC2Map" }] }"#,
/// ).unwrap();
///
/// let customize = MetadataCustomize::from_standard(doc).unwrap();
/// assert_eq!(customize.maps[0].name, "Level1.SC2Map");
/// assert_eq!(customize.name, "Alt Co-op"); // Deref to MetadataCore
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataCustomize {
    /// Shared document fields (composition).
    #[serde(flatten)]
    pub core: MetadataCore,

    /// Shipped `*.SC2Map` files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maps: Vec<MapEntry>,
}

impl MetadataCustomize {
    /// Narrow a raw document to the Customize variant.
    ///
    /// Fails with [`MetadataError::InvalidCustomizeMetadata`] when the
    /// declared type is not Customize or when the document declares a
    /// campaign bank mode.
    pub fn from_standard(doc: MetadataStandard) -> MetadataResult<Self> {
        if !doc.kind.is_customize() {
            return Err(MetadataError::InvalidCustomizeMetadata {
                reason: format!("declared type is \"{}\", not \"Customize\"", doc.kind),
            });
        }

        if let Some(bank) = doc.campaign_bank {
            return Err(MetadataError::InvalidCustomizeMetadata {
                reason: format!("declares campaign_bank \"{}\", a Campaign-only field", bank),
            });
        }

        Ok(Self {
            core: doc.core,
            maps: doc.maps,
        })
    }

    /// Apply the localization overlay for `locale`, if the document
    /// declares one. Maps are never locale-overlaid; only the shared core
    /// fields change. See [`crate::resolve::locale`] for the merge rules.
    pub fn localize(mut self, locale: &str) -> MetadataResult<Self> {
        self.core = resolve_locale(self.core, locale)?;
        Ok(self)
    }
}

/// Deref to MetadataCore for convenient access to shared fields.
impl Deref for MetadataCustomize {
    type Target = MetadataCore;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

/// Convert back to the shared core (drops the declared maps).
impl From<MetadataCustomize> for MetadataCore {
    fn from(customize: MetadataCustomize) -> Self {
        customize.core
    }
}

impl AsRef<MetadataCore> for MetadataCustomize {
    fn as_ref(&self) -> &MetadataCore {
        &self.core
    }
}

/// An installed or actived Customize: the narrowed document plus the
/// facts the filesystem scanner observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizeInformation {
    /// The resolved Customize document (composition).
    #[serde(flatten)]
    pub metadata: MetadataCustomize,

    /// Installation facts supplied by the filesystem scanner.
    pub local: MetadataLocal,
}

impl CustomizeInformation {
    /// Attach installation facts to a resolved Customize.
    ///
    /// Pure structural combination; the supplied facts are taken as-is.
    pub fn new(metadata: MetadataCustomize, local: MetadataLocal) -> Self {
        Self { metadata, local }
    }
}

/// Deref to the Customize variant (and transitively to MetadataCore).
impl Deref for CustomizeInformation {
    type Target = MetadataCustomize;

    fn deref(&self) -> &Self::Target {
        &self.metadata
    }
}

/// Convert back to the bare variant (drops the installation facts).
impl From<CustomizeInformation> for MetadataCustomize {
    fn from(info: CustomizeInformation) -> Self {
        info.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::types::{CampaignBank, MetadataType};

    fn customize_doc() -> MetadataStandard {
        MetadataStandard {
            core: MetadataCore {
                name: "Alt Co-op".to_string(),
                description: "An alternative co-op mode".to_string(),
                version: "0.3.1".to_string(),
                author: "someone".to_string(),
                ..Default::default()
            },
            kind: MetadataType::Customize,
            campaign: None,
            campaign_bank: None,
            maps: vec![MapEntry {
                name: "Level1.SC2Map".to_string(),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_from_standard_narrows_valid_customize() {
        let customize = MetadataCustomize::from_standard(customize_doc()).unwrap();

        assert_eq!(customize.name, "Alt Co-op");
        assert_eq!(customize.maps.len(), 1);
        assert_eq!(customize.maps[0].name, "Level1.SC2Map");
    }

    #[test]
    fn test_from_standard_rejects_wrong_type() {
        let mut doc = customize_doc();
        doc.kind = MetadataType::Campaign;

        let err = MetadataCustomize::from_standard(doc).unwrap_err();
        assert!(matches!(
            err,
            MetadataError::InvalidCustomizeMetadata { .. }
        ));
    }

    #[test]
    fn test_from_standard_rejects_campaign_bank() {
        let mut doc = customize_doc();
        doc.campaign_bank = Some(CampaignBank::Custom);

        let err = MetadataCustomize::from_standard(doc).unwrap_err();
        assert!(matches!(
            err,
            MetadataError::InvalidCustomizeMetadata { .. }
        ));
    }

    #[test]
    fn test_from_standard_ignores_stray_campaign_field() {
        // `campaign` is Campaign-scoped but merely ignored on a Customize
        let mut doc = customize_doc();
        doc.campaign = Some("WOL".to_string());

        assert!(MetadataCustomize::from_standard(doc).is_ok());
    }

    #[test]
    fn test_empty_maps_is_valid() {
        let mut doc = customize_doc();
        doc.maps.clear();

        let customize = MetadataCustomize::from_standard(doc).unwrap();
        assert!(customize.maps.is_empty());
    }

    #[test]
    fn test_deref_and_back_conversion() {
        let customize = MetadataCustomize::from_standard(customize_doc()).unwrap();

        assert_eq!(customize.author, "someone");
        let core: MetadataCore = customize.into();
        assert_eq!(core.version, "0.3.1");
    }

    #[test]
    fn test_information_combines_structurally() {
        let customize = MetadataCustomize::from_standard(customize_doc()).unwrap();
        let local = MetadataLocal::installed("/library/alt-coop/metadata.json", 2048, 3);

        let info = CustomizeInformation::new(customize.clone(), local.clone());
        assert_eq!(info.metadata, customize);
        assert_eq!(info.local, local);
        assert_eq!(info.maps[0].name, "Level1.SC2Map");
    }

    #[test]
    fn test_information_serializes_local_as_nested_key() {
        let customize = MetadataCustomize::from_standard(customize_doc()).unwrap();
        let info = CustomizeInformation::new(customize, MetadataLocal::active(2048, 3));

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["name"], "Alt Co-op");
        assert_eq!(value["local"]["total_size"], 2048);
        assert!(value["local"].get("metadata_path").is_none());
    }
}
