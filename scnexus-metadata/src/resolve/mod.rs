//! Resolution of raw documents into queryable records.
//!
//! Within a single document the resolution steps are ordered, because each
//! depends on the previous step's output:
//!
//! 1. Manager inference ([`infer_manager`]) fills `manager` if absent
//! 2. Variant narrowing produces the typed Campaign/Customize record
//! 3. Locale resolution ([`resolve_locale`]) applies the requested overlay
//! 4. Local-info attachment combines in the scanner's facts
//!
//! [`resolve_campaign`] and [`resolve_customize`] drive the full chain for
//! one document. Everything here is a pure transform over immutable
//! inputs; callers may fan out across independent documents freely.

pub mod locale;
pub mod manager;

pub use locale::resolve_locale;
pub use manager::infer_manager;

use crate::metadata::{
    CampaignInformation, CustomizeInformation, MetadataCampaign, MetadataCustomize, MetadataLocal,
    MetadataResult, MetadataStandard,
};

/// Resolve a raw document into an installed Campaign record.
///
/// Runs the full chain: manager inference from `extension`, narrowing to
/// the Campaign variant, locale resolution when a locale is requested, and
/// attachment of the supplied installation facts.
///
/// # Example
///
/// ```
/// use scnexus_metadata::metadata::{MetadataLocal, MetadataStandard};
/// use scnexus_metadata::resolve::resolve_campaign;
///
/// let doc: MetadataStandard = serde_json::from_str(
///     r#"{ "name": "WoL Remastered", "type": "Campaign", "campaign": "WOL" }"#,
/// ).unwrap();
///
/// let info = resolve_campaign(
///     doc,
///     ".json",
///     None,
///     MetadataLocal::installed("/library/wol/metadata.json", 4096, 7),
/// ).unwrap();
/// assert_eq!(info.campaign.code(), "WOL");
/// ```
pub fn resolve_campaign(
    doc: MetadataStandard,
    extension: &str,
    locale: Option<&str>,
    local: MetadataLocal,
) -> MetadataResult<CampaignInformation> {
    let doc = infer_manager(doc, extension)?;
    let mut campaign = MetadataCampaign::from_standard(doc)?;
    if let Some(locale) = locale {
        campaign = campaign.localize(locale)?;
    }
    Ok(CampaignInformation::new(campaign, local))
}

/// Resolve a raw document into an installed Customize record.
///
/// Same chain as [`resolve_campaign`], narrowing to the Customize variant.
pub fn resolve_customize(
    doc: MetadataStandard,
    extension: &str,
    locale: Option<&str>,
    local: MetadataLocal,
) -> MetadataResult<CustomizeInformation> {
    let doc = infer_manager(doc, extension)?;
    let mut customize = MetadataCustomize::from_standard(doc)?;
    if let Some(locale) = locale {
        customize = customize.localize(locale)?;
    }
    Ok(CustomizeInformation::new(customize, local))
}
