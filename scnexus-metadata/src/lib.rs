//! SCNexus metadata schema and resolution model.
//!
//! This library defines the metadata documents describing Customize
//! packages and Campaign entries for the StarCraft II modding ecosystem,
//! and the rules for resolving a raw declared document into a fully
//! typed, queryable record:
//!
//! 1. **Manager inference** ([`resolve::infer_manager`]): fill in the
//!    managing tool from the source file extension when not declared
//! 2. **Variant narrowing** ([`metadata::MetadataCampaign`],
//!    [`metadata::MetadataCustomize`]): enforce the field-presence rules
//!    unique to each variant
//! 3. **Locale resolution** ([`resolve::resolve_locale`]): apply the
//!    requested localization overlay with fallback to the base document
//! 4. **Local-info attachment** ([`metadata::CampaignInformation`],
//!    [`metadata::CustomizeInformation`]): combine in the facts observed
//!    by the filesystem scanner
//! 5. **Collection assembly** ([`library`]): build the indexed shapes
//!    consumers query against
//!
//! Parsing the underlying JSON or plain-text file, scanning the
//! filesystem, and presenting results are all external collaborators;
//! this core is a pure, synchronous transformation layer with no I/O and
//! no shared state. Every operation consumes immutable inputs and
//! produces a new record, so callers may resolve many documents in
//! parallel without coordination.
//!
//! # Example
//!
//! ```
//! use scnexus_metadata::metadata::{MetadataLocal, MetadataStandard};
//! use scnexus_metadata::resolve::resolve_customize;
//!
//! let doc: MetadataStandard = serde_json::from_str(r#"{
//!     "name": "Alt Co-op",
//!     "type": "Customize",
//!     "maps": [{ "name": "Level1.SC2Map" }],
//!     "localizations": [{ "locale": "zh-CN", "name": "另类合作" }]
//! }"#).unwrap();
//!
//! let info = resolve_customize(doc, ".json", Some("zh-CN"), MetadataLocal::default()).unwrap();
//! assert_eq!(info.name, "另类合作");
//! ```

pub mod library;
pub mod metadata;
pub mod resolve;
pub mod validate;

// Re-export the types most callers need at the crate root
pub use library::{
    assemble_campaign_list_set, assemble_campaign_set, assemble_customize_list,
    CampaignInformationListSet, CampaignInformationSet, CustomizeInformationList,
};
pub use metadata::{
    CampaignInformation, CampaignType, CustomizeInformation, Manager, MetadataCampaign,
    MetadataCustomize, MetadataError, MetadataLocal, MetadataResult, MetadataStandard,
    MetadataType,
};
pub use resolve::{infer_manager, resolve_campaign, resolve_customize, resolve_locale};
pub use validate::{validate_standard, ValidationWarning};
