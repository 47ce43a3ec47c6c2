//! Metadata schema types and variant narrowing.
//!
//! This module provides the canonical shape of a Customize/Campaign
//! metadata document and the typed variants it narrows into.
//!
//! # Overview
//!
//! A package author declares a single metadata document (JSON for SCNexus,
//! plain text for CCM). The external parser hands it over as a
//! [`MetadataStandard`]; everything after that is typed:
//!
//! - **MetadataCore**: fields shared by every variant
//! - **MetadataStandard**: raw declared document (core + discriminants)
//! - **MetadataCampaign** / **MetadataCustomize**: narrowed variants
//! - **CampaignInformation** / **CustomizeInformation**: variant plus
//!   installation facts ([`MetadataLocal`])
//!
//! # Type Hierarchy
//!
//! ```text
//! MetadataStandard (raw)            MetadataCampaign (narrowed)
//! ├── core: MetadataCore            ├── core: MetadataCore  ←── contains
//! ├── kind: MetadataType            ├── campaign: CampaignType
//! ├── campaign: Option<String>      └── campaign_bank: Option<CampaignBank>
//! ├── campaign_bank: Option<..>
//! └── maps: Vec<MapEntry>           MetadataCustomize (narrowed)
//!                                   ├── core: MetadataCore
//!                                   └── maps: Vec<MapEntry>
//! ```
//!
//! The variants use composition (not inheritance) over [`MetadataCore`];
//! `Deref` impls allow transparent access to the shared fields. Narrowing
//! never mutates its input: each step consumes the previous record and
//! produces a new one.

mod campaign;
mod core;
mod customize;
mod error;
mod local;
mod richinfo;
mod types;

// Core document shapes
pub use core::{
    BankEntry, DependencyEntry, LauncherEntry, LocalizationEntry, MapEntry, MetadataCore,
    MetadataStandard, ModEntry,
};

// Narrowed variants and installed forms
pub use campaign::{CampaignInformation, MetadataCampaign};
pub use customize::{CustomizeInformation, MetadataCustomize};

// Enumerations
pub use types::{CampaignBank, CampaignType, Manager, MetadataType};

// Installation facts and links
pub use local::MetadataLocal;
pub use richinfo::{DonateLinks, MetadataRichinfo, SocialLinks};

// Errors
pub use error::{MetadataError, MetadataResult};
