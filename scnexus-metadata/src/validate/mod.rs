//! Advisory pre-install validation.
//!
//! The game tolerates all of these conditions at runtime, so nothing here
//! is a hard error: the installer surfaces the warnings to the player and
//! proceeds. Hard violations (type mismatches, unknown campaign types,
//! duplicate locales) are rejected during resolution instead, see
//! [`crate::metadata::MetadataError`].

use thiserror::Error;

use crate::metadata::{CampaignBank, MetadataStandard};

/// A non-fatal problem found in a declared document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// The document declares a custom campaign bank but lists no banks.
    #[error("campaign_bank is \"custom\" but no banks are declared")]
    CustomBankWithoutBanks,

    /// A declared version string does not parse as a semantic version.
    #[error("{field}: \"{value}\" is not a semantic version")]
    NonSemverVersion { field: String, value: String },

    /// A map or mod entry lacks the conventional file extension.
    #[error("{field}: \"{name}\" lacks the conventional extension")]
    UnconventionalFileName { field: String, name: String },

    /// A richinfo link is not an http(s) URL.
    #[error("{field}: \"{value}\" is not an http(s) link")]
    MalformedLink { field: String, value: String },
}

/// Check a declared document for advisory problems.
///
/// Returns every warning found; an empty list means the document is clean.
/// Each warning is also logged through `tracing`.
///
/// # Example
///
/// ```
/// use scnexus_metadata::metadata::MetadataStandard;
/// use scnexus_metadata::validate::validate_standard;
///
/// let doc: MetadataStandard = serde_json::from_str(r#"{
///     "name": "Alt Co-op",
///     "version": "1.0.0",
///     "type": "Customize",
///     "maps": [{ "name": "Level1.SC2Map" }]
/// }"#).unwrap();
///
/// assert!(validate_standard(&doc).is_empty());
/// ```
pub fn validate_standard(doc: &MetadataStandard) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if doc.campaign_bank == Some(CampaignBank::Custom) && doc.core.banks.is_empty() {
        warnings.push(ValidationWarning::CustomBankWithoutBanks);
    }

    check_version("version", &doc.core.version, &mut warnings);
    for (i, entry) in doc.core.localizations.iter().enumerate() {
        if let Some(version) = &entry.version {
            check_version(&format!("localizations[{}].version", i), version, &mut warnings);
        }
    }
    for (i, map) in doc.maps.iter().enumerate() {
        if let Some(version) = &map.version {
            check_version(&format!("maps[{}].version", i), version, &mut warnings);
        }
        if !map.name.ends_with(".SC2Map") {
            warnings.push(ValidationWarning::UnconventionalFileName {
                field: format!("maps[{}].name", i),
                name: map.name.clone(),
            });
        }
    }
    for (i, entry) in doc.core.mods.iter().enumerate() {
        if let Some(version) = &entry.version {
            check_version(&format!("mods[{}].version", i), version, &mut warnings);
        }
        if !entry.name.ends_with(".SC2Mod") {
            warnings.push(ValidationWarning::UnconventionalFileName {
                field: format!("mods[{}].name", i),
                name: entry.name.clone(),
            });
        }
    }
    for (i, bank) in doc.core.banks.iter().enumerate() {
        if let Some(version) = &bank.version {
            check_version(&format!("banks[{}].version", i), version, &mut warnings);
        }
    }
    for (i, dependency) in doc.core.dependencies.iter().enumerate() {
        if let Some(version) = &dependency.version {
            check_version(
                &format!("dependencies[{}].version", i),
                version,
                &mut warnings,
            );
        }
    }

    if let Some(richinfo) = &doc.core.richinfo {
        for (field, url) in richinfo.links() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                warnings.push(ValidationWarning::MalformedLink {
                    field,
                    value: url.to_string(),
                });
            }
        }
    }

    for warning in &warnings {
        tracing::warn!(name = %doc.core.name, %warning, "metadata validation warning");
    }

    warnings
}

fn check_version(field: &str, value: &str, warnings: &mut Vec<ValidationWarning>) {
    if semver::Version::parse(value).is_err() {
        warnings.push(ValidationWarning::NonSemverVersion {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
}
