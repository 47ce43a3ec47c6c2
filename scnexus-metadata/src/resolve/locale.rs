//! Locale overlay resolution.
//!
//! A document may carry localization overlays keyed by locale. Resolution
//! picks the overlay whose locale exactly matches the request and merges
//! it over the shared core fields. The merge rules:
//!
//! - Matching is exact and case-sensitive. Requesting `zh` does not match
//!   an overlay declared as `zh-CN`.
//! - Overlay `name`/`description`/`version` replace the base values only
//!   when the overlay provides them; omitted fields fall back to the base,
//!   never to an empty string.
//! - Overlay translators are attached to the record's own `translators`
//!   field, never merged into `author`.
//! - A locale miss is a defined fallback, not an error: the record comes
//!   back unchanged.
//!
//! Duplicate locale declarations are a malformed document and fail with
//! [`MetadataError::DuplicateLocaleDeclaration`], detected lazily on the
//! first resolution against that document.

use std::collections::HashSet;

use crate::metadata::{LocalizationEntry, MetadataCore, MetadataError, MetadataResult};

/// Resolve the overlay for `locale` over the shared core fields.
///
/// This is the merge primitive behind
/// [`MetadataCampaign::localize`](crate::metadata::MetadataCampaign::localize)
/// and
/// [`MetadataCustomize::localize`](crate::metadata::MetadataCustomize::localize).
///
/// # Example
///
/// ```
/// use scnexus_metadata::metadata::{LocalizationEntry, MetadataCore};
/// use scnexus_metadata::resolve::resolve_locale;
///
/// let core = MetadataCore {
///     name: "Alt Co-op".to_string(),
///     localizations: vec![LocalizationEntry {
///         locale: "zh-CN".to_string(),
///         name: Some("另类合作".to_string()),
///         ..Default::default()
///     }],
///     ..Default::default()
/// };
///
/// let resolved = resolve_locale(core.clone(), "zh-CN").unwrap();
/// assert_eq!(resolved.name, "另类合作");
///
/// // A locale miss falls back to the base record unchanged
/// let fallback = resolve_locale(core.clone(), "en-US").unwrap();
/// assert_eq!(fallback, core);
/// ```
pub fn resolve_locale(mut core: MetadataCore, locale: &str) -> MetadataResult<MetadataCore> {
    check_unique_locales(&core.localizations)?;

    let Some(entry) = core
        .localizations
        .iter()
        .find(|entry| entry.locale == locale)
        .cloned()
    else {
        tracing::debug!(name = %core.name, locale, "no localization overlay, keeping base");
        return Ok(core);
    };

    if let Some(name) = entry.name {
        core.name = name;
    }
    if let Some(description) = entry.description {
        core.description = description;
    }
    if let Some(version) = entry.version {
        core.version = version;
    }
    core.translators = entry.translators;

    Ok(core)
}

/// Verify that no two overlays declare the same locale.
fn check_unique_locales(localizations: &[LocalizationEntry]) -> MetadataResult<()> {
    let mut seen = HashSet::new();
    for entry in localizations {
        if !seen.insert(entry.locale.as_str()) {
            return Err(MetadataError::DuplicateLocaleDeclaration {
                locale: entry.locale.clone(),
            });
        }
    }
    Ok(())
}
