//! Manager inference from the metadata file extension.
//!
//! A document may declare its managing tool explicitly; when it does not,
//! the source file extension decides: `metadata.json` belongs to SCNexus
//! and `metadata.txt` to CCM. This module is the single place that
//! convention lives.

use crate::metadata::{Manager, MetadataError, MetadataResult, MetadataStandard};

/// Fill in the document's manager from its source file extension.
///
/// Returns the document unchanged when `manager` is already declared.
/// Otherwise the extension (leading dot optional, ASCII case-insensitive)
/// selects the manager: `json` means SCNexus, `txt` means CCM. Any other
/// extension fails with [`MetadataError::UnsupportedManagerFormat`] rather
/// than silently defaulting.
///
/// # Example
///
/// ```
/// use scnexus_metadata::metadata::{Manager, MetadataStandard};
/// use scnexus_metadata::resolve::infer_manager;
///
/// let doc: MetadataStandard = serde_json::from_str(
///     r#"{ "name": "Alt Co-op", "type": "Customize" }"#,
/// ).unwrap();
///
/// let doc = infer_manager(doc, ".json").unwrap();
/// assert_eq!(doc.core.manager, Some(Manager::ScNexus));
/// ```
pub fn infer_manager(mut doc: MetadataStandard, extension: &str) -> MetadataResult<MetadataStandard> {
    if doc.core.manager.is_some() {
        return Ok(doc);
    }

    let normalized = extension.strip_prefix('.').unwrap_or(extension);
    let manager = if normalized.eq_ignore_ascii_case("json") {
        Manager::ScNexus
    } else if normalized.eq_ignore_ascii_case("txt") {
        Manager::Ccm
    } else {
        return Err(MetadataError::UnsupportedManagerFormat {
            extension: extension.to_string(),
        });
    };

    tracing::debug!(name = %doc.core.name, %manager, "inferred manager from extension");
    doc.core.manager = Some(manager);
    Ok(doc)
}
