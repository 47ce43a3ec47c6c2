//! Installation-observed facts for a resolved package.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Locally observed installation facts.
///
/// Produced by the external filesystem scanner and attached to resolved
/// records by structural combination. This core never validates the
/// numbers; `total_size` and `file_count` are whatever the scanner saw.
///
/// `metadata_path` is present only for installed packages that keep a
/// discrete metadata file. Actived Customizes have been pushed into the
/// game's Maps/Mods folders and carry no path of their own.
///
/// # Example
///
/// ```
/// use scnexus_metadata::metadata::MetadataLocal;
///
/// let installed = MetadataLocal::installed(
///     "C:/StarCraft II/SCNexusLibrary/Customize/alt-coop/metadata.json",
///     1_048_576,
///     12,
/// );
/// assert!(!installed.is_active());
///
/// let active = MetadataLocal::active(1_048_576, 12);
/// assert!(active.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataLocal {
    /// Absolute path to the metadata file, if one exists on disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_path: Option<PathBuf>,

    /// Total size of the package files in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_size: Option<u64>,

    /// Number of files in the package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_count: Option<u64>,
}

impl MetadataLocal {
    /// Facts for an installed package with a discrete metadata file.
    pub fn installed(
        metadata_path: impl Into<PathBuf>,
        total_size: u64,
        file_count: u64,
    ) -> Self {
        Self {
            metadata_path: Some(metadata_path.into()),
            total_size: Some(total_size),
            file_count: Some(file_count),
        }
    }

    /// Facts for an actived package with no metadata file of its own.
    pub fn active(total_size: u64, file_count: u64) -> Self {
        Self {
            metadata_path: None,
            total_size: Some(total_size),
            file_count: Some(file_count),
        }
    }

    /// Check if this record describes an actived (in-place) package.
    ///
    /// Active records are not persisted to a discrete metadata file, so
    /// downstream consumers must not try to re-read them from disk.
    pub fn is_active(&self) -> bool {
        self.metadata_path.is_none()
    }

    /// Get the metadata file path, if any.
    pub fn metadata_path(&self) -> Option<&Path> {
        self.metadata_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installed_has_path() {
        let local = MetadataLocal::installed("/library/alt-coop/metadata.json", 2048, 3);

        assert_eq!(
            local.metadata_path(),
            Some(Path::new("/library/alt-coop/metadata.json"))
        );
        assert_eq!(local.total_size, Some(2048));
        assert_eq!(local.file_count, Some(3));
        assert!(!local.is_active());
    }

    #[test]
    fn test_active_has_no_path() {
        let local = MetadataLocal::active(2048, 3);

        assert!(local.metadata_path().is_none());
        assert!(local.is_active());
    }

    #[test]
    fn test_default_is_active() {
        assert!(MetadataLocal::default().is_active());
    }

    #[test]
    fn test_serde_omits_absent_fields() {
        let json = serde_json::to_string(&MetadataLocal::default()).unwrap();
        assert_eq!(json, "{}");

        let local: MetadataLocal = serde_json::from_str("{\"total_size\": 42}").unwrap();
        assert_eq!(local.total_size, Some(42));
        assert!(local.is_active());
    }
}
