//! Error types for metadata resolution.

use thiserror::Error;

/// Result type for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Errors that can occur while resolving a metadata document.
///
/// Every variant indicates a malformed authoring-time document that the
/// player or installer should be warned about rather than guessed around.
/// Locale misses and absent optional fields are defined fallbacks, not
/// errors (see [`crate::resolve::locale`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// The source file extension maps to no known manager and the document
    /// does not declare one itself.
    #[error("unsupported manager format: \"{extension}\" (expected .json or .txt)")]
    UnsupportedManagerFormat { extension: String },

    /// A document could not be narrowed to a Campaign.
    #[error("invalid campaign metadata: {reason}")]
    InvalidCampaignMetadata { reason: String },

    /// A document could not be narrowed to a Customize.
    #[error("invalid customize metadata: {reason}")]
    InvalidCustomizeMetadata { reason: String },

    /// The document declares two localization overlays with the same locale.
    #[error("duplicate locale declaration: \"{locale}\"")]
    DuplicateLocaleDeclaration { locale: String },

    /// A declared campaign value is not one of the four canonical types.
    #[error("unknown campaign type: \"{value}\" (expected WOL, HOTS, LOTV or NCO)")]
    UnknownCampaignType { value: String },
}
