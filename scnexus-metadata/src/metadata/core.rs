//! Base metadata document shape.
//!
//! [`MetadataCore`] holds the fields shared by every variant and
//! [`MetadataStandard`] is the raw declared document handed over by the
//! external parser. Narrowed variants ([`super::MetadataCampaign`],
//! [`super::MetadataCustomize`]) compose the core rather than repeating it.
//!
//! Schema drift between the two observed declaration generations is
//! normalized here at the serde boundary, so everything past parsing sees
//! one canonical shape:
//!
//! - `snid` is a number in older documents, a string in newer ones
//! - `translator` (singular) became `translators`
//! - `sponsor` became `donate` (see [`super::MetadataRichinfo`])
//! - the shipped wire keys keep the historical `luancher` and `offcial`
//!   spellings, with the corrected forms accepted on input

use serde::{Deserialize, Deserializer, Serialize};

use super::richinfo::MetadataRichinfo;
use super::types::{CampaignBank, Manager, MetadataType};

/// Fields shared by every metadata variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataCore {
    /// SCNexus network identifier assigned on publication.
    ///
    /// Older documents declare this as a number; it is normalized to a
    /// string on input.
    #[serde(
        default,
        deserialize_with = "deserialize_snid",
        skip_serializing_if = "Option::is_none"
    )]
    pub snid: Option<String>,

    /// Package name.
    pub name: String,

    /// Package description.
    #[serde(default)]
    pub description: String,

    /// Declared package version. Kept verbatim as authored; semantic
    /// version conformance is checked only by advisory validation.
    #[serde(default)]
    pub version: String,

    /// Package author.
    #[serde(default)]
    pub author: String,

    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Localization overlays, at most one per locale.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub localizations: Vec<LocalizationEntry>,

    /// The map file launched when the player plays this package.
    ///
    /// Wire key keeps the shipped `luancher` spelling; the corrected form
    /// is accepted on input.
    #[serde(
        rename = "luancher",
        alias = "launcher",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub launcher: Option<LauncherEntry>,

    /// Base directory for map files, relative to the game's Maps folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps_directory: Option<String>,

    /// Base directory for mod files, relative to the game's Mods folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mods_directory: Option<String>,

    /// Shipped `*.SC2Mod` files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mods: Vec<ModEntry>,

    /// Declared external mod requirements. Informational only; never
    /// resolved against a registry here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyEntry>,

    /// Named save-data containers. Meaningful only when the campaign bank
    /// mode is `custom`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub banks: Vec<BankEntry>,

    /// The managing tool, if declared. Inferred from the source file
    /// extension otherwise (see [`crate::resolve::infer_manager`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<Manager>,

    /// Social and sponsor links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub richinfo: Option<MetadataRichinfo>,

    /// Translators of the applied localization overlay.
    ///
    /// Never declared at the document top level; populated only by locale
    /// resolution and kept separate from `author`.
    #[serde(skip_deserializing, default, skip_serializing_if = "Vec::is_empty")]
    pub translators: Vec<String>,
}

/// The raw declared document: shared core plus the variant-discriminant
/// fields. This is what the external parser hands over; narrowing to a
/// typed variant happens in [`super::MetadataCampaign::from_standard`] and
/// [`super::MetadataCustomize::from_standard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataStandard {
    /// Shared document fields.
    #[serde(flatten)]
    pub core: MetadataCore,

    /// Declared document type.
    #[serde(rename = "type")]
    pub kind: MetadataType,

    /// Declared campaign type, required when `kind` is Campaign. Kept as
    /// the raw string here; validated against [`super::CampaignType`] at
    /// narrowing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,

    /// Campaign bank mode. Campaign-scoped; a Customize document must not
    /// declare it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_bank: Option<CampaignBank>,

    /// Shipped `*.SC2Map` files. Customize-scoped; a Campaign's maps are
    /// fixed by the game.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maps: Vec<MapEntry>,
}

/// One localization overlay.
///
/// Fields omitted in an overlay are not overridden: resolution falls back
/// to the base document's value, never to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizationEntry {
    /// Locale code, e.g. `zh-CN`. Unique within one document.
    pub locale: String,

    /// Localized package name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Localized description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Localized version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Contributors of this overlay. Older documents use the singular
    /// `translator` key.
    #[serde(
        alias = "translator",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub translators: Vec<String>,
}

/// One shipped map file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    /// File name, conventionally with the `.SC2Map` extension.
    pub name: String,

    /// Map description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Map version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// True if the file is stored as an exploded Components directory
    /// rather than a single archive.
    #[serde(default)]
    pub components: bool,

    /// Path relative to the type's maps directory. Unset when the file
    /// sits directly in that directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
}

/// One shipped mod file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModEntry {
    /// File name, conventionally with the `.SC2Mod` extension.
    pub name: String,

    /// Mod description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Mod version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// True if the file is stored as an exploded Components directory.
    #[serde(default)]
    pub components: bool,

    /// Path relative to the type's mods directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,

    /// True when the package ships without this file and expects the
    /// player to have the upstream dependency installed already. A
    /// declared assumption; nothing here verifies it.
    #[serde(default)]
    pub upstream: bool,
}

/// One named save-data container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankEntry {
    /// Bank name.
    pub name: String,

    /// Bank description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Bank version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// One declared external mod requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    /// Dependency name.
    pub name: String,

    /// Dependency description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Required version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// The map launched when the player plays this package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherEntry {
    /// Name of the launcher map file.
    pub map_name: String,
}

/// Accept the older numeric `snid` alongside the newer string form.
fn deserialize_snid<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Snid {
        Number(u64),
        Text(String),
    }

    let snid = Option::<Snid>::deserialize(deserializer)?;
    Ok(snid.map(|s| match s {
        Snid::Number(n) => n.to_string(),
        Snid::Text(t) => t,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_document() {
        let json = r#"{ "name": "Alt Co-op", "type": "Customize" }"#;
        let doc: MetadataStandard = serde_json::from_str(json).unwrap();

        assert_eq!(doc.core.name, "Alt Co-op");
        assert_eq!(doc.kind, MetadataType::Customize);
        assert!(doc.core.description.is_empty());
        assert!(doc.core.mods.is_empty());
        assert!(doc.maps.is_empty());
        assert!(doc.core.manager.is_none());
    }

    #[test]
    fn test_deserialize_snid_number_or_string() {
        let doc: MetadataStandard =
            serde_json::from_str(r#"{ "name": "a", "type": "Customize", "snid": 42 }"#).unwrap();
        assert_eq!(doc.core.snid.as_deref(), Some("42"));

        let doc: MetadataStandard =
            serde_json::from_str(r#"{ "name": "a", "type": "Customize", "snid": "SN-42" }"#)
                .unwrap();
        assert_eq!(doc.core.snid.as_deref(), Some("SN-42"));

        let doc: MetadataStandard =
            serde_json::from_str(r#"{ "name": "a", "type": "Customize" }"#).unwrap();
        assert!(doc.core.snid.is_none());
    }

    #[test]
    fn test_deserialize_translator_singular_alias() {
        let json = r#"{
            "name": "a",
            "type": "Customize",
            "localizations": [
                { "locale": "zh-CN", "translator": ["somebody"] }
            ]
        }"#;
        let doc: MetadataStandard = serde_json::from_str(json).unwrap();

        assert_eq!(doc.core.localizations[0].translators, vec!["somebody"]);
    }

    #[test]
    fn test_deserialize_launcher_spellings() {
        let doc: MetadataStandard = serde_json::from_str(
            r#"{ "name": "a", "type": "Campaign", "luancher": { "map_name": "Intro.SC2Map" } }"#,
        )
        .unwrap();
        assert_eq!(doc.core.launcher.unwrap().map_name, "Intro.SC2Map");

        let doc: MetadataStandard = serde_json::from_str(
            r#"{ "name": "a", "type": "Campaign", "launcher": { "map_name": "Intro.SC2Map" } }"#,
        )
        .unwrap();
        assert_eq!(doc.core.launcher.unwrap().map_name, "Intro.SC2Map");
    }

    #[test]
    fn test_serialize_launcher_uses_wire_spelling() {
        let doc = MetadataStandard {
            core: MetadataCore {
                name: "a".to_string(),
                launcher: Some(LauncherEntry {
                    map_name: "Intro.SC2Map".to_string(),
                }),
                ..Default::default()
            },
            kind: MetadataType::Campaign,
            campaign: Some("WOL".to_string()),
            campaign_bank: None,
            maps: Vec::new(),
        };
        let json = serde_json::to_string(&doc).unwrap();

        assert!(json.contains("\"luancher\""));
        assert!(!json.contains("\"launcher\""));
    }

    #[test]
    fn test_translators_never_read_from_document() {
        // A top-level translators key must not populate the resolved field
        let json = r#"{ "name": "a", "type": "Customize", "translators": ["x"] }"#;
        let doc: MetadataStandard = serde_json::from_str(json).unwrap();

        assert!(doc.core.translators.is_empty());
    }

    #[test]
    fn test_deserialize_entries_with_defaults() {
        let json = r#"{
            "name": "a",
            "type": "Customize",
            "maps": [
                { "name": "Level1.SC2Map" },
                { "name": "Level2", "components": true, "relative_path": "levels" }
            ],
            "mods": [
                { "name": "Shared.SC2Mod", "upstream": true }
            ]
        }"#;
        let doc: MetadataStandard = serde_json::from_str(json).unwrap();

        assert!(!doc.maps[0].components);
        assert!(doc.maps[1].components);
        assert_eq!(doc.maps[1].relative_path.as_deref(), Some("levels"));
        assert!(doc.core.mods[0].upstream);
    }

    #[test]
    fn test_round_trip_preserves_document() {
        let json = r#"{
            "snid": "SN-1",
            "name": "Alt Co-op",
            "description": "An alternative co-op mode",
            "version": "1.2.0",
            "author": "someone",
            "type": "Customize",
            "tags": ["coop"],
            "maps": [{ "name": "Level1.SC2Map", "description": "First level" }],
            "mods": [{ "name": "Shared.SC2Mod", "upstream": true }],
            "dependencies": [{ "name": "CoreLib.SC2Mod", "version": "2.0.0" }]
        }"#;
        let doc: MetadataStandard = serde_json::from_str(json).unwrap();
        let serialized = serde_json::to_string(&doc).unwrap();
        let reparsed: MetadataStandard = serde_json::from_str(&serialized).unwrap();

        assert_eq!(doc, reparsed);
    }
}
