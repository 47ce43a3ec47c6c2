//! Indexed collections of resolved records.
//!
//! Consumers (the library browser, the installer) query resolved records
//! through three aggregate shapes:
//!
//! - [`CampaignInformationSet`]: one optional slot per canonical campaign
//!   type, last-writer-wins
//! - [`CampaignInformationListSet`]: every observed record per campaign
//!   type, insertion order preserved
//! - [`CustomizeInformationList`]: ordered sequence of Customizes, no
//!   dedup by name
//!
//! Both campaign shapes hold exactly the four canonical slots
//! structurally: an unrecognized campaign type cannot be inserted because
//! [`CampaignType`] is a closed enum. A declared string outside the four
//! canonical values already failed with
//! [`MetadataError::UnknownCampaignType`](crate::metadata::MetadataError::UnknownCampaignType)
//! at narrowing, never silently dropped.

use serde::{Deserialize, Serialize};

use crate::metadata::{CampaignInformation, CampaignType, CustomizeInformation};

/// One optional slot per canonical campaign type.
///
/// When two records declare the same campaign type, the later insertion
/// wins. This is the defined policy, not an accident: the consumer asking
/// "the WoL campaign" wants the most recently observed one.
///
/// # Example
///
/// ```
/// use scnexus_metadata::library::CampaignInformationSet;
/// use scnexus_metadata::metadata::CampaignType;
///
/// let set = CampaignInformationSet::new();
/// assert!(set.is_empty());
/// assert!(set.get(CampaignType::Wol).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignInformationSet {
    #[serde(rename = "WOL", default, skip_serializing_if = "Option::is_none")]
    wol: Option<CampaignInformation>,
    #[serde(rename = "HOTS", default, skip_serializing_if = "Option::is_none")]
    hots: Option<CampaignInformation>,
    #[serde(rename = "LOTV", default, skip_serializing_if = "Option::is_none")]
    lotv: Option<CampaignInformation>,
    #[serde(rename = "NCO", default, skip_serializing_if = "Option::is_none")]
    nco: Option<CampaignInformation>,
}

impl CampaignInformationSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record into its campaign's slot, replacing any previous
    /// occupant (last-writer-wins).
    pub fn insert(&mut self, info: CampaignInformation) {
        let slot = self.slot_mut(info.campaign);
        if slot.is_some() {
            tracing::debug!(campaign = %info.campaign, "replacing campaign slot");
        }
        *slot = Some(info);
    }

    /// Get the record for a campaign type, if one was inserted.
    pub fn get(&self, campaign: CampaignType) -> Option<&CampaignInformation> {
        match campaign {
            CampaignType::Wol => self.wol.as_ref(),
            CampaignType::Hots => self.hots.as_ref(),
            CampaignType::Lotv => self.lotv.as_ref(),
            CampaignType::Nco => self.nco.as_ref(),
        }
    }

    /// Iterate occupied slots in game release order.
    pub fn iter(&self) -> impl Iterator<Item = (CampaignType, &CampaignInformation)> {
        CampaignType::ALL
            .iter()
            .filter_map(|&campaign| self.get(campaign).map(|info| (campaign, info)))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot_mut(&mut self, campaign: CampaignType) -> &mut Option<CampaignInformation> {
        match campaign {
            CampaignType::Wol => &mut self.wol,
            CampaignType::Hots => &mut self.hots,
            CampaignType::Lotv => &mut self.lotv,
            CampaignType::Nco => &mut self.nco,
        }
    }
}

/// Every observed record per canonical campaign type, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignInformationListSet {
    #[serde(rename = "WOL", default, skip_serializing_if = "Vec::is_empty")]
    wol: Vec<CampaignInformation>,
    #[serde(rename = "HOTS", default, skip_serializing_if = "Vec::is_empty")]
    hots: Vec<CampaignInformation>,
    #[serde(rename = "LOTV", default, skip_serializing_if = "Vec::is_empty")]
    lotv: Vec<CampaignInformation>,
    #[serde(rename = "NCO", default, skip_serializing_if = "Vec::is_empty")]
    nco: Vec<CampaignInformation>,
}

impl CampaignInformationListSet {
    /// Create an empty list set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its campaign's list.
    pub fn insert(&mut self, info: CampaignInformation) {
        self.list_mut(info.campaign).push(info);
    }

    /// Get all records for a campaign type, in insertion order.
    pub fn get(&self, campaign: CampaignType) -> &[CampaignInformation] {
        match campaign {
            CampaignType::Wol => &self.wol,
            CampaignType::Hots => &self.hots,
            CampaignType::Lotv => &self.lotv,
            CampaignType::Nco => &self.nco,
        }
    }

    /// Iterate the lists in game release order, empty lists included.
    pub fn iter(&self) -> impl Iterator<Item = (CampaignType, &[CampaignInformation])> {
        CampaignType::ALL
            .iter()
            .map(|&campaign| (campaign, self.get(campaign)))
    }

    /// Total number of records across all campaign types.
    pub fn total_len(&self) -> usize {
        self.wol.len() + self.hots.len() + self.lotv.len() + self.nco.len()
    }

    /// Check if every list is empty.
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    fn list_mut(&mut self, campaign: CampaignType) -> &mut Vec<CampaignInformation> {
        match campaign {
            CampaignType::Wol => &mut self.wol,
            CampaignType::Hots => &mut self.hots,
            CampaignType::Lotv => &mut self.lotv,
            CampaignType::Nco => &mut self.nco,
        }
    }
}

/// Ordered sequence of resolved Customizes.
///
/// Insertion order is preserved and names are not deduplicated: two
/// Customizes may legitimately share a name from different authors.
pub type CustomizeInformationList = Vec<CustomizeInformation>;

/// Build a [`CampaignInformationSet`] from resolved records
/// (last-writer-wins per campaign type).
pub fn assemble_campaign_set(
    infos: impl IntoIterator<Item = CampaignInformation>,
) -> CampaignInformationSet {
    let mut set = CampaignInformationSet::new();
    for info in infos {
        set.insert(info);
    }
    set
}

/// Build a [`CampaignInformationListSet`] from resolved records,
/// preserving insertion order per campaign type.
pub fn assemble_campaign_list_set(
    infos: impl IntoIterator<Item = CampaignInformation>,
) -> CampaignInformationListSet {
    let mut set = CampaignInformationListSet::new();
    for info in infos {
        set.insert(info);
    }
    set
}

/// Build a [`CustomizeInformationList`] from resolved records, preserving
/// insertion order.
pub fn assemble_customize_list(
    infos: impl IntoIterator<Item = CustomizeInformation>,
) -> CustomizeInformationList {
    infos.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        MetadataCampaign, MetadataCore, MetadataCustomize, MetadataLocal,
    };

    fn campaign_info(name: &str, campaign: CampaignType) -> CampaignInformation {
        CampaignInformation::new(
            MetadataCampaign {
                core: MetadataCore {
                    name: name.to_string(),
                    ..Default::default()
                },
                campaign,
                campaign_bank: None,
            },
            MetadataLocal::default(),
        )
    }

    fn customize_info(name: &str) -> CustomizeInformation {
        CustomizeInformation::new(
            MetadataCustomize {
                core: MetadataCore {
                    name: name.to_string(),
                    ..Default::default()
                },
                maps: Vec::new(),
            },
            MetadataLocal::default(),
        )
    }

    #[test]
    fn test_set_insert_and_get() {
        let mut set = CampaignInformationSet::new();
        set.insert(campaign_info("WoL Remastered", CampaignType::Wol));

        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(CampaignType::Wol).unwrap().name,
            "WoL Remastered"
        );
        assert!(set.get(CampaignType::Hots).is_none());
    }

    #[test]
    fn test_set_last_writer_wins() {
        let mut set = CampaignInformationSet::new();
        set.insert(campaign_info("First", CampaignType::Wol));
        set.insert(campaign_info("Second", CampaignType::Wol));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get(CampaignType::Wol).unwrap().name, "Second");
    }

    #[test]
    fn test_set_iterates_in_game_order() {
        let mut set = CampaignInformationSet::new();
        set.insert(campaign_info("Nova", CampaignType::Nco));
        set.insert(campaign_info("Liberty", CampaignType::Wol));

        let order: Vec<CampaignType> = set.iter().map(|(campaign, _)| campaign).collect();
        assert_eq!(order, vec![CampaignType::Wol, CampaignType::Nco]);
    }

    #[test]
    fn test_list_set_preserves_insertion_order() {
        let mut set = CampaignInformationListSet::new();
        set.insert(campaign_info("First", CampaignType::Wol));
        set.insert(campaign_info("Second", CampaignType::Wol));
        set.insert(campaign_info("Swarm", CampaignType::Hots));

        let wol = set.get(CampaignType::Wol);
        assert_eq!(wol.len(), 2);
        assert_eq!(wol[0].name, "First");
        assert_eq!(wol[1].name, "Second");
        assert_eq!(set.total_len(), 3);
    }

    #[test]
    fn test_assemble_set_vs_list_set() {
        let records = vec![
            campaign_info("First", CampaignType::Wol),
            campaign_info("Second", CampaignType::Wol),
        ];

        let set = assemble_campaign_set(records.clone());
        assert_eq!(set.get(CampaignType::Wol).unwrap().name, "Second");

        let list_set = assemble_campaign_list_set(records);
        let wol = list_set.get(CampaignType::Wol);
        assert_eq!(wol[0].name, "First");
        assert_eq!(wol[1].name, "Second");
    }

    #[test]
    fn test_customize_list_keeps_shared_names() {
        let list = assemble_customize_list(vec![
            customize_info("Alt Co-op"),
            customize_info("Alt Co-op"),
        ]);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, list[1].name);
    }

    #[test]
    fn test_empty_collections() {
        assert!(CampaignInformationSet::new().is_empty());
        assert!(CampaignInformationListSet::new().is_empty());
        assert!(assemble_customize_list(Vec::new()).is_empty());
    }

    #[test]
    fn test_set_serializes_with_wire_keys() {
        let mut set = CampaignInformationSet::new();
        set.insert(campaign_info("Liberty", CampaignType::Wol));

        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["WOL"]["name"], "Liberty");
        assert!(value.get("HOTS").is_none());
    }
}
