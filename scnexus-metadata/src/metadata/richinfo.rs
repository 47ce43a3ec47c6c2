//! Social and sponsor link metadata.
//!
//! Richinfo is purely descriptive: the links are surfaced to players by the
//! presentation layer and never fetched or enforced here. Link
//! well-formedness is checked only by the advisory [`crate::validate`]
//! module.

use serde::{Deserialize, Serialize};

/// Optional author-declared links for a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRichinfo {
    /// Project or author website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Social media links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,

    /// Donation links. Older documents spell the key `sponsor`.
    #[serde(alias = "sponsor", default, skip_serializing_if = "Option::is_none")]
    pub donate: Option<DonateLinks>,
}

impl MetadataRichinfo {
    /// Collect every declared link with its dotted field path.
    ///
    /// Used by advisory validation to report malformed URLs per field.
    pub fn links(&self) -> Vec<(String, &str)> {
        let mut links = Vec::new();
        if let Some(website) = &self.website {
            links.push(("richinfo.website".to_string(), website.as_str()));
        }
        if let Some(social) = &self.social {
            for (slot, url) in social.links() {
                links.push((format!("richinfo.social.{}", slot), url));
            }
        }
        if let Some(donate) = &self.donate {
            for (slot, url) in donate.links() {
                links.push((format!("richinfo.donate.{}", slot), url));
            }
        }
        links
    }
}

/// Social media link slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weibo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bilibili: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qq_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wechat_official_account: Option<String>,
}

impl SocialLinks {
    /// Declared links as (slot name, url) pairs.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("general", &self.general),
            ("twitter", &self.twitter),
            ("discord", &self.discord),
            ("youtube", &self.youtube),
            ("weibo", &self.weibo),
            ("bilibili", &self.bilibili),
            ("qq_group", &self.qq_group),
            ("wechat_official_account", &self.wechat_official_account),
        ]
        .into_iter()
        .filter_map(|(slot, url)| url.as_deref().map(|u| (slot, u)))
        .collect()
    }
}

/// Donation link slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonateLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paypal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patreon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buymeacoffee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afdian: Option<String>,
}

impl DonateLinks {
    /// Declared links as (slot name, url) pairs.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("general", &self.general),
            ("paypal", &self.paypal),
            ("patreon", &self.patreon),
            ("buymeacoffee", &self.buymeacoffee),
            ("afdian", &self.afdian),
        ]
        .into_iter()
        .filter_map(|(slot, url)| url.as_deref().map(|u| (slot, u)))
        .collect()
    }
}
