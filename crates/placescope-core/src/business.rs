//! Per-provider business details and website evidence consumed by scoring.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Social network profiles attached to a venue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    /// Regional social network profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vk: Option<String>,
}

/// Business details for one venue as reported by one provider.
///
/// A provider that has no record for the venue is represented by the
/// absence of this struct, not by an empty instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessDetailRecord {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Average rating on a 0–5 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    /// Day name → free-text hours, e.g. `"Monday" → "11:00 - 23:00"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
}

impl BusinessDetailRecord {
    #[must_use]
    pub fn has_phone(&self) -> bool {
        has_text(self.phone.as_deref())
    }

    #[must_use]
    pub fn has_website(&self) -> bool {
        has_text(self.website.as_deref())
    }

    #[must_use]
    pub fn has_photos(&self) -> bool {
        !self.photos.is_empty()
    }

    #[must_use]
    pub fn has_working_hours(&self) -> bool {
        self.working_hours.as_ref().is_some_and(|h| !h.is_empty())
    }

    /// Phone, website, at least one photo, and working hours are all present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.has_phone() && self.has_website() && self.has_photos() && self.has_working_hours()
    }
}

/// Result of the online-presence analysis for a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsiteAnalysisRecord {
    pub has_website: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_online_ordering: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_delivery: Option<bool>,
    /// 0–100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_score: Option<u8>,
}

impl WebsiteAnalysisRecord {
    /// No website could be found for the venue.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            has_website: false,
            seo_score: Some(0),
            ..Self::default()
        }
    }
}

/// `true` when the value is present and not just whitespace.
#[must_use]
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> BusinessDetailRecord {
        let mut hours = BTreeMap::new();
        hours.insert("Monday".to_string(), "10:00 - 22:00".to_string());
        BusinessDetailRecord {
            name: "Navat".to_string(),
            address: "Abay Ave 10".to_string(),
            phone: Some("+7 727 000 0000".to_string()),
            website: Some("https://navat.kz".to_string()),
            photos: vec!["https://img/1.jpg".to_string()],
            working_hours: Some(hours),
            ..BusinessDetailRecord::default()
        }
    }

    #[test]
    fn complete_record_reports_complete() {
        assert!(complete_record().is_complete());
    }

    #[test]
    fn blank_phone_counts_as_missing() {
        let mut record = complete_record();
        record.phone = Some("  ".to_string());
        assert!(!record.has_phone());
        assert!(!record.is_complete());
    }

    #[test]
    fn empty_hours_map_counts_as_missing() {
        let mut record = complete_record();
        record.working_hours = Some(BTreeMap::new());
        assert!(!record.has_working_hours());
    }

    #[test]
    fn not_found_website_has_zero_seo() {
        let site = WebsiteAnalysisRecord::not_found();
        assert!(!site.has_website);
        assert_eq!(site.seo_score, Some(0));
        assert!(site.has_online_ordering.is_none());
    }
}
