//! Payload handed to the external notification relay.

use chrono::{DateTime, Utc};
use placescope_core::{has_text, LocationResult};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::scoring::AnalysisResult;

/// Which onboarding flow produced the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    /// Owner requested the full report; an analysis is attached.
    FullAnalysis,
    /// Quick lead capture; the analysis may not have run yet.
    SmartAnalysis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub privacy_consent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub kind: AnalysisKind,
    pub contact: ContactInfo,
    pub location: LocationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
    pub submitted_at: DateTime<Utc>,
}

/// Validate the contact fields and assemble a relay payload.
///
/// Contact strings are trimmed; a blank position is dropped.
///
/// # Errors
///
/// Returns [`EngineError::InvalidNotification`] when the name or phone is
/// blank, privacy consent was not given, or a full analysis request carries
/// no analysis.
pub fn build_notification(
    kind: AnalysisKind,
    contact: ContactInfo,
    location: LocationResult,
    analysis: Option<AnalysisResult>,
    submitted_at: DateTime<Utc>,
) -> Result<NotificationPayload, EngineError> {
    if !has_text(Some(contact.name.as_str())) {
        return Err(EngineError::InvalidNotification("contact name is required".to_string()));
    }
    if !has_text(Some(contact.phone.as_str())) {
        return Err(EngineError::InvalidNotification("contact phone is required".to_string()));
    }
    if !contact.privacy_consent {
        return Err(EngineError::InvalidNotification("privacy consent was not given".to_string()));
    }
    if kind == AnalysisKind::FullAnalysis && analysis.is_none() {
        return Err(EngineError::InvalidNotification(
            "full analysis request without an analysis".to_string(),
        ));
    }

    let contact = ContactInfo {
        name: contact.name.trim().to_string(),
        phone: contact.phone.trim().to_string(),
        position: contact
            .position
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty()),
        privacy_consent: true,
    };

    Ok(NotificationPayload {
        kind,
        contact,
        location,
        analysis,
        submitted_at,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use placescope_core::{Coordinates, SourceTag};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::scoring::{calculate_score, AnalysisInput, PlatformEvidence};

    fn contact() -> ContactInfo {
        ContactInfo {
            name: "  Aigerim ".to_string(),
            phone: "+7 701 123 45 67".to_string(),
            position: Some("  ".to_string()),
            privacy_consent: true,
        }
    }

    fn venue() -> LocationResult {
        LocationResult::new(
            "70000001",
            "Navat",
            "Panfilov Street 109",
            "Almaty",
            Coordinates::new(43.256, 76.945),
            SourceTag::Catalog,
        )
    }

    fn analysis() -> AnalysisResult {
        calculate_score(
            AnalysisInput {
                primary: PlatformEvidence::missing("maps"),
                secondary: PlatformEvidence::missing("catalog"),
                website: None,
            },
            &mut StdRng::seed_from_u64(1),
        )
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn builds_trimmed_payload() {
        let payload = build_notification(
            AnalysisKind::FullAnalysis,
            contact(),
            venue(),
            Some(analysis()),
            at(),
        )
        .expect("valid payload");

        assert_eq!(payload.contact.name, "Aigerim");
        assert_eq!(payload.contact.position, None);

        let json = serde_json::to_value(&payload).expect("serializable");
        assert_eq!(json["kind"], "full_analysis");
        assert_eq!(json["analysis"]["total_score"], 0);
        assert_eq!(json["submitted_at"], "2026-03-01T12:00:00Z");
        assert!(json["contact"].get("position").is_none());
    }

    #[test]
    fn smart_analysis_may_omit_analysis() {
        let payload =
            build_notification(AnalysisKind::SmartAnalysis, contact(), venue(), None, at())
                .expect("valid payload");
        let json = serde_json::to_value(&payload).expect("serializable");
        assert!(json.get("analysis").is_none());
    }

    #[test]
    fn rejects_missing_fields() {
        let blank_name = ContactInfo {
            name: " ".to_string(),
            ..contact()
        };
        let blank_phone = ContactInfo {
            phone: String::new(),
            ..contact()
        };
        let no_consent = ContactInfo {
            privacy_consent: false,
            ..contact()
        };

        for bad in [blank_name, blank_phone, no_consent] {
            let err = build_notification(AnalysisKind::SmartAnalysis, bad, venue(), None, at());
            assert!(matches!(err, Err(EngineError::InvalidNotification(_))));
        }

        let err = build_notification(AnalysisKind::FullAnalysis, contact(), venue(), None, at());
        assert!(matches!(err, Err(EngineError::InvalidNotification(_))));
    }
}
