//! Aggregate health of the provider adapters.

use placescope_core::{KeyType, ServiceStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub name: String,
    #[serde(flatten)]
    pub status: ServiceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub providers: Vec<ProviderStatus>,
    pub working_services: usize,
    pub total_services: usize,
    pub message: String,
}

/// Summarize per-provider statuses for display.
#[must_use]
pub fn summarize_status(statuses: &[(&str, ServiceStatus)]) -> StatusSummary {
    let total_services = statuses.len();
    let working_services = statuses.iter().filter(|(_, s)| s.working).count();
    let map_only = statuses.iter().any(|(_, s)| s.key_type == KeyType::MapOnly);

    let message = if map_only {
        "catalog key only grants map-tile access; demo data is in use".to_string()
    } else if total_services > 0 && working_services == total_services {
        "all services operational".to_string()
    } else if working_services == 0 {
        "no services configured; demo data is in use".to_string()
    } else {
        format!("{working_services} of {total_services} services operational; demo data fills gaps")
    };

    StatusSummary {
        providers: statuses
            .iter()
            .map(|(name, status)| ProviderStatus {
                name: (*name).to_string(),
                status: status.clone(),
            })
            .collect(),
        working_services,
        total_services,
        message,
    }
}
