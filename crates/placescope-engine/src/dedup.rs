//! Identity reconciliation across providers.
//!
//! Two records are the same place when their normalized name, address and
//! city match exactly. Normalization lowercases and strips punctuation, so
//! only case and punctuation differences collapse. Near-duplicates with
//! different spelling ("Navat" vs "Нават", "Abay Ave" vs "Abay Avenue") stay
//! separate; this heuristic is deliberately conservative.

use std::collections::HashSet;

use placescope_core::LocationResult;

/// Identity key for a location: normalized `name_address_city`.
#[must_use]
pub fn location_key(location: &LocationResult) -> String {
    format!(
        "{}_{}_{}",
        normalize(&location.name),
        normalize(&location.address),
        normalize(&location.city),
    )
}

/// Drop every record whose key was already seen. First occurrence wins and
/// input order is preserved.
#[must_use]
pub fn dedup_locations(locations: Vec<LocationResult>) -> Vec<LocationResult> {
    let mut seen = HashSet::with_capacity(locations.len());
    let mut unique = locations;
    unique.retain(|location| seen.insert(location_key(location)));
    unique
}

fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
