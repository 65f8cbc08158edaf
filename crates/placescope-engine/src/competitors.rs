//! Nearby competitor discovery.
//!
//! Runs one designated provider over a fixed vocabulary of venue-type terms
//! centered on the origin, then applies the authoritative geodesic radius
//! filter: provider radius parameters are only hints.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use placescope_core::{LocationResult, SearchParams};
use placescope_providers::LocationProvider;

use crate::aggregator::search_with_timeout;
use crate::dedup::dedup_locations;
use crate::geo::haversine_meters;

/// Venue-type terms searched around the origin, in accumulation order.
pub const COMPETITOR_TERMS: [&str; 8] = [
    "restaurant",
    "cafe",
    "canteen",
    "quick service",
    "fast food",
    "pizzeria",
    "sushi",
    "bar",
];

/// Upper bound on competitors returned, nearest first.
pub const MAX_COMPETITORS: usize = 15;

pub struct CompetitorFinder {
    provider: Arc<dyn LocationProvider>,
    call_timeout: Duration,
}

impl CompetitorFinder {
    #[must_use]
    pub fn new(provider: Arc<dyn LocationProvider>, call_timeout: Duration) -> Self {
        Self {
            provider,
            call_timeout,
        }
    }

    /// Competitors of `origin` within `radius_meters`, nearest first.
    ///
    /// All terms are searched concurrently and each runs to completion; a
    /// failed term contributes nothing. The origin itself (same name, any
    /// case) is excluded. At most [`MAX_COMPETITORS`] are returned.
    pub async fn search_competitors(
        &self,
        origin: &LocationResult,
        radius_meters: f64,
    ) -> Vec<LocationResult> {
        let origin_name = origin.name.to_lowercase();

        let searches = COMPETITOR_TERMS.iter().map(|term| async move {
            let params = SearchParams::near(*term, origin.coordinates, radius_meters);
            let outcome =
                search_with_timeout(self.provider.as_ref(), &params, self.call_timeout).await;
            (*term, outcome)
        });

        let mut candidates = Vec::new();
        for (term, outcome) in join_all(searches).await {
            match outcome {
                Ok(results) => {
                    let before = results.len();
                    candidates.extend(results.into_iter().filter(|candidate| {
                        candidate.name.to_lowercase() != origin_name
                            && haversine_meters(origin.coordinates, candidate.coordinates)
                                <= radius_meters
                    }));
                    tracing::debug!(term, returned = before, "competitor term searched");
                }
                Err(e) => {
                    tracing::warn!(term, error = %e, "competitor search term failed");
                }
            }
        }

        let mut ranked: Vec<(f64, LocationResult)> = dedup_locations(candidates)
            .into_iter()
            .map(|candidate| {
                (
                    haversine_meters(origin.coordinates, candidate.coordinates),
                    candidate,
                )
            })
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        ranked.truncate(MAX_COMPETITORS);

        tracing::info!(
            origin = %origin.name,
            radius_meters,
            count = ranked.len(),
            "competitor discovery complete"
        );

        ranked.into_iter().map(|(_, location)| location).collect()
    }
}
