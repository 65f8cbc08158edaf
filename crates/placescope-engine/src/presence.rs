//! Simulated search-presence matrix.
//!
//! Nothing here is measured. For each (query term, platform) pair the venue
//! counts as found when that platform returned a record, and a ranking is
//! drawn from a band picked by rating and review volume. The output is
//! illustrative and must not be read as real search rank.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::scoring::AnalysisInput;

/// Query terms simulated for every platform.
pub const PRESENCE_QUERIES: [&str; 3] = ["restaurant", "cafe", "food delivery"];

const TOP_BAND: RangeInclusive<u8> = 1..=3;
const MID_BAND: RangeInclusive<u8> = 3..=7;
const LOW_BAND: RangeInclusive<u8> = 6..=10;
const MAP_PACK_SIZE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceIssue {
    NotListed,
    LowRating,
    FewReviews,
    NoPhotos,
}

/// One simulated row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPresence {
    pub query: String,
    pub platform: String,
    pub found: bool,
    pub ranking: Option<u8>,
    /// Ranking within the top three.
    pub map_pack: bool,
    pub issues: Vec<PresenceIssue>,
}

/// Rows for every query term crossed with both platforms, terms outermost.
pub fn simulate_presence<R: Rng + ?Sized>(
    input: &AnalysisInput,
    rng: &mut R,
) -> Vec<SearchPresence> {
    let mut rows = Vec::with_capacity(PRESENCE_QUERIES.len() * 2);

    for query in PRESENCE_QUERIES {
        for evidence in input.platforms() {
            let row = match &evidence.record {
                None => SearchPresence {
                    query: query.to_string(),
                    platform: evidence.platform.clone(),
                    found: false,
                    ranking: None,
                    map_pack: false,
                    issues: vec![PresenceIssue::NotListed],
                },
                Some(record) => {
                    let rating = record.rating.unwrap_or(0.0);
                    let reviews = record.review_count.unwrap_or(0);
                    let ranking = rng.random_range(ranking_band(rating, reviews));

                    let mut issues = Vec::new();
                    if rating < 3.5 {
                        issues.push(PresenceIssue::LowRating);
                    }
                    if reviews < 10 {
                        issues.push(PresenceIssue::FewReviews);
                    }
                    if !record.has_photos() {
                        issues.push(PresenceIssue::NoPhotos);
                    }

                    SearchPresence {
                        query: query.to_string(),
                        platform: evidence.platform.clone(),
                        found: true,
                        ranking: Some(ranking),
                        map_pack: ranking <= MAP_PACK_SIZE,
                        issues,
                    }
                }
            };
            rows.push(row);
        }
    }

    rows
}

fn ranking_band(rating: f64, reviews: u32) -> RangeInclusive<u8> {
    if rating > 4.0 && reviews > 20 {
        TOP_BAND
    } else if rating > 3.5 && reviews > 10 {
        MID_BAND
    } else {
        LOW_BAND
    }
}
