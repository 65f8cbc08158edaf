//! Location resolution, competitor discovery and visibility scoring.
//!
//! The engine is pure computation over provider output. Provider adapters
//! are injected as trait objects, and the only randomness (the simulated
//! search-presence matrix) comes from a caller-supplied RNG.

pub mod aggregator;
pub mod analysis;
pub mod competitors;
pub mod dedup;
pub mod error;
pub mod geo;
pub mod notify;
pub mod presence;
pub mod scoring;
pub mod status;

#[cfg(test)]
mod test_support;

pub use aggregator::{LocationAggregator, MAX_SEARCH_RESULTS};
pub use analysis::{AnalysisBundle, Analyzer};
pub use competitors::{CompetitorFinder, COMPETITOR_TERMS, MAX_COMPETITORS};
pub use dedup::{dedup_locations, location_key};
pub use error::EngineError;
pub use geo::haversine_meters;
pub use notify::{build_notification, AnalysisKind, ContactInfo, NotificationPayload};
pub use presence::{simulate_presence, PresenceIssue, SearchPresence, PRESENCE_QUERIES};
pub use scoring::{
    calculate_score, AnalysisInput, AnalysisResult, CategoryId, Grade, PlatformEvidence, Problem,
    Recommendation, RecommendationCategory, ScoreCategory, Severity,
};
pub use status::{summarize_status, ProviderStatus, StatusSummary};
