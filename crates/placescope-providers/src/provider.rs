//! The adapter seams the engine is built against.
//!
//! The engine receives these as `Arc<dyn ...>` so deterministic fakes can be
//! swapped in for tests.

use async_trait::async_trait;
use placescope_core::{
    BusinessDetailRecord, LocationResult, SearchParams, ServiceStatus, SourceTag,
    WebsiteAnalysisRecord,
};

use crate::error::ProviderError;

/// A provider that can answer free-text venue searches.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Tag stamped on every record this provider produces.
    fn source(&self) -> SourceTag;

    /// Search for venues matching `params`.
    ///
    /// Shipped adapters always return `Ok`, substituting demo data on
    /// failure. `Err` is reserved for adapters that have nothing to return.
    async fn search(&self, params: &SearchParams) -> Result<Vec<LocationResult>, ProviderError>;

    /// Current health of the adapter.
    fn status(&self) -> ServiceStatus;
}

/// A provider that can return business details for one of its venues.
#[async_trait]
pub trait DetailProvider: Send + Sync {
    fn source(&self) -> SourceTag;

    /// Fetch the business record for a provider-scoped location id.
    async fn fetch_details(&self, location_id: &str) -> Result<BusinessDetailRecord, ProviderError>;
}

/// Online-presence analysis for a venue.
#[async_trait]
pub trait WebsiteAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        name: &str,
        address: &str,
    ) -> Result<WebsiteAnalysisRecord, ProviderError>;
}
