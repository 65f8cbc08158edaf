//! Fan-out search across every configured location provider.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use placescope_core::{LocationResult, SearchParams, ServiceStatus, SourceTag};
use placescope_providers::{LocationProvider, ProviderError};

use crate::dedup::dedup_locations;
use crate::error::EngineError;
use crate::status::{summarize_status, StatusSummary};

/// Upper bound on results returned by [`LocationAggregator::search_locations`].
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Queries all providers concurrently and merges their answers.
///
/// Providers are kept in priority order: merged results list the first
/// provider's records first, so on a dedup collision its record wins.
pub struct LocationAggregator {
    providers: Vec<Arc<dyn LocationProvider>>,
    call_timeout: Duration,
}

impl LocationAggregator {
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn LocationProvider>>, call_timeout: Duration) -> Self {
        Self {
            providers,
            call_timeout,
        }
    }

    /// Free-text search across all providers.
    ///
    /// Every provider call runs to completion or failure independently; one
    /// slow or broken provider never cancels the others. Individual failures
    /// are logged. Results are concatenated in provider order, deduplicated
    /// and truncated to [`MAX_SEARCH_RESULTS`].
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoProviders`] if the aggregator was built empty.
    /// - [`EngineError::AllProvidersFailed`] if every provider call failed.
    ///   Providers that succeed with zero results are not failures.
    pub async fn search_locations(&self, query: &str) -> Result<Vec<LocationResult>, EngineError> {
        let params = SearchParams::text(query);
        let mut merged = self.search_all(&params).await?;
        merged.truncate(MAX_SEARCH_RESULTS);

        tracing::info!(query, count = merged.len(), "location search complete");
        Ok(merged)
    }

    /// Health snapshot of each provider, in priority order.
    #[must_use]
    pub fn statuses(&self) -> Vec<(SourceTag, ServiceStatus)> {
        self.providers
            .iter()
            .map(|p| (p.source(), p.status()))
            .collect()
    }

    /// [`summarize_status`] over [`Self::statuses`].
    #[must_use]
    pub fn status_summary(&self) -> StatusSummary {
        let statuses: Vec<(&str, ServiceStatus)> = self
            .statuses()
            .into_iter()
            .map(|(source, status)| (source.as_str(), status))
            .collect();
        summarize_status(&statuses)
    }

    async fn search_all(&self, params: &SearchParams) -> Result<Vec<LocationResult>, EngineError> {
        if self.providers.is_empty() {
            return Err(EngineError::NoProviders);
        }

        let calls = self
            .providers
            .iter()
            .map(|provider| search_with_timeout(provider.as_ref(), params, self.call_timeout));
        let outcomes = join_all(calls).await;

        let mut merged = Vec::new();
        let mut failures = Vec::new();
        for (provider, outcome) in self.providers.iter().zip(outcomes) {
            match outcome {
                Ok(results) => {
                    tracing::debug!(
                        provider = %provider.source(),
                        count = results.len(),
                        "provider search returned"
                    );
                    merged.extend(results);
                }
                Err(e) => {
                    tracing::warn!(
                        provider = %provider.source(),
                        query = %params.query,
                        error = %e,
                        "provider search failed"
                    );
                    failures.push(format!("{}: {e}", provider.source()));
                }
            }
        }

        if failures.len() == self.providers.len() {
            return Err(EngineError::AllProvidersFailed {
                attempted: self.providers.len(),
                message: failures.join("; "),
            });
        }

        Ok(dedup_locations(merged))
    }
}

/// One provider search bounded by `limit`; a timeout counts as a failure.
pub(crate) async fn search_with_timeout(
    provider: &dyn LocationProvider,
    params: &SearchParams,
    limit: Duration,
) -> Result<Vec<LocationResult>, ProviderError> {
    match tokio::time::timeout(limit, provider.search(params)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(ProviderError::Timeout {
            provider: provider.source().to_string(),
            secs: limit.as_secs(),
        }),
    }
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;
