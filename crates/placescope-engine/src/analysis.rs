//! End-to-end analysis of one selected venue.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use placescope_core::{BusinessDetailRecord, DetailRole, LocationResult, WebsiteAnalysisRecord};
use placescope_providers::{DetailProvider, ProviderError, WebsiteAnalyzer};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::competitors::CompetitorFinder;
use crate::scoring::{calculate_score, AnalysisInput, AnalysisResult, PlatformEvidence};

struct DetailSource {
    platform: String,
    provider: Arc<dyn DetailProvider>,
}

/// Gathers evidence for a venue and scores it.
///
/// Each detail provider is bound to the primary or secondary scoring role.
/// A role with no provider is always scored as "not found on that platform".
pub struct Analyzer {
    primary: Option<DetailSource>,
    secondary: Option<DetailSource>,
    primary_platform: String,
    secondary_platform: String,
    website: Arc<dyn WebsiteAnalyzer>,
    call_timeout: Duration,
}

/// Analysis together with the venue's nearby competitors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisBundle {
    pub analysis: AnalysisResult,
    pub competitors: Vec<LocationResult>,
}

impl Analyzer {
    /// `primary_platform` / `secondary_platform` name the two scoring roles
    /// even when no provider is attached to them.
    #[must_use]
    pub fn new(
        primary_platform: impl Into<String>,
        secondary_platform: impl Into<String>,
        website: Arc<dyn WebsiteAnalyzer>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            primary: None,
            secondary: None,
            primary_platform: primary_platform.into(),
            secondary_platform: secondary_platform.into(),
            website,
            call_timeout,
        }
    }

    /// Attach a detail provider to a scoring role, replacing any previous one.
    #[must_use]
    pub fn with_detail_provider(
        mut self,
        role: DetailRole,
        provider: Arc<dyn DetailProvider>,
    ) -> Self {
        let platform = match role {
            DetailRole::Primary => self.primary_platform.clone(),
            DetailRole::Secondary => self.secondary_platform.clone(),
        };
        let source = Some(DetailSource { platform, provider });
        match role {
            DetailRole::Primary => self.primary = source,
            DetailRole::Secondary => self.secondary = source,
        }
        self
    }

    /// Fetch both detail records and the website analysis concurrently, then
    /// score. Every fetch settles independently; a failed or timed-out fetch
    /// becomes absent evidence.
    pub async fn analyze<R: Rng + ?Sized>(
        &self,
        location: &LocationResult,
        rng: &mut R,
    ) -> AnalysisResult {
        let input = self.gather(location).await;
        score(location, input, rng)
    }

    /// [`Analyzer::analyze`] and competitor discovery, run concurrently.
    pub async fn analyze_with_competitors<R: Rng + ?Sized>(
        &self,
        location: &LocationResult,
        finder: &CompetitorFinder,
        radius_meters: f64,
        rng: &mut R,
    ) -> AnalysisBundle {
        let (input, competitors) = tokio::join!(
            self.gather(location),
            finder.search_competitors(location, radius_meters),
        );
        tracing::debug!(
            location = %location.name,
            competitors = competitors.len(),
            "competitor discovery complete"
        );
        AnalysisBundle {
            analysis: score(location, input, rng),
            competitors,
        }
    }

    async fn gather(&self, location: &LocationResult) -> AnalysisInput {
        let (primary, secondary, website) = tokio::join!(
            self.fetch_role(self.primary.as_ref(), &location.id),
            self.fetch_role(self.secondary.as_ref(), &location.id),
            self.fetch_website(location),
        );

        AnalysisInput {
            primary: PlatformEvidence {
                platform: self.primary_platform.clone(),
                record: primary,
            },
            secondary: PlatformEvidence {
                platform: self.secondary_platform.clone(),
                record: secondary,
            },
            website,
        }
    }

    async fn fetch_role(
        &self,
        source: Option<&DetailSource>,
        location_id: &str,
    ) -> Option<BusinessDetailRecord> {
        let source = source?;
        let outcome = with_timeout(
            &source.platform,
            self.call_timeout,
            source.provider.fetch_details(location_id),
        )
        .await;
        match outcome {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(
                    platform = %source.platform,
                    location_id,
                    error = %e,
                    "detail fetch failed; scoring as not found"
                );
                None
            }
        }
    }

    async fn fetch_website(&self, location: &LocationResult) -> Option<WebsiteAnalysisRecord> {
        let outcome = with_timeout(
            "website",
            self.call_timeout,
            self.website.analyze(&location.name, &location.address),
        )
        .await;
        match outcome {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(location = %location.name, error = %e, "website analysis failed");
                None
            }
        }
    }
}

async fn with_timeout<T>(
    provider: &str,
    limit: Duration,
    call: impl Future<Output = Result<T, ProviderError>>,
) -> Result<T, ProviderError> {
    tokio::time::timeout(limit, call)
        .await
        .unwrap_or_else(|_| {
            Err(ProviderError::Timeout {
                provider: provider.to_string(),
                secs: limit.as_secs(),
            })
        })
}

fn score<R: Rng + ?Sized>(
    location: &LocationResult,
    input: AnalysisInput,
    rng: &mut R,
) -> AnalysisResult {
    let result = calculate_score(input, rng);
    tracing::info!(
        location = %location.name,
        total_score = result.total_score,
        grade = ?result.overall_grade,
        "analysis complete"
    );
    result
}

#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;
