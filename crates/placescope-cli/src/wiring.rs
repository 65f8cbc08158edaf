//! Builds provider adapters and engine components from [`AppConfig`].

use std::sync::Arc;
use std::time::Duration;

use placescope_core::{AppConfig, DetailRole, SourceTag};
use placescope_engine::{Analyzer, CompetitorFinder, LocationAggregator};
use placescope_providers::{
    CatalogClient, CatalogConfig, LocationProvider, SimulatedWebsiteAnalyzer, WebSearchClient,
    WebSearchConfig,
};

pub(crate) struct Clients {
    pub(crate) catalog: Arc<CatalogClient>,
    pub(crate) web_search: Arc<WebSearchClient>,
}

impl Clients {
    pub(crate) fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let catalog = CatalogClient::new(CatalogConfig {
            api_key: config.catalog_api_key.clone(),
            base_url: config.catalog_base_url.clone(),
            locale: config.catalog_locale.clone(),
            default_city: config.default_city.clone(),
            region: config.region.clone(),
            search_timeout_secs: config.search_timeout_secs,
            details_timeout_secs: config.details_timeout_secs,
            user_agent: config.user_agent.clone(),
        })?;
        let web_search = WebSearchClient::new(WebSearchConfig {
            api_key: config.search_api_key.clone(),
            engine_id: config.search_engine_id.clone(),
            base_url: config.search_base_url.clone(),
            city: config.default_city.clone(),
            region: config.region.clone(),
            timeout_secs: config.search_timeout_secs,
            user_agent: config.user_agent.clone(),
        })?;

        Ok(Self {
            catalog: Arc::new(catalog),
            web_search: Arc::new(web_search),
        })
    }

    /// Web search first, then the catalog: on a dedup collision the web
    /// search record is kept.
    pub(crate) fn aggregator(&self, config: &AppConfig) -> LocationAggregator {
        let providers: Vec<Arc<dyn LocationProvider>> =
            vec![self.web_search.clone(), self.catalog.clone()];
        LocationAggregator::new(providers, call_timeout(config.search_timeout_secs))
    }

    /// Competitor discovery runs against the catalog, the only provider that
    /// honours a search center.
    pub(crate) fn competitor_finder(&self, config: &AppConfig) -> CompetitorFinder {
        CompetitorFinder::new(
            self.catalog.clone(),
            call_timeout(config.search_timeout_secs),
        )
    }

    /// The catalog supplies details for its configured role; the other role
    /// is named after the web search platform, which has no detail endpoint.
    pub(crate) fn analyzer(&self, config: &AppConfig, website_seed: Option<u64>) -> Analyzer {
        let (primary, secondary) = match config.detail_role {
            DetailRole::Primary => (SourceTag::Catalog, SourceTag::WebSearch),
            DetailRole::Secondary => (SourceTag::WebSearch, SourceTag::Catalog),
        };
        let website = Arc::new(website_seed.map_or_else(
            SimulatedWebsiteAnalyzer::new,
            SimulatedWebsiteAnalyzer::with_seed,
        ));

        Analyzer::new(
            primary.as_str(),
            secondary.as_str(),
            website,
            call_timeout(config.details_timeout_secs),
        )
        .with_detail_provider(config.detail_role, self.catalog.clone())
    }
}

/// Outer bound for one adapter call: the adapter's own HTTP timeout plus
/// one second of slack for connection setup.
fn call_timeout(secs: u64) -> Duration {
    Duration::from_secs(secs.saturating_add(1))
}
