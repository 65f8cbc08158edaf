//! Business-directory catalog adapter (2GIS-style `/3.0/items` API).
//!
//! Implements both [`LocationProvider`] and [`DetailProvider`]. Any failure
//! is logged with a category and answered with [`fallback`] data. A 403 from
//! the catalog means the key only grants map-tile access; that trips a
//! one-way breaker so later calls in the process skip the network entirely.
//!
//! [`fallback`]: crate::fallback

mod classify;
mod response;

pub use classify::classify_categories;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use placescope_core::{
    BusinessDetailRecord, KeyType, LocationResult, SearchParams, ServiceStatus, SourceTag,
};
use reqwest::{Client, Url};

use crate::error::ProviderError;
use crate::fallback;
use crate::provider::{DetailProvider, LocationProvider};

use self::response::{Envelope, Item};

const PROVIDER: &str = "catalog";
const SEARCH_PAGE_SIZE: &str = "10";
const SEARCH_FIELDS: &str = "items.point,items.address,items.rubrics,items.full_address_name";
const DETAIL_FIELDS: &str = "items.point,items.address,items.rubrics,items.full_address_name,\
items.contact_groups,items.schedule,items.reviews,items.photos,items.external_content,\
items.name_ex,items.delivery,items.order_with_cart";

/// Settings for [`CatalogClient`].
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// `None` puts the adapter in permanent fallback mode.
    pub api_key: Option<String>,
    pub base_url: String,
    pub locale: String,
    /// City prepended to free-text queries that carry no center point.
    pub default_city: String,
    /// Used as the city when an item has none.
    pub region: String,
    pub search_timeout_secs: u64,
    pub details_timeout_secs: u64,
    pub user_agent: String,
}

/// Client for the catalog REST API.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    locale: String,
    default_city: String,
    region: String,
    search_timeout: Duration,
    details_timeout: Duration,
    /// Set once the catalog rejects the key with 403. Never reset.
    map_only: AtomicBool,
}

impl CatalogClient {
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`ProviderError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(config: CatalogConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .user_agent(config.user_agent.as_str())
            .build()?;

        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ProviderError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.filter(|k| !k.trim().is_empty()),
            locale: config.locale,
            default_city: config.default_city,
            region: config.region,
            search_timeout: Duration::from_secs(config.search_timeout_secs),
            details_timeout: Duration::from_secs(config.details_timeout_secs),
            map_only: AtomicBool::new(false),
        })
    }

    /// Whether the breaker has tripped.
    #[must_use]
    pub fn is_map_only(&self) -> bool {
        self.map_only.load(Ordering::Relaxed)
    }

    /// The key to use for a live call, or `None` when the adapter must
    /// serve fallback data without touching the network.
    fn usable_key(&self, operation: &str) -> Option<&str> {
        let Some(key) = self.api_key.as_deref() else {
            tracing::warn!(
                provider = PROVIDER,
                operation,
                "no API key configured; serving demo data"
            );
            return None;
        };
        if self.is_map_only() {
            tracing::debug!(
                provider = PROVIDER,
                operation,
                "key is map-only; serving demo data"
            );
            return None;
        }
        Some(key)
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ProviderError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ProviderError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    async fn request_items(
        &self,
        url: Url,
        timeout: Duration,
        context: &str,
    ) -> Result<Vec<Item>, ProviderError> {
        let display_url = redact_key(&url);
        let response = self.client.get(url).timeout(timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                url: display_url,
            });
        }

        let text = response.text().await?;
        let envelope: Envelope =
            serde_json::from_str(&text).map_err(|e| ProviderError::Deserialize {
                context: context.to_string(),
                source: e,
            })?;

        match envelope.meta.and_then(|m| m.code) {
            // "Nothing found" is an empty result, not a failure.
            Some(404) => return Ok(Vec::new()),
            Some(code) if code >= 400 => {
                return Err(ProviderError::HttpStatus {
                    status: code,
                    url: display_url,
                })
            }
            _ => {}
        }

        Ok(envelope.result.unwrap_or_default().items)
    }

    async fn search_live(
        &self,
        key: &str,
        params: &SearchParams,
    ) -> Result<Vec<LocationResult>, ProviderError> {
        let query = if params.center.is_some() {
            params.query.clone()
        } else {
            format!("{} {}", self.default_city, params.query)
        };
        let point;
        let radius;
        let mut pairs = vec![
            ("key", key),
            ("q", query.as_str()),
            ("type", "branch"),
            ("fields", SEARCH_FIELDS),
            ("page_size", SEARCH_PAGE_SIZE),
            ("locale", self.locale.as_str()),
        ];
        if let Some(center) = params.center {
            point = format!("{},{}", center.lng, center.lat);
            pairs.push(("point", &point));
            radius = format!("{:.0}", params.radius_meters.unwrap_or(500.0).max(1.0));
            pairs.push(("radius", &radius));
        }

        let url = self.endpoint("3.0/items", &pairs)?;
        let items = self
            .request_items(
                url,
                self.search_timeout,
                &format!("catalog search(q={query})"),
            )
            .await?;

        if items.is_empty() {
            tracing::warn!(
                provider = PROVIDER,
                query = %params.query,
                "catalog returned no items"
            );
        }
        tracing::debug!(
            provider = PROVIDER,
            count = items.len(),
            "catalog search complete"
        );

        Ok(items
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_location(index, &self.region))
            .collect())
    }

    async fn details_live(
        &self,
        key: &str,
        location_id: &str,
    ) -> Result<BusinessDetailRecord, ProviderError> {
        let url = self.endpoint(
            "3.0/items/byid",
            &[
                ("key", key),
                ("id", location_id),
                ("fields", DETAIL_FIELDS),
                ("locale", self.locale.as_str()),
            ],
        )?;
        let items = self
            .request_items(
                url,
                self.details_timeout,
                &format!("catalog byid(id={location_id})"),
            )
            .await?;

        items
            .into_iter()
            .next()
            .map(Item::into_details)
            .ok_or_else(|| ProviderError::NotFound(location_id.to_string()))
    }

    /// Log a failure under its category and trip the breaker on 403.
    fn record_failure(&self, operation: &str, err: &ProviderError) {
        match err {
            ProviderError::HttpStatus { status: 403, .. } => {
                self.map_only.store(true, Ordering::Relaxed);
                tracing::warn!(
                    provider = PROVIDER,
                    operation,
                    status = 403,
                    "catalog key rejected; key grants map-tile access only, switching to demo data"
                );
            }
            ProviderError::HttpStatus { status: 400, .. } => {
                tracing::warn!(
                    provider = PROVIDER,
                    operation,
                    status = 400,
                    "catalog rejected request parameters"
                );
            }
            ProviderError::HttpStatus { status: 401, .. } => {
                tracing::warn!(
                    provider = PROVIDER,
                    operation,
                    status = 401,
                    "catalog key unauthorized"
                );
            }
            ProviderError::HttpStatus { status: 429, .. } => {
                tracing::warn!(
                    provider = PROVIDER,
                    operation,
                    status = 429,
                    "catalog rate limit exceeded"
                );
            }
            ProviderError::HttpStatus { status, url } => {
                tracing::warn!(
                    provider = PROVIDER,
                    operation,
                    status,
                    url = %url,
                    "unexpected catalog status"
                );
            }
            ProviderError::Http(e) if e.is_timeout() => {
                tracing::warn!(
                    provider = PROVIDER,
                    operation,
                    error = %e,
                    "catalog request timed out"
                );
            }
            ProviderError::Deserialize { context, source } => {
                tracing::warn!(
                    provider = PROVIDER,
                    operation,
                    context = %context,
                    error = %source,
                    "malformed catalog payload"
                );
            }
            ProviderError::NotFound(id) => {
                tracing::warn!(
                    provider = PROVIDER,
                    operation,
                    id = %id,
                    "catalog has no such place"
                );
            }
            other => {
                tracing::warn!(
                    provider = PROVIDER,
                    operation,
                    error = %other,
                    "catalog request failed"
                );
            }
        }
    }
}

#[async_trait]
impl LocationProvider for CatalogClient {
    fn source(&self) -> SourceTag {
        SourceTag::Catalog
    }

    async fn search(&self, params: &SearchParams) -> Result<Vec<LocationResult>, ProviderError> {
        let Some(key) = self.usable_key("search") else {
            return Ok(fallback::catalog_search_results(&params.query));
        };
        match self.search_live(key, params).await {
            Ok(results) => Ok(results),
            Err(e) => {
                self.record_failure("search", &e);
                Ok(fallback::catalog_search_results(&params.query))
            }
        }
    }

    fn status(&self) -> ServiceStatus {
        if self.api_key.is_none() {
            ServiceStatus {
                working: false,
                key_type: KeyType::None,
                message: "no API key configured; using demo data".to_string(),
            }
        } else if self.is_map_only() {
            ServiceStatus {
                working: false,
                key_type: KeyType::MapOnly,
                message: "key only grants map-tile access; using demo data".to_string(),
            }
        } else {
            ServiceStatus {
                working: true,
                key_type: KeyType::Catalog,
                message: "catalog API key configured".to_string(),
            }
        }
    }
}

#[async_trait]
impl DetailProvider for CatalogClient {
    fn source(&self) -> SourceTag {
        SourceTag::Catalog
    }

    async fn fetch_details(
        &self,
        location_id: &str,
    ) -> Result<BusinessDetailRecord, ProviderError> {
        let Some(key) = self.usable_key("details") else {
            return Ok(fallback::catalog_details());
        };
        match self.details_live(key, location_id).await {
            Ok(record) => Ok(record),
            Err(e) => {
                self.record_failure("details", &e);
                Ok(fallback::catalog_details())
            }
        }
    }
}

/// Drop the API key from a URL before it lands in logs or errors.
fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    redacted.set_query(None);
    redacted.to_string()
}
