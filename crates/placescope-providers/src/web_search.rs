//! Web search adapter (Custom Search JSON API).
//!
//! The search API returns titles and snippets only, so names and addresses
//! are scraped from text and every result is placed at the center of the
//! detected city. The adapter implements [`LocationProvider`] only; it has no
//! business-detail endpoint.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use placescope_core::{Coordinates, KeyType, LocationResult, SearchParams, ServiceStatus, SourceTag};
use regex::Regex;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::ProviderError;
use crate::fallback;
use crate::provider::LocationProvider;

const PROVIDER: &str = "web_search";
const RESULTS_PER_PAGE: &str = "10";

/// Kazakh cities recognised in snippets, with their spellings and an
/// approximate city-center point.
const KNOWN_CITIES: &[(&[&str], Coordinates)] = &[
    (&["Алматы", "Almaty"], Coordinates::new(43.2220, 76.8512)),
    (
        &["Астана", "Astana", "Нур-Султан", "Nur-Sultan"],
        Coordinates::new(51.1694, 71.4491),
    ),
    (&["Шымкент", "Shymkent"], Coordinates::new(42.3417, 69.5901)),
    (
        &["Караганда", "Karaganda", "Qaraghandy"],
        Coordinates::new(49.8047, 73.1094),
    ),
    (&["Актобе", "Aktobe"], Coordinates::new(50.2839, 57.1670)),
    (&["Тараз", "Taraz"], Coordinates::new(42.9000, 71.3667)),
    (
        &["Павлодар", "Pavlodar"],
        Coordinates::new(52.2873, 76.9674),
    ),
    (
        &["Усть-Каменогорск", "Ust-Kamenogorsk", "Oskemen"],
        Coordinates::new(49.9483, 82.6279),
    ),
    (&["Семей", "Semey"], Coordinates::new(50.4111, 80.2275)),
    (&["Атырау", "Atyrau"], Coordinates::new(47.0945, 51.9238)),
    (
        &["Костанай", "Kostanay"],
        Coordinates::new(53.2198, 63.6354),
    ),
    (
        &["Кызылорда", "Kyzylorda"],
        Coordinates::new(44.8488, 65.4823),
    ),
    (&["Уральск", "Uralsk"], Coordinates::new(51.2333, 51.3667)),
    (
        &["Петропавловск", "Petropavl"],
        Coordinates::new(54.8728, 69.1430),
    ),
    (&["Актау", "Aktau"], Coordinates::new(43.6532, 51.1975)),
];

static STREET_NUMBER_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+[\s,]+[\w\s.-]*?(?:улица|проспект|переулок|бульвар|площадь)")
        .expect("valid regex")
});

static STREET_NAME_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?:улица|ул\.|проспект|пр\.|переулок|бульвар|площадь|мкр\.?)",
        r"\s*[\w\s.-]+?,?\s*\d+[\w/]*",
    ))
    .expect("valid regex")
});

static TITLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[-–—|]\s*").expect("valid regex"));

/// Settings for [`WebSearchClient`].
#[derive(Debug, Clone)]
pub struct WebSearchConfig {
    pub api_key: Option<String>,
    pub engine_id: Option<String>,
    pub base_url: String,
    pub city: String,
    pub region: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
}

/// Client for the web search provider.
pub struct WebSearchClient {
    client: Client,
    base_url: Url,
    credentials: Option<(String, String)>,
    city: String,
    region: String,
    timeout: Duration,
}

impl WebSearchClient {
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`ProviderError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(config: WebSearchConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .user_agent(config.user_agent.as_str())
            .build()?;

        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ProviderError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let credentials = match (config.api_key, config.engine_id) {
            (Some(key), Some(cx)) if !key.trim().is_empty() && !cx.trim().is_empty() => {
                Some((key, cx))
            }
            _ => None,
        };

        Ok(Self {
            client,
            base_url,
            credentials,
            city: config.city,
            region: config.region,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    async fn search_live(
        &self,
        key: &str,
        engine_id: &str,
        query: &str,
    ) -> Result<Vec<SearchItem>, ProviderError> {
        let q = format!("{query} restaurant {} {}", self.city, self.region);
        let mut url = self
            .base_url
            .join("customsearch/v1")
            .map_err(|e| ProviderError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("key", key)
            .append_pair("cx", engine_id)
            .append_pair("q", &q)
            .append_pair("num", RESULTS_PER_PAGE);

        let mut display_url = url.clone();
        display_url.set_query(None);

        let response = self.client.get(url).timeout(self.timeout).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                url: display_url.to_string(),
            });
        }

        let text = response.text().await?;
        let body: SearchResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::Deserialize {
                context: format!("web search(q={q})"),
                source: e,
            })?;
        Ok(body.items)
    }

    fn to_location(&self, index: usize, item: &SearchItem) -> LocationResult {
        let title = item.title.as_deref().unwrap_or_default();
        let snippet = item.snippet.as_deref().unwrap_or_default();

        let (city, coordinates) = detect_city(snippet)
            .or_else(|| detect_city(title))
            .map_or_else(
                || (self.region.clone(), self.home_center()),
                |(name, center)| (name.to_string(), center),
            );
        let address =
            extract_address(snippet).unwrap_or_else(|| format!("{}, {}", self.city, self.region));

        LocationResult::new(
            format!("web-search-{}", index + 1),
            extract_business_name(title),
            address,
            city,
            coordinates,
            SourceTag::WebSearch,
        )
    }

    /// Center of the configured city, falling back to the first known city.
    fn home_center(&self) -> Coordinates {
        detect_city(&self.city).map_or(KNOWN_CITIES[0].1, |(_, center)| center)
    }
}

#[async_trait]
impl LocationProvider for WebSearchClient {
    fn source(&self) -> SourceTag {
        SourceTag::WebSearch
    }

    async fn search(&self, params: &SearchParams) -> Result<Vec<LocationResult>, ProviderError> {
        let Some((key, engine_id)) = self.credentials.as_ref() else {
            tracing::warn!(
                provider = PROVIDER,
                "search credentials not configured; serving demo data"
            );
            return Ok(fallback::web_search_results());
        };

        match self.search_live(key, engine_id, &params.query).await {
            Ok(items) if items.is_empty() => {
                tracing::warn!(
                    provider = PROVIDER,
                    query = %params.query,
                    "no search items; serving demo data"
                );
                Ok(fallback::web_search_results())
            }
            Ok(items) => {
                tracing::debug!(
                    provider = PROVIDER,
                    count = items.len(),
                    "web search complete"
                );
                Ok(items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| self.to_location(index, item))
                    .collect())
            }
            Err(e) => {
                tracing::warn!(
                    provider = PROVIDER,
                    error = %e,
                    "web search failed; serving demo data"
                );
                Ok(fallback::web_search_results())
            }
        }
    }

    fn status(&self) -> ServiceStatus {
        if self.credentials.is_some() {
            ServiceStatus {
                working: true,
                key_type: KeyType::Search,
                message: "web search API key configured".to_string(),
            }
        } else {
            ServiceStatus {
                working: false,
                key_type: KeyType::None,
                message: "web search key or engine id missing; using demo data".to_string(),
            }
        }
    }
}

/// Business name from a result title: everything before the first dash or
/// pipe separator.
#[must_use]
pub fn extract_business_name(title: &str) -> String {
    let trimmed = title.trim();
    TITLE_SEPARATOR
        .split(trimmed)
        .map(str::trim)
        .find(|part| !part.is_empty())
        .unwrap_or(trimmed)
        .to_string()
}

/// First street-like fragment in a snippet.
#[must_use]
pub fn extract_address(snippet: &str) -> Option<String> {
    [&*STREET_NUMBER_FIRST, &*STREET_NAME_FIRST]
        .iter()
        .find_map(|re| re.find(snippet))
        .map(|m| m.as_str().trim().trim_end_matches(',').to_string())
        .filter(|s| !s.is_empty())
}

/// First known city mentioned in `text`, as spelled there.
#[must_use]
pub fn detect_city(text: &str) -> Option<(&'static str, Coordinates)> {
    let lowered = text.to_lowercase();
    KNOWN_CITIES.iter().find_map(|(spellings, center)| {
        spellings
            .iter()
            .find(|name| lowered.contains(&name.to_lowercase()))
            .map(|name| (*name, *center))
    })
}
