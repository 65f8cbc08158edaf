//! Canonical location records produced by provider adapters.

use serde::{Deserialize, Serialize};

/// A WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Which provider produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTag {
    /// Web search engine results (name/address scraped from titles and snippets).
    WebSearch,
    /// Business directory catalog with rubrics, contacts and geometry.
    Catalog,
}

impl SourceTag {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SourceTag::WebSearch => "web_search",
            SourceTag::Catalog => "catalog",
        }
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of venue kinds inferred from provider categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Restaurant,
    Cafe,
    Fastfood,
    Bar,
    Bakery,
    Other,
}

/// A venue as returned by a provider search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    /// Provider-scoped identifier.
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub source: SourceTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<BusinessType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Raw provider category names, when the provider exposes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl LocationResult {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        coordinates: Coordinates,
        source: SourceTag,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            city: city.into(),
            coordinates,
            source,
            business_type: None,
            cuisine: None,
            categories: None,
        }
    }
}

/// Parameters for a single provider search call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub query: String,
    /// Optional search center; providers treat it as a hint.
    pub center: Option<Coordinates>,
    /// Advisory radius in meters. Callers needing a hard bound must filter
    /// results themselves.
    pub radius_meters: Option<f64>,
}

impl SearchParams {
    /// Free-text search with no geographic hint.
    #[must_use]
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            center: None,
            radius_meters: None,
        }
    }

    /// Search centered on a point with an advisory radius.
    #[must_use]
    pub fn near(query: impl Into<String>, center: Coordinates, radius_meters: f64) -> Self {
        Self {
            query: query.into(),
            center: Some(center),
            radius_meters: Some(radius_meters),
        }
    }
}
