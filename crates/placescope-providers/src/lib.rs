//! Provider adapters for placescope.
//!
//! Each adapter normalizes one external map/search provider into the
//! canonical records from [`placescope_core`]. Adapters never surface
//! provider-side failures to their callers: HTTP errors, rejected keys,
//! timeouts and malformed payloads are logged and answered with fixed,
//! clearly-labelled demo data from [`fallback`].

pub mod catalog;
pub mod error;
pub mod fallback;
pub mod provider;
pub mod relay;
pub mod web_search;
pub mod website;

pub use catalog::{classify_categories, CatalogClient, CatalogConfig};
pub use error::{ProviderError, RelayError};
pub use provider::{DetailProvider, LocationProvider, WebsiteAnalyzer};
pub use relay::RelayClient;
pub use web_search::{WebSearchClient, WebSearchConfig};
pub use website::SimulatedWebsiteAnalyzer;
