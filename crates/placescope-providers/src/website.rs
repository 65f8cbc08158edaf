//! Simulated online-presence analysis.
//!
//! There is no crawler behind this analyzer: it produces illustrative values
//! from an injected random source, the same way the search-presence matrix
//! is simulated. Seed it for deterministic output.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use placescope_core::{SocialLinks, WebsiteAnalysisRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ProviderError;
use crate::provider::WebsiteAnalyzer;

const FOUND_PROBABILITY: f64 = 0.7;
const ONLINE_ORDERING_PROBABILITY: f64 = 0.5;
const DELIVERY_PROBABILITY: f64 = 0.7;

/// [`WebsiteAnalyzer`] returning synthetic results.
pub struct SimulatedWebsiteAnalyzer {
    rng: Mutex<StdRng>,
}

impl SimulatedWebsiteAnalyzer {
    /// Analyzer seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn simulate(&self, name: &str) -> WebsiteAnalysisRecord {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        if !rng.random_bool(FOUND_PROBABILITY) {
            return WebsiteAnalysisRecord::not_found();
        }

        let slug = slugify(name);
        WebsiteAnalysisRecord {
            has_website: true,
            title: Some(format!("{} - official website", name.trim())),
            description: Some(format!("Menu, opening hours and contacts for {}", name.trim())),
            social_links: Some(SocialLinks {
                instagram: Some(format!("https://instagram.com/{}", slug.replace('-', "_"))),
                facebook: Some(format!("https://facebook.com/{slug}")),
                vk: None,
            }),
            has_online_ordering: Some(rng.random_bool(ONLINE_ORDERING_PROBABILITY)),
            has_delivery: Some(rng.random_bool(DELIVERY_PROBABILITY)),
            seo_score: Some(rng.random_range(60..=99)),
        }
    }
}

impl Default for SimulatedWebsiteAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebsiteAnalyzer for SimulatedWebsiteAnalyzer {
    async fn analyze(
        &self,
        name: &str,
        address: &str,
    ) -> Result<WebsiteAnalysisRecord, ProviderError> {
        let record = self.simulate(name);
        tracing::debug!(
            name,
            address,
            has_website = record.has_website,
            "simulated website analysis"
        );
        Ok(record)
    }
}

/// Lowercase, drop punctuation, join words with `-`.
fn slugify(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "venue".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_drops_punctuation() {
        assert_eq!(slugify("Cafe \"Navat\" & Co."), "cafe-navat-co");
        assert_eq!(slugify("!!!"), "venue");
    }

    #[tokio::test]
    async fn same_seed_same_result() {
        let a = SimulatedWebsiteAnalyzer::with_seed(7);
        let b = SimulatedWebsiteAnalyzer::with_seed(7);
        for _ in 0..5 {
            assert_eq!(
                a.analyze("Navat", "Almaty").await.expect("never fails"),
                b.analyze("Navat", "Almaty").await.expect("never fails"),
            );
        }
    }

    #[tokio::test]
    async fn found_sites_have_bounded_seo_and_social_links() {
        let analyzer = SimulatedWebsiteAnalyzer::with_seed(42);
        let mut found = 0;
        for _ in 0..50 {
            let record = analyzer
                .analyze("Navat", "Almaty")
                .await
                .expect("never fails");
            if record.has_website {
                found += 1;
                let seo = record.seo_score.expect("seo score");
                assert!((60..=99).contains(&seo));
                assert!(record.social_links.is_some());
                assert!(record.has_online_ordering.is_some());
            } else {
                assert_eq!(record, WebsiteAnalysisRecord::not_found());
            }
        }
        assert!(found > 0);
    }
}
