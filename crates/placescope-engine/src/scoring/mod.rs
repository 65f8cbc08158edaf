//! Rule-based visibility scoring.
//!
//! [`calculate_score`] grades three fixed categories from the evidence a
//! venue left on each platform, derives problems from the weak categories,
//! maps problems to ranked recommendations, and attaches the simulated
//! search-presence matrix. Scores keep their fractional increments; only the
//! overall percentage is rounded.

mod categories;
mod problems;
mod recommendations;

use placescope_core::{BusinessDetailRecord, WebsiteAnalysisRecord};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::presence::{simulate_presence, SearchPresence};

pub use categories::{local_listings, search_results, website_experience};
pub use problems::{generate_problems, MAX_PROBLEMS};
pub use recommendations::{generate_recommendations, MAX_RECOMMENDATIONS};

/// Four-level status shared by categories and the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Grade {
    /// Tier for a 0–100 percentage: 85 / 70 / 50 thresholds.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 85.0 {
            Grade::Excellent
        } else if percentage >= 70.0 {
            Grade::Good
        } else if percentage >= 50.0 {
            Grade::Fair
        } else {
            Grade::Poor
        }
    }

    /// Problems are only generated for fair or poor categories.
    #[must_use]
    pub fn needs_attention(self) -> bool {
        matches!(self, Grade::Fair | Grade::Poor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    SearchResults,
    WebsiteExperience,
    LocalListings,
}

impl CategoryId {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            CategoryId::SearchResults => "Search Results",
            CategoryId::WebsiteExperience => "Website Experience",
            CategoryId::LocalListings => "Local Listings",
        }
    }

    #[must_use]
    pub fn max_score(self) -> f64 {
        match self {
            CategoryId::SearchResults => 30.0,
            CategoryId::WebsiteExperience => 40.0,
            CategoryId::LocalListings => 20.0,
        }
    }

    fn description(self) -> &'static str {
        match self {
            CategoryId::SearchResults => {
                "How visible the venue is on map platforms and in local search"
            }
            CategoryId::WebsiteExperience => {
                "Website presence, online ordering, delivery and social channels"
            }
            CategoryId::LocalListings => {
                "Completeness of listing profiles and the quality of reviews"
            }
        }
    }
}

/// One graded scoring dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCategory {
    pub id: CategoryId,
    pub name: String,
    pub score: f64,
    pub max_score: f64,
    pub status: Grade,
    pub description: String,
}

impl ScoreCategory {
    /// Build a category, clamping `score` into `[0, max]`.
    #[must_use]
    pub fn new(id: CategoryId, score: f64) -> Self {
        let max_score = id.max_score();
        let score = score.clamp(0.0, max_score);
        Self {
            id,
            name: id.title().to_string(),
            score,
            max_score,
            status: Grade::from_percentage(score / max_score * 100.0),
            description: id.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub category: CategoryId,
    pub impact: String,
    pub solution: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Visibility,
    Branding,
    Technical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Lower is more urgent.
    pub priority: u8,
    pub revenue_impact: String,
    pub category: RecommendationCategory,
}

/// What one platform knows about the venue. `record: None` means the venue
/// was not found there, which is itself a signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformEvidence {
    pub platform: String,
    pub record: Option<BusinessDetailRecord>,
}

impl PlatformEvidence {
    #[must_use]
    pub fn found(platform: impl Into<String>, record: BusinessDetailRecord) -> Self {
        Self {
            platform: platform.into(),
            record: Some(record),
        }
    }

    #[must_use]
    pub fn missing(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            record: None,
        }
    }
}

/// Evidence bundle for one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// The platform weighted highest in search results.
    pub primary: PlatformEvidence,
    pub secondary: PlatformEvidence,
    pub website: Option<WebsiteAnalysisRecord>,
}

impl AnalysisInput {
    #[must_use]
    pub fn platforms(&self) -> [&PlatformEvidence; 2] {
        [&self.primary, &self.secondary]
    }

    /// Present provider records, primary first.
    pub fn records(&self) -> impl Iterator<Item = &BusinessDetailRecord> {
        self.platforms()
            .into_iter()
            .filter_map(|p| p.record.as_ref())
    }

    /// The website analysis, only when a site was actually found.
    #[must_use]
    pub fn found_website(&self) -> Option<&WebsiteAnalysisRecord> {
        self.website.as_ref().filter(|w| w.has_website)
    }

    /// Mean rating over present records; a record without a rating counts
    /// as 0. `None` when no record is present.
    #[must_use]
    pub fn mean_rating(&self) -> Option<f64> {
        let ratings: Vec<f64> = self.records().map(|r| r.rating.unwrap_or(0.0)).collect();
        if ratings.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)] // at most two ratings
        let count = ratings.len() as f64;
        Some(ratings.iter().sum::<f64>() / count)
    }

    #[must_use]
    pub fn total_reviews(&self) -> u64 {
        self.records()
            .filter_map(|r| r.review_count)
            .map(u64::from)
            .sum()
    }
}

/// Full output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 0–100.
    pub total_score: u8,
    pub overall_grade: Grade,
    /// Always Search Results, Website Experience, Local Listings, in that order.
    pub categories: Vec<ScoreCategory>,
    /// Simulated, illustrative only. Not measured search ranks.
    pub search_presence: Vec<SearchPresence>,
    pub problems: Vec<Problem>,
    pub recommendations: Vec<Recommendation>,
    pub evidence: AnalysisInput,
}

/// Score a venue.
///
/// Everything except `search_presence` is a pure function of `input`;
/// the presence matrix draws its simulated rankings from `rng`.
pub fn calculate_score<R: Rng + ?Sized>(input: AnalysisInput, rng: &mut R) -> AnalysisResult {
    let categories = vec![
        search_results(&input),
        website_experience(&input),
        local_listings(&input),
    ];

    let total_score = overall_score(&categories);
    let overall_grade = Grade::from_percentage(f64::from(total_score));
    let problems = generate_problems(&input, &categories);
    let recommendations = generate_recommendations(&problems, input.mean_rating());
    let search_presence = simulate_presence(&input, rng);

    tracing::debug!(
        total_score,
        problems = problems.len(),
        recommendations = recommendations.len(),
        "analysis scored"
    );

    AnalysisResult {
        total_score,
        overall_grade,
        categories,
        search_presence,
        problems,
        recommendations,
        evidence: input,
    }
}

/// `round(sum(scores) / sum(maxima) * 100)`.
// The percentage is clamped to 0..=100 before the cast.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn overall_score(categories: &[ScoreCategory]) -> u8 {
    let score: f64 = categories.iter().map(|c| c.score).sum();
    let max: f64 = categories.iter().map(|c| c.max_score).sum();
    if max <= 0.0 {
        return 0;
    }
    (score / max * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
#[path = "scoring_test.rs"]
mod tests;
