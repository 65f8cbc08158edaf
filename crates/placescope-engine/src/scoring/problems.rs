//! Problem generation from weak categories.

use super::{AnalysisInput, CategoryId, Problem, ScoreCategory, Severity};

pub const MAX_PROBLEMS: usize = 12;

/// Problems for every category graded fair or poor.
///
/// Checks run in a fixed order: search-result gaps, then website gaps, then
/// listing completeness. A category graded good or excellent contributes
/// nothing even if one of its checks would fire.
#[must_use]
pub fn generate_problems(input: &AnalysisInput, categories: &[ScoreCategory]) -> Vec<Problem> {
    let needs_attention = |id: CategoryId| {
        categories
            .iter()
            .any(|c| c.id == id && c.status.needs_attention())
    };

    let mut problems = Vec::new();

    if needs_attention(CategoryId::SearchResults) {
        if input.primary.record.is_none() {
            problems.push(problem(
                "no-primary-provider",
                format!("Not found on {}", input.primary.platform),
                format!(
                    "The venue has no listing on {}, where most guests look for places nearby.",
                    input.primary.platform
                ),
                Severity::Critical,
                CategoryId::SearchResults,
                "Guests searching nearby never see the venue; most walk-in discovery is lost.",
                format!(
                    "Claim or create the business listing on {}.",
                    input.primary.platform
                ),
            ));
        }
        if input.secondary.record.is_none() {
            problems.push(problem(
                "no-secondary-provider",
                format!("Not found on {}", input.secondary.platform),
                format!("The venue has no listing on {}.", input.secondary.platform),
                Severity::High,
                CategoryId::SearchResults,
                "Guests who navigate with this platform cannot find or route to the venue.",
                format!(
                    "Add the venue to {} with its address and contacts.",
                    input.secondary.platform
                ),
            ));
        }
    }

    if needs_attention(CategoryId::WebsiteExperience) {
        let website = input.found_website();
        if website.is_none() {
            problems.push(problem(
                "no-website",
                "No website",
                "No website could be found for the venue.".to_string(),
                Severity::High,
                CategoryId::WebsiteExperience,
                "Guests cannot check the menu, prices or opening hours before visiting.",
                "Launch a simple mobile-friendly site with menu, hours and contacts.".to_string(),
            ));
        }
        if website.and_then(|w| w.has_online_ordering) != Some(true) {
            problems.push(problem(
                "no-online-ordering",
                "No online ordering",
                "Guests cannot place an order online.".to_string(),
                Severity::Medium,
                CategoryId::WebsiteExperience,
                "Orders go to competitors that accept them online.",
                "Add online ordering to the website or join a delivery platform.".to_string(),
            ));
        }
    }

    if needs_attention(CategoryId::LocalListings) {
        let incomplete = input.records().filter(|r| !r.is_complete()).count();
        if incomplete > 0 {
            problems.push(problem(
                "incomplete-profiles",
                "Incomplete listing profiles",
                format!("{incomplete} listing profile(s) lack a phone, website, photos or hours."),
                Severity::Medium,
                CategoryId::LocalListings,
                "Incomplete profiles rank lower and convert fewer viewers into visitors.",
                "Fill in phone, website, photos and opening hours on every listing.".to_string(),
            ));
        }
    }

    problems.truncate(MAX_PROBLEMS);
    problems
}

fn problem(
    id: &str,
    title: impl Into<String>,
    description: String,
    severity: Severity,
    category: CategoryId,
    impact: &str,
    solution: String,
) -> Problem {
    Problem {
        id: id.to_string(),
        title: title.into(),
        description,
        severity,
        category,
        impact: impact.to_string(),
        solution,
    }
}
