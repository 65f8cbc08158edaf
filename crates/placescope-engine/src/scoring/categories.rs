//! The three category scorers.

use placescope_core::{has_text, BusinessDetailRecord, SocialLinks};

use super::{AnalysisInput, CategoryId, ScoreCategory};

const PRIMARY_LISTING: f64 = 12.0;
const SECONDARY_LISTING: f64 = 8.0;
const MULTI_PLATFORM: f64 = 5.0;
const HIGH_RATING: f64 = 3.0;
const MANY_REVIEWS: f64 = 2.0;

const WEBSITE_FOUND: f64 = 10.0;
const GOOD_SEO: f64 = 5.0;
const ONLINE_ORDERING: f64 = 5.0;
const DELIVERY: f64 = 5.0;
const INSTAGRAM: f64 = 3.0;
const FACEBOOK: f64 = 3.0;
const VK: f64 = 2.0;
/// Mobile-experience proxy: any found website earns it.
const MOBILE_READY: f64 = 7.0;

const PROFILE_FIELD: f64 = 1.5;
const STRONG_REVIEWS: f64 = 4.0;
const FAIR_REVIEWS: f64 = 2.0;

/// Search Results, max 30.
#[must_use]
pub fn search_results(input: &AnalysisInput) -> ScoreCategory {
    let mut score = 0.0;

    if input.primary.record.is_some() {
        score += PRIMARY_LISTING;
    }
    if input.secondary.record.is_some() {
        score += SECONDARY_LISTING;
    }
    if input.records().count() >= 2 {
        score += MULTI_PLATFORM;
    }
    if input.records().any(|r| r.rating.is_some_and(|v| v > 4.0)) {
        score += HIGH_RATING;
    }
    if input.records().any(|r| r.review_count.is_some_and(|n| n > 20)) {
        score += MANY_REVIEWS;
    }

    ScoreCategory::new(CategoryId::SearchResults, score)
}

/// Website Experience, max 40.
#[must_use]
pub fn website_experience(input: &AnalysisInput) -> ScoreCategory {
    let mut score = 0.0;
    let website = input.found_website();

    if let Some(site) = website {
        score += WEBSITE_FOUND + MOBILE_READY;
        if site.seo_score.is_some_and(|s| s > 70) {
            score += GOOD_SEO;
        }
        if site.has_online_ordering == Some(true) {
            score += ONLINE_ORDERING;
        }
        if site.has_delivery == Some(true) {
            score += DELIVERY;
        }
    }

    let social = merged_social_links(input);
    if has_text(social.instagram.as_deref()) {
        score += INSTAGRAM;
    }
    if has_text(social.facebook.as_deref()) {
        score += FACEBOOK;
    }
    if has_text(social.vk.as_deref()) {
        score += VK;
    }

    ScoreCategory::new(CategoryId::WebsiteExperience, score)
}

/// Local Listings, max 20.
#[must_use]
pub fn local_listings(input: &AnalysisInput) -> ScoreCategory {
    let mut score: f64 = input.records().map(profile_points).sum();

    if let Some(mean) = input.mean_rating() {
        if mean > 4.0 {
            score += STRONG_REVIEWS;
        } else if mean > 3.5 {
            score += FAIR_REVIEWS;
        }
    }

    let reviews = input.total_reviews();
    if reviews > 50 {
        score += STRONG_REVIEWS;
    } else if reviews > 20 {
        score += FAIR_REVIEWS;
    }

    ScoreCategory::new(CategoryId::LocalListings, score)
}

/// 1.5 points for each of phone, website, photos and working hours.
fn profile_points(record: &BusinessDetailRecord) -> f64 {
    [
        record.has_phone(),
        record.has_website(),
        record.has_photos(),
        record.has_working_hours(),
    ]
    .into_iter()
    .filter(|present| *present)
    .map(|_| PROFILE_FIELD)
    .sum()
}

/// Social links across every source: primary record, secondary record, then
/// the website. The first non-blank value per network wins.
fn merged_social_links(input: &AnalysisInput) -> SocialLinks {
    let sources: Vec<&SocialLinks> = input
        .records()
        .filter_map(|r| r.social_links.as_ref())
        .chain(input.found_website().and_then(|w| w.social_links.as_ref()))
        .collect();

    let first = |pick: fn(&SocialLinks) -> Option<&String>| {
        sources
            .iter()
            .filter_map(|links| pick(links))
            .find(|value| has_text(Some(value.as_str())))
            .cloned()
    };

    SocialLinks {
        instagram: first(|l| l.instagram.as_ref()),
        facebook: first(|l| l.facebook.as_ref()),
        vk: first(|l| l.vk.as_ref()),
    }
}
