//! Recommendations derived from problems.

use super::{Problem, Recommendation, RecommendationCategory};

pub const MAX_RECOMMENDATIONS: usize = 8;

/// Mean ratings below this earn an "improve reviews" recommendation.
const REVIEW_ATTENTION_RATING: f64 = 4.0;

struct Template {
    problem_id: &'static str,
    id: &'static str,
    title: &'static str,
    description: &'static str,
    priority: u8,
    revenue_impact: &'static str,
    category: RecommendationCategory,
}

const TEMPLATES: &[Template] = &[
    Template {
        problem_id: "no-primary-provider",
        id: "create-primary-listing",
        title: "Create a listing on the main map platform",
        description: "Register address, contacts, hours and photos so the venue shows up nearby.",
        priority: 1,
        revenue_impact: "+20-30% new guests",
        category: RecommendationCategory::Visibility,
    },
    Template {
        problem_id: "no-secondary-provider",
        id: "create-secondary-listing",
        title: "Create a listing on the second map platform",
        description: "Reach guests who navigate with a different app.",
        priority: 2,
        revenue_impact: "+10-15% new guests",
        category: RecommendationCategory::Visibility,
    },
    Template {
        problem_id: "no-website",
        id: "build-website",
        title: "Build a website",
        description: "A mobile-friendly site with menu, prices and hours wins undecided guests.",
        priority: 3,
        revenue_impact: "+15-25% conversion from search",
        category: RecommendationCategory::Branding,
    },
    Template {
        problem_id: "incomplete-profiles",
        id: "complete-profiles",
        title: "Complete every listing profile",
        description: "Add phone, website, photos and opening hours to each listing.",
        priority: 4,
        revenue_impact: "+5-10% listing conversion",
        category: RecommendationCategory::Visibility,
    },
];

const IMPROVE_REVIEWS: Template = Template {
    problem_id: "",
    id: "improve-reviews",
    title: "Improve review management",
    description: "Answer every review and ask satisfied guests to leave feedback.",
    priority: 5,
    revenue_impact: "+5-15% trust and repeat visits",
    category: RecommendationCategory::Branding,
};

/// Map problems to recommendations, add the low-rating heuristic, then sort
/// by priority and cap at [`MAX_RECOMMENDATIONS`].
#[must_use]
pub fn generate_recommendations(
    problems: &[Problem],
    mean_rating: Option<f64>,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = TEMPLATES
        .iter()
        .filter(|t| problems.iter().any(|p| p.id == t.problem_id))
        .map(Template::build)
        .collect();

    if mean_rating.is_some_and(|r| r < REVIEW_ATTENTION_RATING) {
        recommendations.push(IMPROVE_REVIEWS.build());
    }

    recommendations.sort_by_key(|r| r.priority);
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

impl Template {
    fn build(&self) -> Recommendation {
        Recommendation {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            priority: self.priority,
            revenue_impact: self.revenue_impact.to_string(),
            category: self.category,
        }
    }
}
