use std::collections::BTreeMap;

use placescope_core::{BusinessDetailRecord, SocialLinks, WebsiteAnalysisRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

fn complete_record(rating: f64, reviews: u32) -> BusinessDetailRecord {
    let hours: BTreeMap<String, String> = [("monday", "10:00 - 22:00")]
        .into_iter()
        .map(|(day, h)| (day.to_string(), h.to_string()))
        .collect();
    BusinessDetailRecord {
        name: "Navat".to_string(),
        address: "Panfilov Street 109".to_string(),
        phone: Some("+7 727 111 22 33".to_string()),
        website: Some("https://navat.kz".to_string()),
        rating: Some(rating),
        review_count: Some(reviews),
        categories: vec!["Cafe".to_string()],
        photos: vec!["https://img/1.jpg".to_string()],
        working_hours: Some(hours),
        social_links: None,
    }
}

fn strong_website() -> WebsiteAnalysisRecord {
    WebsiteAnalysisRecord {
        has_website: true,
        title: Some("Navat".to_string()),
        description: None,
        social_links: Some(SocialLinks {
            instagram: Some("https://instagram.com/navat".to_string()),
            facebook: Some("https://facebook.com/navat".to_string()),
            vk: None,
        }),
        has_online_ordering: Some(true),
        has_delivery: Some(true),
        seo_score: Some(90),
    }
}

fn absent_input() -> AnalysisInput {
    AnalysisInput {
        primary: PlatformEvidence::missing("maps"),
        secondary: PlatformEvidence::missing("catalog"),
        website: None,
    }
}

fn strong_input() -> AnalysisInput {
    AnalysisInput {
        primary: PlatformEvidence::found("maps", complete_record(4.5, 100)),
        secondary: PlatformEvidence::found("catalog", complete_record(4.5, 100)),
        website: Some(strong_website()),
    }
}

fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|i| id(i).to_string()).collect()
}

#[test]
fn grade_thresholds() {
    assert_eq!(Grade::from_percentage(85.0), Grade::Excellent);
    assert_eq!(Grade::from_percentage(84.9), Grade::Good);
    assert_eq!(Grade::from_percentage(70.0), Grade::Good);
    assert_eq!(Grade::from_percentage(50.0), Grade::Fair);
    assert_eq!(Grade::from_percentage(49.9), Grade::Poor);
}

#[test]
fn fully_absent_venue_scores_zero() {
    let result = calculate_score(absent_input(), &mut rng());

    assert_eq!(result.total_score, 0);
    assert_eq!(result.overall_grade, Grade::Poor);
    assert_eq!(result.categories.len(), 3);
    for category in &result.categories {
        assert!(
            category.score.abs() < f64::EPSILON,
            "{} scored {}",
            category.name,
            category.score
        );
        assert_eq!(category.status, Grade::Poor);
    }

    let problem_ids = ids(&result.problems, |p| p.id.as_str());
    assert!(problem_ids.contains(&"no-primary-provider".to_string()));
    assert!(problem_ids.contains(&"no-website".to_string()));

    let recs: Vec<(&str, u8)> = result
        .recommendations
        .iter()
        .map(|r| (r.id.as_str(), r.priority))
        .collect();
    assert_eq!(
        recs,
        vec![
            ("create-primary-listing", 1),
            ("create-secondary-listing", 2),
            ("build-website", 3),
        ]
    );
}

#[test]
fn strong_venue_is_excellent() {
    let result = calculate_score(strong_input(), &mut rng());

    assert!(result.total_score >= 85, "scored {}", result.total_score);
    assert_eq!(result.overall_grade, Grade::Excellent);
    assert!(result
        .problems
        .iter()
        .all(|p| p.severity != Severity::Critical));
}

#[test]
fn strong_venue_category_breakdown() {
    let result = calculate_score(strong_input(), &mut rng());
    let scores: Vec<f64> = result.categories.iter().map(|c| c.score).collect();
    // 30; 10 + 5 + 5 + 5 + 3 + 3 + 7 = 38; 12 + 4 + 4 = 20
    assert_eq!(scores, vec![30.0, 38.0, 20.0]);
    // round(88 / 90 * 100)
    assert_eq!(result.total_score, 98);
    assert!(result.problems.is_empty());
    assert!(result.recommendations.is_empty());
}

#[test]
fn categories_are_in_fixed_order() {
    let result = calculate_score(strong_input(), &mut rng());
    let order: Vec<CategoryId> = result.categories.iter().map(|c| c.id).collect();
    assert_eq!(
        order,
        vec![
            CategoryId::SearchResults,
            CategoryId::WebsiteExperience,
            CategoryId::LocalListings
        ]
    );
}

#[test]
fn scores_stay_within_bounds_for_varied_inputs() {
    let mut src = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let make_record = |src: &mut StdRng| -> Option<BusinessDetailRecord> {
            if src.random_bool(0.3) {
                return None;
            }
            let mut record = complete_record(src.random_range(0.0..=5.0), src.random_range(0..500));
            if src.random_bool(0.5) {
                record.phone = None;
            }
            if src.random_bool(0.5) {
                record.photos.clear();
            }
            record.social_links = src.random_bool(0.5).then(|| SocialLinks {
                vk: Some("https://vk.com/x".to_string()),
                ..SocialLinks::default()
            });
            Some(record)
        };
        let primary = make_record(&mut src);
        let secondary = make_record(&mut src);
        let website = src.random_bool(0.5).then(|| WebsiteAnalysisRecord {
            has_online_ordering: Some(src.random_bool(0.5)),
            seo_score: Some(src.random_range(0..=100)),
            ..strong_website()
        });

        let result = calculate_score(
            AnalysisInput {
                primary: PlatformEvidence {
                    platform: "maps".to_string(),
                    record: primary,
                },
                secondary: PlatformEvidence {
                    platform: "catalog".to_string(),
                    record: secondary,
                },
                website,
            },
            &mut rng(),
        );

        assert!(result.total_score <= 100);
        for category in &result.categories {
            assert!(category.score >= 0.0 && category.score <= category.max_score);
        }
        assert!(result.problems.len() <= MAX_PROBLEMS);
        assert!(result.recommendations.len() <= MAX_RECOMMENDATIONS);
        assert!(result
            .recommendations
            .windows(2)
            .all(|w| w[0].priority <= w[1].priority));
    }
}

#[test]
fn problems_skip_healthy_categories() {
    // Both listings present and complete, but no website at all.
    let input = AnalysisInput {
        website: None,
        ..strong_input()
    };
    let result = calculate_score(input, &mut rng());

    let problem_ids = ids(&result.problems, |p| p.id.as_str());
    assert_eq!(problem_ids, vec!["no-website", "no-online-ordering"]);
    assert_eq!(
        ids(&result.recommendations, |r| r.id.as_str()),
        vec!["build-website"]
    );
}

#[test]
fn incomplete_profiles_reported_when_listings_are_weak() {
    let bare = BusinessDetailRecord {
        name: "Navat".to_string(),
        rating: Some(3.2),
        review_count: Some(3),
        ..BusinessDetailRecord::default()
    };
    let input = AnalysisInput {
        primary: PlatformEvidence::found("maps", bare.clone()),
        secondary: PlatformEvidence::found("catalog", bare),
        website: Some(strong_website()),
    };
    let result = calculate_score(input, &mut rng());

    let incomplete = result
        .problems
        .iter()
        .find(|p| p.id == "incomplete-profiles")
        .expect("incomplete profiles flagged");
    assert!(incomplete.description.starts_with('2'));
    assert_eq!(incomplete.category, CategoryId::LocalListings);

    let rec_ids = ids(&result.recommendations, |r| r.id.as_str());
    assert_eq!(rec_ids, vec!["complete-profiles", "improve-reviews"]);
    assert_eq!(result.recommendations[1].priority, 5);
}

#[test]
fn problem_order_is_fixed() {
    let result = calculate_score(absent_input(), &mut rng());
    assert_eq!(
        ids(&result.problems, |p| p.id.as_str()),
        vec![
            "no-primary-provider",
            "no-secondary-provider",
            "no-website",
            "no-online-ordering"
        ]
    );
    assert_eq!(result.problems[0].severity, Severity::Critical);
}

#[test]
fn low_rating_adds_review_recommendation_only_with_ratings() {
    let problems = Vec::new();
    assert!(generate_recommendations(&problems, None).is_empty());
    assert!(generate_recommendations(&problems, Some(4.0)).is_empty());
    let recs = generate_recommendations(&problems, Some(3.9));
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].id, "improve-reviews");
}

#[test]
fn unrated_listing_pulls_mean_below_review_threshold() {
    let input = AnalysisInput {
        primary: PlatformEvidence::found(
            "maps",
            BusinessDetailRecord {
                name: "Navat".to_string(),
                rating: Some(4.6),
                review_count: Some(0),
                ..BusinessDetailRecord::default()
            },
        ),
        secondary: PlatformEvidence::found(
            "catalog",
            BusinessDetailRecord {
                name: "Navat".to_string(),
                ..BusinessDetailRecord::default()
            },
        ),
        website: None,
    };
    let result = calculate_score(input, &mut rng());

    // mean (4.6 + 0) / 2 = 2.3: no rating bonus, and reviews need attention
    assert!(result.categories[2].score.abs() < f64::EPSILON);
    assert_eq!(
        ids(&result.recommendations, |r| r.id.as_str()),
        vec!["build-website", "complete-profiles", "improve-reviews"]
    );
}

#[test]
fn evidence_is_echoed_back() {
    let result = calculate_score(strong_input(), &mut rng());
    assert_eq!(result.evidence, strong_input());
}

#[test]
fn serializes_with_lowercase_grades() {
    let result = calculate_score(absent_input(), &mut rng());
    let json = serde_json::to_value(&result).expect("serializable");
    assert_eq!(json["overall_grade"], "poor");
    assert_eq!(json["categories"][0]["id"], "search_results");
    assert_eq!(json["search_presence"][0]["issues"][0], "not_listed");
}
