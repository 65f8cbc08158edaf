//! Fixed demo data served when a provider cannot be reached.
//!
//! Every value here is deterministic and labelled "(Demo)" so downstream
//! consumers can tell it apart from live provider output.

use std::collections::BTreeMap;

use placescope_core::{
    BusinessDetailRecord, BusinessType, Coordinates, LocationResult, SocialLinks, SourceTag,
};

/// Three catalog venues spread across Almaty, Astana and Shymkent.
#[must_use]
pub fn catalog_search_results(query: &str) -> Vec<LocationResult> {
    let label = query.trim();
    let label = if label.is_empty() { "Venue" } else { label };

    let mut almaty = LocationResult::new(
        "catalog-demo-1",
        format!("{label} Restaurant (Demo)"),
        "Abay Avenue 150",
        "Almaty",
        Coordinates::new(43.238_949, 76.889_709),
        SourceTag::Catalog,
    );
    almaty.business_type = Some(BusinessType::Restaurant);
    almaty.cuisine = Some("Kazakh".to_string());
    almaty.categories = Some(vec!["Restaurant".to_string()]);

    let mut astana = LocationResult::new(
        "catalog-demo-2",
        format!("{label} Cafe (Demo)"),
        "Kabanbay Batyr Avenue 15",
        "Astana",
        Coordinates::new(51.128_207, 71.430_411),
        SourceTag::Catalog,
    );
    astana.business_type = Some(BusinessType::Cafe);
    astana.cuisine = Some("European".to_string());
    astana.categories = Some(vec!["Cafe".to_string()]);

    let mut shymkent = LocationResult::new(
        "catalog-demo-3",
        format!("{label} Fast Food (Demo)"),
        "Tauke Khan Avenue 40",
        "Shymkent",
        Coordinates::new(42.341_700, 69.590_100),
        SourceTag::Catalog,
    );
    shymkent.business_type = Some(BusinessType::Fastfood);
    shymkent.categories = Some(vec!["Fast food".to_string()]);

    vec![almaty, astana, shymkent]
}

/// A fully populated catalog business record.
#[must_use]
pub fn catalog_details() -> BusinessDetailRecord {
    let working_hours: BTreeMap<String, String> = [
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ]
    .into_iter()
    .map(|day| (day.to_string(), "10:00 - 23:00".to_string()))
    .collect();

    BusinessDetailRecord {
        name: "Demo Restaurant".to_string(),
        address: "Abay Avenue 150, Almaty".to_string(),
        phone: Some("+7 727 000 00 00".to_string()),
        website: Some("https://demo-restaurant.kz".to_string()),
        rating: Some(4.3),
        review_count: Some(120),
        categories: vec!["Restaurant".to_string(), "Kazakh cuisine".to_string()],
        photos: vec![
            "https://example.com/demo-restaurant/hall.jpg".to_string(),
            "https://example.com/demo-restaurant/terrace.jpg".to_string(),
        ],
        working_hours: Some(working_hours),
        social_links: Some(SocialLinks {
            instagram: Some("https://instagram.com/demo_restaurant".to_string()),
            facebook: Some("https://facebook.com/demo.restaurant".to_string()),
            vk: None,
        }),
    }
}

/// Two web-search venues in Almaty.
#[must_use]
pub fn web_search_results() -> Vec<LocationResult> {
    vec![
        LocationResult::new(
            "web-demo-1",
            "Dastarkhan (Demo)",
            "Dostyk Avenue 52",
            "Almaty",
            Coordinates::new(43.222_000, 76.851_200),
            SourceTag::WebSearch,
        ),
        LocationResult::new(
            "web-demo-2",
            "Navat (Demo)",
            "Panfilov Street 109",
            "Almaty",
            Coordinates::new(43.256_000, 76.945_000),
            SourceTag::WebSearch,
        ),
    ]
}
