//! Rubric classification: free-text catalog categories to a closed venue type
//! and a cuisine label.
//!
//! Rules are checked in order against every category (lowercased); the first
//! rule with a keyword contained in any category wins. Keywords cover the
//! Russian rubric names the catalog returns for Kazakhstan as well as English.

use placescope_core::BusinessType;

const BUSINESS_TYPE_RULES: &[(BusinessType, &[&str])] = &[
    (BusinessType::Restaurant, &["ресторан", "restaurant"]),
    (BusinessType::Cafe, &["кафе", "кофе", "cafe", "coffee"]),
    (BusinessType::Fastfood, &["быстр", "фаст", "fast"]),
    (BusinessType::Bar, &["бар", "паб", "bar", "pub"]),
    (
        BusinessType::Bakery,
        &["пекарн", "пиц", "кондитер", "bakery", "pizz"],
    ),
    (BusinessType::Other, &["столов", "canteen"]),
];

const CUISINE_RULES: &[(&str, &[&str])] = &[
    ("Kazakh", &["казах", "kazakh"]),
    ("European", &["европ", "europ"]),
    ("Asian", &["азиат", "восточ", "asian"]),
    ("Italian", &["итальян", "italian"]),
    ("Chinese", &["китай", "chinese"]),
    ("Japanese", &["япон", "суши", "japanese", "sushi"]),
    ("Uzbek", &["узбек", "uzbek"]),
    ("Caucasian", &["кавказ", "грузин", "caucas", "georgian"]),
    ("American", &["американ", "бургер", "american", "burger"]),
    ("Mexican", &["мексикан", "mexican"]),
];

/// Infer the venue type and cuisine label from catalog rubric names.
#[must_use]
pub fn classify_categories(categories: &[String]) -> (Option<BusinessType>, Option<String>) {
    let lowered: Vec<String> = categories.iter().map(|c| c.to_lowercase()).collect();

    let business_type = first_match(&lowered, BUSINESS_TYPE_RULES).copied();
    let cuisine = first_match(&lowered, CUISINE_RULES).map(|label| (*label).to_string());

    (business_type, cuisine)
}

fn first_match<'a, T>(lowered: &[String], rules: &'a [(T, &[&str])]) -> Option<&'a T> {
    rules
        .iter()
        .find(|(_, keywords)| {
            lowered
                .iter()
                .any(|category| keywords.iter().any(|kw| category.contains(kw)))
        })
        .map(|(value, _)| value)
}
