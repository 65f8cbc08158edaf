//! Raw catalog payload shapes and their extraction into canonical records.
//!
//! Every field is optional or defaulted: the catalog omits fields freely
//! depending on the requested `fields` list and the branch's data quality.
//! Numeric fields that occasionally arrive as strings are kept as
//! [`serde_json::Value`] and read leniently.

use std::collections::BTreeMap;

use placescope_core::{BusinessDetailRecord, Coordinates, LocationResult, SocialLinks, SourceTag};
use serde::Deserialize;
use serde_json::Value;

use super::classify::classify_categories;

const MAX_DETAIL_RUBRICS: usize = 3;
const MAX_PHOTOS: usize = 5;

/// Day keys in the catalog schedule object, paired with the canonical
/// lowercase English day name used in [`BusinessDetailRecord::working_hours`].
const SCHEDULE_DAYS: [(&str, &str); 7] = [
    ("Mon", "monday"),
    ("Tue", "tuesday"),
    ("Wed", "wednesday"),
    ("Thu", "thursday"),
    ("Fri", "friday"),
    ("Sat", "saturday"),
    ("Sun", "sunday"),
];

#[derive(Debug, Deserialize)]
pub(super) struct Envelope {
    #[serde(default)]
    pub(super) meta: Option<Meta>,
    #[serde(default)]
    pub(super) result: Option<ResultBlock>,
}

/// The catalog reports some errors with HTTP 200 and a non-200 `meta.code`.
#[derive(Debug, Deserialize)]
pub(super) struct Meta {
    #[serde(default)]
    pub(super) code: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ResultBlock {
    #[serde(default)]
    pub(super) items: Vec<Item>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct Item {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    full_address_name: Option<String>,
    #[serde(default)]
    address_name: Option<String>,
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    point: Option<Point>,
    #[serde(default)]
    rubrics: Vec<Rubric>,
    #[serde(default)]
    name_ex: Option<NameEx>,
    #[serde(default)]
    contact_groups: Vec<ContactGroup>,
    #[serde(default)]
    reviews: Option<Reviews>,
    #[serde(default)]
    schedule: Option<Value>,
    #[serde(default)]
    photos: Vec<Photo>,
    #[serde(default)]
    external_content: Vec<ExternalContent>,
    #[serde(default)]
    delivery: Option<Value>,
    #[serde(default)]
    order_with_cart: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Address {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    city_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Point {
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Rubric {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NameEx {
    #[serde(default)]
    extension: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContactGroup {
    #[serde(default)]
    contacts: Vec<Contact>,
}

#[derive(Debug, Deserialize)]
struct Contact {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Reviews {
    #[serde(default)]
    general_rating: Option<Value>,
    #[serde(default)]
    rating: Option<Value>,
    #[serde(default)]
    org_rating: Option<Value>,
    #[serde(default)]
    general_review_count: Option<Value>,
    #[serde(default)]
    review_count: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExternalContent {
    #[serde(default)]
    main_photo_url: Option<String>,
}

impl Item {
    fn rubric_names(&self) -> impl Iterator<Item = &str> {
        self.rubrics
            .iter()
            .filter_map(|r| non_blank(r.name.as_deref()))
    }

    /// Normalize a search hit. `index` feeds the id when the catalog omits one.
    pub(super) fn into_location(self, index: usize, region: &str) -> LocationResult {
        let categories: Vec<String> = self.rubric_names().map(str::to_string).collect();
        let (business_type, cuisine) = classify_categories(&categories);

        let address = self.display_address();
        let city = self
            .address
            .as_ref()
            .and_then(|a| non_blank(a.city_name.as_deref()))
            .unwrap_or(region)
            .to_string();
        let coordinates = self.point.as_ref().map_or(Coordinates::new(0.0, 0.0), |p| {
            Coordinates::new(p.lat.unwrap_or(0.0), p.lon.unwrap_or(0.0))
        });

        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("catalog-item-{index}"));
        let name = self.name.unwrap_or_default();

        let mut location =
            LocationResult::new(id, name, address, city, coordinates, SourceTag::Catalog);
        location.business_type = business_type;
        location.cuisine = cuisine;
        location.categories = (!categories.is_empty()).then_some(categories);
        location
    }

    /// Normalize a `byid` hit into a business record.
    pub(super) fn into_details(self) -> BusinessDetailRecord {
        let mut categories: Vec<String> = Vec::new();
        if let Some(extension) = self
            .name_ex
            .as_ref()
            .and_then(|n| non_blank(n.extension.as_deref()))
        {
            categories.push(extension.to_string());
        }
        let rubrics = self.rubric_names().take(MAX_DETAIL_RUBRICS);
        categories.extend(rubrics.map(str::to_string));
        if self.delivery.as_ref().is_some_and(is_truthy) {
            categories.push("Delivery Available".to_string());
        }
        if self.order_with_cart.as_ref().is_some_and(is_truthy) {
            categories.push("Online Ordering".to_string());
        }

        let photos: Vec<String> = self
            .photos
            .iter()
            .filter_map(|p| non_blank(p.url.as_deref()))
            .chain(
                self.external_content
                    .iter()
                    .filter_map(|c| non_blank(c.main_photo_url.as_deref())),
            )
            .take(MAX_PHOTOS)
            .map(str::to_string)
            .collect();

        let social_links = SocialLinks {
            instagram: self.contact("instagram"),
            facebook: self.contact("facebook"),
            vk: self.contact("vkontakte").or_else(|| self.contact("vk")),
        };
        let has_social = social_links.instagram.is_some()
            || social_links.facebook.is_some()
            || social_links.vk.is_some();

        let (rating, review_count) = self.reviews.as_ref().map_or((None, None), |r| {
            let rating = [&r.general_rating, &r.rating, &r.org_rating]
                .into_iter()
                .find_map(|v| v.as_ref().and_then(lenient_f64))
                .map(|v| v.clamp(0.0, 5.0));
            let count = [&r.general_review_count, &r.review_count]
                .into_iter()
                .find_map(|v| v.as_ref().and_then(lenient_u32));
            (rating, count)
        });

        BusinessDetailRecord {
            phone: self.contact("phone"),
            website: self.contact("website"),
            rating,
            review_count,
            categories,
            photos,
            working_hours: self.schedule.as_ref().and_then(working_hours),
            social_links: has_social.then_some(social_links),
            address: self.display_address(),
            name: self.name.unwrap_or_default(),
        }
    }

    fn display_address(&self) -> String {
        non_blank(self.full_address_name.as_deref())
            .or_else(|| non_blank(self.address_name.as_deref()))
            .or_else(|| {
                self.address
                    .as_ref()
                    .and_then(|a| non_blank(a.name.as_deref()))
            })
            .unwrap_or_default()
            .to_string()
    }

    /// First non-blank contact of `kind` across all contact groups.
    fn contact(&self, kind: &str) -> Option<String> {
        self.contact_groups
            .iter()
            .flat_map(|g| g.contacts.iter())
            .filter(|c| c.kind.as_deref() == Some(kind))
            .find_map(|c| non_blank(c.url.as_deref()).or_else(|| non_blank(c.value.as_deref())))
            .map(str::to_string)
    }
}

/// Format the catalog schedule object into day name → hours text.
///
/// Accepts either `{"Everyday": "10:00-22:00"}` or per-day objects carrying a
/// `working_hours` list of `{from, to}` intervals. Returns `None` when no day
/// yields any text.
fn working_hours(schedule: &Value) -> Option<BTreeMap<String, String>> {
    let mut hours = BTreeMap::new();

    if let Some(everyday) = schedule.get("Everyday").and_then(Value::as_str) {
        if !everyday.trim().is_empty() {
            for (_, day) in SCHEDULE_DAYS {
                hours.insert(day.to_string(), everyday.trim().to_string());
            }
        }
    } else {
        for (key, day) in SCHEDULE_DAYS {
            let intervals: Vec<String> = schedule
                .get(key)
                .and_then(|d| d.get("working_hours"))
                .and_then(Value::as_array)
                .map(|list| {
                    list.iter()
                        .filter_map(|iv| {
                            let from = iv.get("from").and_then(Value::as_str)?;
                            let to = iv.get("to").and_then(Value::as_str)?;
                            Some(format!("{from} - {to}"))
                        })
                        .collect()
                })
                .unwrap_or_default();
            if !intervals.is_empty() {
                hours.insert(day.to_string(), intervals.join(", "));
            }
        }
    }

    (!hours.is_empty()).then_some(hours)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn lenient_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn lenient_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Loose truthiness for feature flags the catalog encodes as bools, objects or strings.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
