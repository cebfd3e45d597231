//! Raw remote item -> display item.
//!
//! Projection is total. A field that is missing, `null`, or of the wrong
//! shape falls back to the default documented on [`DisplayItem`]; nothing here
//! panics and nothing is reported to the user. Templates can therefore read
//! every field unconditionally.

use std::collections::HashSet;

use praxis_types::{DisplayItem, ItemId, ItemStatus, Money, RawItem};

const ID_KEYS: &[&str] = &["id", "uuid", "pk"];
const TITLE_KEYS: &[&str] = &[
    "title",
    "name",
    "display_name",
    "displayName",
    "service_name",
    "serviceName",
    "full_name",
    "fullName",
];
const SUBTITLE_KEYS: &[&str] = &[
    "description",
    "short_description",
    "shortDescription",
    "summary",
    "tagline",
    "bio",
    "content",
];
const CATEGORY_KEYS: &[&str] = &[
    "category_name",
    "categoryName",
    "category",
    "service_type",
    "serviceType",
    "post_type",
    "type",
];
const CATEGORY_NESTED_KEYS: &[&str] = &["name", "title", "slug"];
const STATUS_KEYS: &[&str] = &["status", "state", "booking_status", "bookingStatus"];
const PUBLISHED_FLAG_KEYS: &[&str] = &["is_active", "isActive", "is_published", "isPublished"];
const PRICE_KEYS: &[&str] = &[
    "price_cents",
    "priceCents",
    "price",
    "amount",
    "total_amount",
    "totalAmount",
    "hourly_rate",
];
const DURATION_KEYS: &[&str] = &["duration_minutes", "durationMinutes", "duration", "length"];
const IMAGE_KEYS: &[&str] = &[
    "image_url",
    "imageUrl",
    "cover_image",
    "coverImage",
    "thumbnail",
    "avatar_url",
    "profile_image",
];
const CREATED_KEYS: &[&str] = &["created_at", "createdAt", "created", "date_created"];
const FIRST_PUBLISHED_KEYS: &[&str] = &["first_published_at", "firstPublishedAt", "published_at"];

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";
pub const DEFAULT_DURATION: &str = "N/A";

/// Project one raw item with no favorites overlay.
pub fn project(raw: &RawItem) -> DisplayItem {
    project_with(raw, &HashSet::new())
}

/// Project one raw item, marking it as favorite when its id is in `favorites`.
pub fn project_with(raw: &RawItem, favorites: &HashSet<ItemId>) -> DisplayItem {
    let id = raw
        .text_of(ID_KEYS)
        .map(ItemId::from)
        .unwrap_or_else(|| ItemId::new(""));

    let price = raw
        .first_of(PRICE_KEYS)
        .and_then(Money::from_json)
        .unwrap_or(Money::ZERO);

    let duration_minutes = raw
        .unsigned_of(DURATION_KEYS)
        .and_then(|m| u32::try_from(m).ok())
        .filter(|m| *m > 0);

    DisplayItem {
        is_favorite: favorites.contains(&id),
        id,
        title: title_of(raw),
        subtitle: raw.text_of(SUBTITLE_KEYS).unwrap_or_default(),
        category: category_of(raw),
        status: status_of(raw),
        price: price.to_string(),
        price_cents: price.cents(),
        duration: duration_minutes
            .map(format_duration)
            .unwrap_or_else(|| DEFAULT_DURATION.to_string()),
        duration_minutes,
        image_url: raw.text_of(IMAGE_KEYS),
        created_at: raw.timestamp_of(CREATED_KEYS),
        first_published_at: raw.timestamp_of(FIRST_PUBLISHED_KEYS),
    }
}

pub fn project_all(items: &[RawItem], favorites: &HashSet<ItemId>) -> Vec<DisplayItem> {
    items.iter().map(|raw| project_with(raw, favorites)).collect()
}

fn title_of(raw: &RawItem) -> String {
    raw.text_of(TITLE_KEYS)
        .or_else(|| raw.nested_text("service", &["name", "title"]))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

fn category_of(raw: &RawItem) -> String {
    raw.text_of(CATEGORY_KEYS)
        .or_else(|| raw.nested_text("category", CATEGORY_NESTED_KEYS))
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

/// Explicit status codes win; a bare boolean publish flag is the fallback.
pub(crate) fn status_of(raw: &RawItem) -> ItemStatus {
    let from_code = raw
        .text_of(STATUS_KEYS)
        .map(|code| ItemStatus::from_code(&code))
        .filter(|status| *status != ItemStatus::Unknown);

    from_code
        .or_else(|| {
            raw.bool_of(PUBLISHED_FLAG_KEYS).map(|active| {
                if active {
                    ItemStatus::Active
                } else {
                    ItemStatus::Draft
                }
            })
        })
        .unwrap_or(ItemStatus::Unknown)
}

/// `45 min`, `1 hr`, `2 hrs`, `1 hr 30 min`
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{} min", m),
        (1, 0) => "1 hr".to_string(),
        (h, 0) => format!("{} hrs", h),
        (1, m) => format!("1 hr {} min", m),
        (h, m) => format!("{} hrs {} min", h, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawItem {
        RawItem::from_value(value)
    }

    #[test]
    fn test_empty_item_gets_every_default() {
        let item = project(&raw(json!({})));
        assert_eq!(item.id.as_str(), "");
        assert_eq!(item.title, DEFAULT_TITLE);
        assert_eq!(item.subtitle, "");
        assert_eq!(item.category, DEFAULT_CATEGORY);
        assert_eq!(item.status, ItemStatus::Unknown);
        assert_eq!(item.price, "0.00");
        assert_eq!(item.duration, DEFAULT_DURATION);
        assert!(item.image_url.is_none());
        assert!(!item.is_favorite);
    }

    #[test]
    fn test_price_from_cents_and_string() {
        assert_eq!(project(&raw(json!({"price_cents": 8500}))).price, "85.00");
        assert_eq!(project(&raw(json!({"price": "$85.00"}))).price, "85.00");
        assert_eq!(project(&raw(json!({"priceCents": 1999}))).price, "19.99");
    }

    #[test]
    fn test_unparseable_price_defaults_to_zero() {
        let item = project(&raw(json!({"price": "call for pricing"})));
        assert_eq!(item.price, "0.00");
        assert_eq!(item.price_cents, 0);
    }

    #[test]
    fn test_status_synonyms_and_flag_fallback() {
        assert_eq!(project(&raw(json!({"status": "cancelled"}))).status, ItemStatus::Canceled);
        assert_eq!(project(&raw(json!({"state": "published"}))).status, ItemStatus::Active);
        assert_eq!(project(&raw(json!({"is_active": false}))).status, ItemStatus::Draft);
        assert_eq!(
            project(&raw(json!({"status": "??", "isPublished": true}))).status,
            ItemStatus::Active
        );
    }

    #[test]
    fn test_nested_category_and_service_title() {
        let item = project(&raw(json!({
            "service": {"name": "Deep Tissue Massage"},
            "category": {"name": "Bodywork"}
        })));
        assert_eq!(item.title, "Deep Tissue Massage");
        assert_eq!(item.category, "Bodywork");
    }

    #[test]
    fn test_duration_formats() {
        assert_eq!(format_duration(45), "45 min");
        assert_eq!(format_duration(60), "1 hr");
        assert_eq!(format_duration(90), "1 hr 30 min");
        assert_eq!(format_duration(120), "2 hrs");
        assert_eq!(format_duration(150), "2 hrs 30 min");
        assert_eq!(project(&raw(json!({"duration": "75"}))).duration, "1 hr 15 min");
        assert_eq!(project(&raw(json!({"duration_minutes": 0}))).duration, DEFAULT_DURATION);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let item = raw(json!({
            "id": 7,
            "name": "Sunrise Flow",
            "price": 2500,
            "status": "LIVE",
            "created_at": "2024-03-01T08:00:00Z"
        }));
        assert_eq!(project(&item), project(&item));
    }

    #[test]
    fn test_favorites_overlay() {
        let favorites: HashSet<ItemId> = [ItemId::from(7)].into_iter().collect();
        let item = project_with(&raw(json!({"id": 7})), &favorites);
        assert!(item.is_favorite);
        let other = project_with(&raw(json!({"id": 8})), &favorites);
        assert!(!other.is_favorite);
    }

    #[test]
    fn test_wrongly_typed_fields_degrade() {
        let item = project(&raw(json!({
            "title": ["not", "a", "string"],
            "price": {"amount": 10},
            "duration": true,
            "created_at": 12345
        })));
        assert_eq!(item.title, DEFAULT_TITLE);
        assert_eq!(item.price, "0.00");
        assert_eq!(item.duration, DEFAULT_DURATION);
        assert!(item.created_at.is_none());
    }
}
