//! Raw item fixtures.
//!
//! Remotes disagree on field names and value shapes; these builders produce
//! the same logical service in each dialect so tests can check that the
//! projection converges.

use praxis_types::RawItem;
use serde_json::json;

/// Current API shape: snake_case, integer cents, explicit status code.
pub fn current_service(id: i64, title: &str, category: &str, cents: i64) -> RawItem {
    RawItem::from_value(json!({
        "id": id,
        "title": title,
        "description": format!("{} with a certified practitioner", title),
        "category": category,
        "price_cents": cents,
        "duration_minutes": 60,
        "status": "active",
        "created_at": format!("2024-01-{:02}T09:00:00Z", (id % 28) + 1),
    }))
}

/// Legacy shape: camelCase, decimal string price, boolean publish flag.
pub fn legacy_service(id: i64, title: &str, category: &str, cents: i64) -> RawItem {
    RawItem::from_value(json!({
        "pk": id.to_string(),
        "name": title,
        "summary": format!("{} with a certified practitioner", title),
        "categoryName": category,
        "price": format!("${}.{:02}", cents / 100, cents % 100),
        "durationMinutes": "60",
        "isPublished": true,
        "createdAt": format!("2024-01-{:02}T09:00:00Z", (id % 28) + 1),
    }))
}

/// An item missing nearly everything.
pub fn sparse_item(id: i64) -> RawItem {
    RawItem::from_value(json!({ "id": id }))
}

pub fn draft_service(id: i64, title: &str) -> RawItem {
    current_service(id, title, "Yoga", 4500).with("status", json!("draft"))
}

/// `count` services alternating between the current and legacy shapes,
/// spread over three categories, ids 1..=count.
pub fn mixed_catalog(count: i64) -> Vec<RawItem> {
    const CATEGORIES: [&str; 3] = ["Yoga", "Meditation", "Breathwork"];
    (1..=count)
        .map(|id| {
            let category = CATEGORIES[(id as usize) % CATEGORIES.len()];
            let title = format!("{} Session {}", category, id);
            let cents = 2000 + id * 250;
            if id % 2 == 0 {
                current_service(id, &title, category, cents)
            } else {
                legacy_service(id, &title, category, cents)
            }
        })
        .collect()
}
