use chrono::SecondsFormat;
use praxis_types::{RawItem, Resource};
use serde_json::json;

/// One stored item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    /// Row id, handed out to clients as the item id.
    pub id: i64,
    /// Collection the item belongs to.
    pub resource: Resource,
    /// Owning practitioner, if the item is practitioner-scoped.
    pub practitioner_id: Option<String>,
    /// Body exactly as it was written.
    pub body: RawItem,
}

impl ItemRecord {
    /// Body with the row id injected, as a client would receive it.
    pub fn into_raw(self) -> RawItem {
        self.body.with("id", json!(self.id))
    }
}

/// Filter/sort columns derived from a body via the client projection.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DerivedColumns {
    pub title: String,
    pub category: String,
    pub status: String,
    pub price_cents: i64,
    pub created_at: Option<String>,
    pub search_text: String,
}

impl DerivedColumns {
    pub fn from_body(body: &RawItem) -> Self {
        let item = praxis_engine::project(body);
        let search_text = format!("{} {} {}", item.title, item.subtitle, item.category).to_lowercase();
        Self {
            title: item.title,
            category: item.category,
            status: item.status.as_str().to_string(),
            price_cents: item.price_cents,
            created_at: item
                .created_at
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
            search_text,
        }
    }
}
