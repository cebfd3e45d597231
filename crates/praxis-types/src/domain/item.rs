use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::resource::ItemId;
use super::status::ItemStatus;

/// One list entry exactly as the remote resource returned it.
///
/// Field names and shapes are whatever the endpoint produced; nothing here is
/// trusted. Readers go through the lenient accessors below, which treat a
/// missing field, a `null`, and a wrongly typed value the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawItem(Map<String, Value>);

impl RawItem {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap an arbitrary JSON value. Non-object payloads become an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// First non-null value among `keys`, in order.
    pub fn first_of(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().find_map(|k| self.get(k))
    }

    /// First of `keys` that holds a non-blank string, or a number rendered as a string.
    pub fn text_of(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|k| match self.get(k)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Text nested one level down, e.g. `{"category": {"name": "Yoga"}}`.
    pub fn nested_text(&self, key: &str, inner: &[&str]) -> Option<String> {
        match self.get(key)? {
            Value::Object(map) => RawItem(map.clone()).text_of(inner),
            _ => None,
        }
    }

    pub fn bool_of(&self, keys: &[&str]) -> Option<bool> {
        keys.iter().find_map(|k| match self.get(k)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
            Value::Number(n) => n.as_i64().map(|i| i != 0),
            _ => None,
        })
    }

    pub fn unsigned_of(&self, keys: &[&str]) -> Option<u64> {
        keys.iter().find_map(|k| match self.get(k)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64)),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        })
    }

    pub fn timestamp_of(&self, keys: &[&str]) -> Option<DateTime<Utc>> {
        keys.iter().find_map(|k| match self.get(k)? {
            Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        })
    }

    /// Item identifier from `id`, `uuid` or `pk`, numeric or string.
    pub fn id(&self) -> Option<ItemId> {
        self.text_of(&["id", "uuid", "pk"]).map(ItemId::from)
    }
}

impl From<Map<String, Value>> for RawItem {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A list entry shaped for rendering.
///
/// Every field a template reads unconditionally has a concrete default, so
/// the render surface never needs to guard against missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub id: ItemId,
    pub title: String,
    pub subtitle: String,
    pub category: String,
    pub status: ItemStatus,
    /// Two-decimal amount in major units, `"0.00"` when absent
    pub price: String,
    pub price_cents: i64,
    /// Human duration, `"N/A"` when absent
    pub duration: String,
    pub duration_minutes: Option<u32>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub first_published_at: Option<DateTime<Utc>>,
    pub is_favorite: bool,
}
