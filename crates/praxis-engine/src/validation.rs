use praxis_types::{Money, RawItem};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const MAX_TITLE_LEN: usize = 120;
pub const MIN_DESCRIPTION_LEN: usize = 20;
pub const MIN_DURATION_MINUTES: u32 = 15;
pub const MAX_DURATION_MINUTES: u32 = 480;

/// Form input collected by the service creation wizard, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Price as entered, e.g. `"85"` or `"$85.00"`
    pub price: String,
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Inline error shown next to one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a wizard draft and build the create payload.
///
/// All failing fields are reported at once. A draft that fails never produces
/// a payload, so invalid input cannot reach the remote.
pub fn validate_service(draft: &ServiceDraft) -> Result<RawItem, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors.push(FieldError::new(
            "title",
            format!("Title must be at most {} characters", MAX_TITLE_LEN),
        ));
    }

    let description = draft.description.trim();
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.push(FieldError::new(
            "description",
            format!("Description must be at least {} characters", MIN_DESCRIPTION_LEN),
        ));
    }

    let category = draft.category.trim();
    if category.is_empty() {
        errors.push(FieldError::new("category", "Choose a category"));
    }

    let price = match Money::parse(&draft.price) {
        Some(money) if money.is_positive() => Some(money),
        Some(_) => {
            errors.push(FieldError::new("price", "Price must be greater than zero"));
            None
        }
        None => {
            errors.push(FieldError::new("price", "Enter a valid price"));
            None
        }
    };

    match draft.duration_minutes {
        Some(m) if (MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&m) => {}
        Some(_) => errors.push(FieldError::new(
            "duration_minutes",
            format!(
                "Duration must be between {} and {} minutes",
                MIN_DURATION_MINUTES, MAX_DURATION_MINUTES
            ),
        )),
        None => errors.push(FieldError::new("duration_minutes", "Duration is required")),
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut payload = RawItem::from_value(json!({
        "title": title,
        "description": description,
        "category": category,
        "price_cents": price.map(|p| p.cents()).unwrap_or_default(),
        "duration_minutes": draft.duration_minutes,
        "status": "draft",
    }));
    if let Some(location) = draft.location.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        payload.insert("location", json!(location));
    }
    Ok(payload)
}
