use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Canonical item status.
///
/// Remote resources report the same concept under several historical codes
/// (`canceled` / `cancelled`, `published` / `active`, ...). Every code is folded
/// into this closed set by [`ItemStatus::from_code`] before it reaches any
/// lookup table or template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Active,
    Draft,
    Scheduled,
    Archived,
    Pending,
    Confirmed,
    Completed,
    Canceled,
    NoShow,
    #[default]
    Unknown,
}

impl ItemStatus {
    pub const FILTERABLE: [ItemStatus; 9] = [
        ItemStatus::Active,
        ItemStatus::Draft,
        ItemStatus::Scheduled,
        ItemStatus::Archived,
        ItemStatus::Pending,
        ItemStatus::Confirmed,
        ItemStatus::Completed,
        ItemStatus::Canceled,
        ItemStatus::NoShow,
    ];

    /// Fold any known status code (any casing, `-`/space/`_` separators) into
    /// the canonical enum. Unrecognized codes become `Unknown`.
    pub fn from_code(code: &str) -> Self {
        let normalized: String = code
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "active" | "published" | "live" | "enabled" | "public" => ItemStatus::Active,
            "draft" | "inactive" | "unpublished" | "disabled" | "hidden" | "paused" => {
                ItemStatus::Draft
            }
            "scheduled" => ItemStatus::Scheduled,
            "archived" => ItemStatus::Archived,
            "pending" | "requested" | "awaiting_confirmation" | "pending_payment" => {
                ItemStatus::Pending
            }
            "confirmed" | "accepted" | "upcoming" => ItemStatus::Confirmed,
            "completed" | "complete" | "done" | "fulfilled" => ItemStatus::Completed,
            "no_show" | "noshow" => ItemStatus::NoShow,
            s if s.starts_with("cancel") => ItemStatus::Canceled,
            _ => ItemStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Draft => "draft",
            ItemStatus::Scheduled => "scheduled",
            ItemStatus::Archived => "archived",
            ItemStatus::Pending => "pending",
            ItemStatus::Confirmed => "confirmed",
            ItemStatus::Completed => "completed",
            ItemStatus::Canceled => "canceled",
            ItemStatus::NoShow => "no_show",
            ItemStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Active => "Active",
            ItemStatus::Draft => "Draft",
            ItemStatus::Scheduled => "Scheduled",
            ItemStatus::Archived => "Archived",
            ItemStatus::Pending => "Pending",
            ItemStatus::Confirmed => "Confirmed",
            ItemStatus::Completed => "Completed",
            ItemStatus::Canceled => "Canceled",
            ItemStatus::NoShow => "No-show",
            ItemStatus::Unknown => "Unknown",
        }
    }

    /// The opposite side of the two-state publish flag.
    ///
    /// Only `Active` and `Draft` participate; every other status has no toggle.
    pub fn toggled(&self) -> Option<ItemStatus> {
        match self {
            ItemStatus::Active => Some(ItemStatus::Draft),
            ItemStatus::Draft => Some(ItemStatus::Active),
            _ => None,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(ItemStatus::from_code(&code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_spellings_fold_together() {
        for code in ["canceled", "cancelled", "CANCELLED", "canceled_by_client", "Cancelled-By-Practitioner"] {
            assert_eq!(ItemStatus::from_code(code), ItemStatus::Canceled, "{}", code);
        }
    }

    #[test]
    fn test_publish_synonyms() {
        assert_eq!(ItemStatus::from_code("published"), ItemStatus::Active);
        assert_eq!(ItemStatus::from_code("Live"), ItemStatus::Active);
        assert_eq!(ItemStatus::from_code("unpublished"), ItemStatus::Draft);
        assert_eq!(ItemStatus::from_code("inactive"), ItemStatus::Draft);
        assert_eq!(ItemStatus::from_code("no show"), ItemStatus::NoShow);
        assert_eq!(ItemStatus::from_code("mystery"), ItemStatus::Unknown);
    }

    #[test]
    fn test_toggle_is_two_state() {
        assert_eq!(ItemStatus::Active.toggled(), Some(ItemStatus::Draft));
        assert_eq!(ItemStatus::Draft.toggled(), Some(ItemStatus::Active));
        assert_eq!(ItemStatus::Pending.toggled(), None);
        assert_eq!(ItemStatus::Archived.toggled(), None);
    }

    #[test]
    fn test_deserialize_uses_synonym_table() {
        let status: ItemStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, ItemStatus::Canceled);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"canceled\"");
    }
}
