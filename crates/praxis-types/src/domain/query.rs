use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::item::RawItem;
use super::resource::{ActorId, Resource};
use super::status::ItemStatus;
use crate::Error;

/// A filter dimension that is either unrestricted or pinned to one value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }

    pub fn matches(&self, candidate: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Selection::All => true,
            Selection::Only(v) => v == candidate,
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Selection::Only(v),
            None => Selection::All,
        }
    }
}

/// Orderings offered by list views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most recently created first
    #[default]
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    Title,
}

impl SortKey {
    /// Ordering parameter in the REST convention (`-field` for descending)
    pub fn as_ordering(&self) -> &'static str {
        match self {
            SortKey::Newest => "-created_at",
            SortKey::Oldest => "created_at",
            SortKey::PriceAsc => "price",
            SortKey::PriceDesc => "-price",
            SortKey::Title => "title",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Title => "title",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "newest" | "_created_at" => Ok(SortKey::Newest),
            "oldest" | "created_at" => Ok(SortKey::Oldest),
            "price_asc" | "price" | "price_low_high" => Ok(SortKey::PriceAsc),
            "price_desc" | "_price" | "price_high_low" => Ok(SortKey::PriceDesc),
            "title" | "name" | "alphabetical" => Ok(SortKey::Title),
            other => Err(Error::UnknownSortKey(other.to_string())),
        }
    }
}

/// Wire-level description of one list request.
///
/// Unset filters are omitted from the serialized form rather than sent as
/// `null`. `page`/`page_size` of `None` requests the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ListQuery {
    #[serde(skip)]
    pub resource: Resource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practitioner: Option<ActorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<SortKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ListQuery {
    /// Unfiltered, unpaginated request for a whole collection
    pub fn full_set(resource: Resource) -> Self {
        Self {
            resource,
            practitioner: None,
            category: None,
            search: None,
            status: None,
            ordering: None,
            page: None,
            page_size: None,
        }
    }

    pub fn practitioner(mut self, actor: ActorId) -> Self {
        self.practitioner = Some(actor);
        self
    }

    pub fn is_paginated(&self) -> bool {
        self.page.is_some() && self.page_size.is_some()
    }

    /// Flatten into `key=value` pairs in REST query-string order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(actor) = &self.practitioner {
            pairs.push(("practitioner", actor.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(ordering) = self.ordering {
            pairs.push(("ordering", ordering.as_ordering().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        pairs
    }
}

/// One page of a remote collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemotePage {
    pub items: Vec<RawItem>,
    pub total_count: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl RemotePage {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Page holding an entire collection
    pub fn whole(items: Vec<RawItem>) -> Self {
        let total_count = items.len() as u64;
        Self {
            items,
            total_count,
            has_next: false,
            has_prev: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_filters_are_omitted() {
        let query = ListQuery {
            page: Some(1),
            page_size: Some(20),
            ..ListQuery::full_set(Resource::Services)
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({"page": 1, "page_size": 20}));
    }

    #[test]
    fn test_query_pairs_order() {
        let query = ListQuery {
            category: Some("yoga".to_string()),
            status: Some(ItemStatus::Canceled),
            ordering: Some(SortKey::PriceDesc),
            page: Some(2),
            page_size: Some(10),
            ..ListQuery::full_set(Resource::Bookings)
        }
        .practitioner(ActorId::new("p-7"));

        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("practitioner", "p-7".to_string()),
                ("category", "yoga".to_string()),
                ("status", "canceled".to_string()),
                ("ordering", "-price".to_string()),
                ("page", "2".to_string()),
                ("page_size", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_sort_key_parses_ordering_strings() {
        assert_eq!("-created_at".parse::<SortKey>(), Ok(SortKey::Newest));
        assert_eq!("price-high-low".parse::<SortKey>(), Ok(SortKey::PriceDesc));
        assert!("random".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_selection_matches() {
        let only: Selection<&str> = Selection::Only("yoga");
        assert!(only.matches(&"yoga"));
        assert!(!only.matches(&"reiki"));
        assert!(Selection::<&str>::All.matches(&"anything"));
    }
}
