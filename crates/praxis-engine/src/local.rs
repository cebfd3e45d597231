use std::cmp::Ordering;
use std::collections::HashSet;

use praxis_types::{DisplayItem, RawItem, RemotePage, SortKey};

use crate::filter::FilterState;
use crate::projection::project_with;

/// Filter, sort and paginate a full, unfiltered collection on the client.
///
/// Used when a remote endpoint returns everything in one response. Matching
/// runs on projected fields so legacy shapes filter the same way as fresh
/// ones. The returned page holds the original raw items; the sort is stable
/// and lives only in the returned page.
pub fn apply_locally(items: &[RawItem], filters: &FilterState, page_size: u32) -> RemotePage {
    let no_favorites = HashSet::new();
    let needle = filters.effective_search().map(str::to_lowercase);

    let mut matched: Vec<(DisplayItem, &RawItem)> = items
        .iter()
        .map(|raw| (project_with(raw, &no_favorites), raw))
        .filter(|(item, _)| {
            filters
                .active_category()
                .as_option()
                .is_none_or(|c| item.category.eq_ignore_ascii_case(c))
        })
        .filter(|(item, _)| filters.status_filter().matches(&item.status))
        .filter(|(item, _)| needle.as_deref().is_none_or(|n| matches_search(item, n)))
        .collect();

    matched.sort_by(|(a, _), (b, _)| compare(a, b, filters.sort_key()));

    let total_count = matched.len() as u64;
    let page_size = page_size.max(1) as usize;
    let page = filters.page().max(1) as usize;
    let start = page.saturating_sub(1).saturating_mul(page_size);

    let items: Vec<RawItem> = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .map(|(_, raw)| raw.clone())
        .collect();

    RemotePage {
        has_next: (start + page_size) < total_count as usize,
        has_prev: page > 1,
        items,
        total_count,
    }
}

fn matches_search(item: &DisplayItem, needle: &str) -> bool {
    [&item.title, &item.subtitle, &item.category]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn compare(a: &DisplayItem, b: &DisplayItem, key: SortKey) -> Ordering {
    match key {
        // Undated items sink to the end in both directions.
        SortKey::Newest => match (a.created_at, b.created_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Oldest => match (a.created_at, b.created_at) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::PriceAsc => a.price_cents.cmp(&b.price_cents),
        SortKey::PriceDesc => b.price_cents.cmp(&a.price_cents),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use praxis_types::ItemStatus;
    use serde_json::json;

    fn catalog() -> Vec<RawItem> {
        vec![
            json!({"id": 1, "title": "Morning Yoga", "category": "Yoga", "price_cents": 2000, "status": "active", "created_at": "2024-01-01T00:00:00Z"}),
            json!({"id": 2, "name": "Reiki Session", "categoryName": "Energy", "price": "$85.00", "state": "draft", "createdAt": "2024-02-01T00:00:00Z"}),
            json!({"id": 3, "title": "Yin Yoga", "category": {"name": "yoga"}, "price_cents": 1500, "status": "published", "created_at": "2024-03-01T00:00:00Z"}),
            json!({"id": 4, "title": "Breathwork", "category": "Breath", "price_cents": 4000, "status": "inactive"}),
        ]
        .into_iter()
        .map(RawItem::from_value)
        .collect()
    }

    fn ids(page: &RemotePage) -> Vec<String> {
        page.items
            .iter()
            .filter_map(|i| i.id())
            .map(|id| id.to_string())
            .collect()
    }

    #[test]
    fn test_category_filter_is_case_insensitive_across_shapes() {
        let filters = FilterState::default().with_category("YOGA");
        let page = apply_locally(&catalog(), &filters, 10);
        assert_eq!(ids(&page), vec!["3", "1"]);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn test_status_filter_uses_canonical_status() {
        let filters = FilterState::default().with_status(ItemStatus::Draft);
        let page = apply_locally(&catalog(), &filters, 10);
        assert_eq!(ids(&page), vec!["2", "4"]);
    }

    #[test]
    fn test_search_matches_title_and_category() {
        let filters = FilterState::default().with_search("  yin ");
        assert_eq!(ids(&apply_locally(&catalog(), &filters, 10)), vec!["3"]);

        let filters = FilterState::default().with_search("energy");
        assert_eq!(ids(&apply_locally(&catalog(), &filters, 10)), vec!["2"]);
    }

    #[test]
    fn test_sorting() {
        let by_price = FilterState::default().with_sort(SortKey::PriceAsc);
        assert_eq!(ids(&apply_locally(&catalog(), &by_price, 10)), vec!["3", "1", "4", "2"]);

        let oldest = FilterState::default().with_sort(SortKey::Oldest);
        assert_eq!(ids(&apply_locally(&catalog(), &oldest, 10)), vec!["1", "2", "3", "4"]);

        let title = FilterState::default().with_sort(SortKey::Title);
        assert_eq!(ids(&apply_locally(&catalog(), &title, 10)), vec!["4", "1", "2", "3"]);
    }

    #[test]
    fn test_pagination_flags() {
        let first = apply_locally(&catalog(), &FilterState::default(), 3);
        assert_eq!(first.items.len(), 3);
        assert!(first.has_next);
        assert!(!first.has_prev);

        let second = apply_locally(&catalog(), &FilterState::default().with_page(2), 3);
        assert_eq!(ids(&second), vec!["4"]);
        assert!(!second.has_next);
        assert!(second.has_prev);
        assert_eq!(second.total_count, 4);
    }

    #[test]
    fn test_page_zero_reads_as_first_page() {
        let page = apply_locally(&catalog(), &FilterState::default().with_page(0), 3);
        assert_eq!(page.items.len(), 3);
        assert!(!page.has_prev);
        assert!(page.has_next);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = apply_locally(&catalog(), &FilterState::default().with_page(9), 3);
        assert!(page.is_empty());
        assert!(page.has_prev);
        assert!(!page.has_next);
    }
}
