use praxis_engine::{FilterState, PageControls, ViewState, page_window, project, total_pages};
use praxis_types::{RawItem, RemotePage};
use serde_json::json;
use std::collections::HashSet;

#[test]
fn test_default_filters_with_47_results() {
    let filters = FilterState::default();
    assert_eq!(filters.page(), 1);

    let pages = total_pages(47, 20);
    assert_eq!(pages, 3);

    insta::assert_json_snapshot!(page_window(filters.page(), pages, 5), @r#"
    [
      1,
      2,
      3
    ]
    "#);
}

#[test]
fn test_window_in_the_middle_of_a_long_collection() {
    insta::assert_json_snapshot!(page_window(5, 10, 5), @r#"
    [
      1,
      "ellipsis",
      4,
      5,
      6,
      "ellipsis",
      10
    ]
    "#);
}

#[test]
fn test_controls_snapshot() {
    let controls = PageControls::new(1, 47, 20, true, false);
    insta::assert_json_snapshot!(controls, @r#"
    {
      "current": 1,
      "total_pages": 3,
      "total_count": 47,
      "slots": [
        1,
        2,
        3
      ],
      "has_next": true,
      "has_prev": false
    }
    "#);
}

#[test]
fn test_legacy_and_current_shapes_render_identically() {
    let legacy = RawItem::from_value(json!({
        "pk": "svc-1",
        "name": "Sound Bath",
        "categoryName": "Sound",
        "price": "$85.00",
        "state": "cancelled",
        "durationMinutes": 60
    }));
    let current = RawItem::from_value(json!({
        "id": "svc-1",
        "title": "Sound Bath",
        "category": {"name": "Sound"},
        "price_cents": 8500,
        "status": "canceled",
        "duration_minutes": 60
    }));
    assert_eq!(project(&legacy), project(&current));
}

#[test]
fn test_search_typed_on_page_three_starts_over() {
    let mut filters = FilterState::default().with_page(3);
    filters.set_search("yoga");
    let query = filters.to_query(praxis_types::Resource::Services, 20, None);
    assert_eq!(query.page, Some(1));
    assert_eq!(query.search.as_deref(), Some("yoga"));
}

#[test]
fn test_ready_state_serializes_with_tag() {
    let page = RemotePage::whole(vec![RawItem::from_value(json!({"id": 1, "title": "Qi Gong"}))]);
    let state = ViewState::from_page(&page, &FilterState::default(), 20, &HashSet::new());
    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(value["state"], "ready");
    assert_eq!(value["items"][0]["title"], "Qi Gong");
}
