//! `praxis list`: filters, sorting, pagination and the empty/idle states.

use praxis_testing::{TestWorld, assertions, fixtures};
use praxis_types::Resource;

fn catalog(count: i64) -> TestWorld {
    TestWorld::new()
        .json()
        .with_items(Resource::Services, fixtures::mixed_catalog(count))
}

#[test]
fn test_last_page_holds_the_remainder() {
    let world = catalog(7);

    let result = world
        .run(&["list", "services", "--page-size", "3", "--page", "3"])
        .expect("Failed to run list");
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().expect("Invalid JSON");
    assertions::assert_view_state(&json, "ready").unwrap();
    assertions::assert_item_count(&json, 1).unwrap();
    // Newest first: the oldest item lands alone on the last page
    assert_eq!(assertions::listed_titles(&json).unwrap(), vec!["Meditation Session 1"]);

    let pagination = &json["content"]["view"]["pagination"];
    assert_eq!(pagination["total_pages"], 3);
    assert_eq!(pagination["total_count"], 7);
    assert_eq!(pagination["has_next"], false);
    assert_eq!(pagination["has_prev"], true);
    assert_eq!(pagination["visible"], true);
}

#[test]
fn test_next_page_suggestion_keeps_sort_and_page_size() {
    let world = catalog(7);

    let first = world
        .run(&["list", "services", "--sort", "price-asc", "--page-size", "3"])
        .expect("Failed to run list");
    let json = first.json().expect("Invalid JSON");
    let next = json["suggestions"][0]["command"].as_str().unwrap().to_string();
    assert_eq!(next, "praxis list services --sort price-asc --page-size 3 --page 2");

    let args: Vec<&str> = next.split_whitespace().skip(1).collect();
    let second = world.run(&args).expect("Failed to run suggested command");
    let json = second.json().expect("Invalid JSON");
    let pagination = &json["content"]["view"]["pagination"];
    assert_eq!(pagination["current"], 2);
    assert_eq!(pagination["total_pages"], 3);
    assert_eq!(json["content"]["filters"]["sort"], "price_asc");
    assert_eq!(json["content"]["filters"]["page_size"], 3);
}

#[test]
fn test_category_filter_is_case_insensitive() {
    let world = catalog(7);

    let result = world
        .run(&["list", "services", "--category", "yoga"])
        .expect("Failed to run list");
    let json = result.json().expect("Invalid JSON");

    assert_eq!(
        assertions::listed_titles(&json).unwrap(),
        vec!["Yoga Session 6", "Yoga Session 3"]
    );
    assert_eq!(json["content"]["filters"]["category"], "yoga");
}

#[test]
fn test_search_with_price_sort() {
    let world = catalog(7);

    let result = world
        .run(&["list", "services", "--search", "  breath ", "--sort", "price-asc"])
        .expect("Failed to run list");
    let json = result.json().expect("Invalid JSON");

    assert_eq!(
        assertions::listed_titles(&json).unwrap(),
        vec!["Breathwork Session 2", "Breathwork Session 5"]
    );
    assert_eq!(json["content"]["filters"]["search"], "breath");
    assert_eq!(json["content"]["filters"]["sort"], "price_asc");
}

#[test]
fn test_empty_store_is_no_data() {
    let world = TestWorld::new().json();

    let result = world.run(&["list", "services"]).expect("Failed to run list");
    assert!(result.success());

    let json = result.json().expect("Invalid JSON");
    assertions::assert_view_state(&json, "empty").unwrap();
    assert_eq!(json["content"]["view"]["kind"], "no_data");
    assert_eq!(json["content"]["view"]["can_clear_filters"], false);
    assert_eq!(json["suggestions"][0]["command"], "praxis seed");
}

#[test]
fn test_filtered_out_is_no_matches() {
    let world = catalog(3);

    let result = world
        .run(&["list", "services", "--search", "kundalini"])
        .expect("Failed to run list");
    let json = result.json().expect("Invalid JSON");

    assertions::assert_view_state(&json, "empty").unwrap();
    assert_eq!(json["content"]["view"]["kind"], "no_matches");
    assert_eq!(json["content"]["view"]["can_clear_filters"], true);
    assert_eq!(json["badge"]["level"], "warning");
}

#[test]
fn test_page_past_the_end_is_ready_but_empty() {
    let world = catalog(3);

    let result = world
        .run(&["list", "services", "--page", "9"])
        .expect("Failed to run list");
    let json = result.json().expect("Invalid JSON");

    assertions::assert_view_state(&json, "ready").unwrap();
    assertions::assert_item_count(&json, 0).unwrap();
    assert_eq!(json["badge"]["label"], "Page 9 is empty");
    assert_eq!(json["suggestions"][0]["command"], "praxis list services --page 1");
}

#[test]
fn test_status_filter() {
    let world = catalog(3).with_items(Resource::Services, vec![fixtures::draft_service(4, "Quiet Hatha")]);

    let result = world
        .run(&["list", "services", "--status", "draft"])
        .expect("Failed to run list");
    let json = result.json().expect("Invalid JSON");

    assert_eq!(assertions::listed_titles(&json).unwrap(), vec!["Quiet Hatha"]);
    assert_eq!(json["content"]["view"]["items"][0]["status_label"], "Draft");
}

#[test]
fn test_bookings_wait_for_a_practitioner() {
    let world = TestWorld::new()
        .json()
        .with_owned_items(Resource::Bookings, "p-1", vec![fixtures::sparse_item(1)])
        .with_owned_items(Resource::Bookings, "p-2", vec![fixtures::sparse_item(2)]);

    let anonymous = world.run(&["list", "bookings"]).expect("Failed to run list");
    let json = anonymous.json().expect("Invalid JSON");
    assertions::assert_view_state(&json, "idle").unwrap();

    let scoped = world
        .run(&["list", "bookings", "--actor", "p-2"])
        .expect("Failed to run list");
    let json = scoped.json().expect("Invalid JSON");
    assertions::assert_item_count(&json, 1).unwrap();
    assert_eq!(json["content"]["view"]["items"][0]["id"], "2");
    assert_eq!(json["content"]["filters"]["practitioner"], "p-2");
}

#[test]
fn test_sparse_items_render_with_defaults() {
    let world = TestWorld::new()
        .json()
        .with_items(Resource::Services, vec![fixtures::sparse_item(1)]);

    let result = world.run(&["list", "services"]).expect("Failed to run list");
    let json = result.json().expect("Invalid JSON");
    let item = &json["content"]["view"]["items"][0];

    assert_eq!(item["title"], "Untitled");
    assert_eq!(item["category"], "Uncategorized");
    assert_eq!(item["price"], "0.00");
    assert_eq!(item["duration"], "N/A");
}

#[test]
fn test_plain_list_layout() {
    let world = TestWorld::new().with_items(Resource::Services, fixtures::mixed_catalog(3));

    let result = world
        .run(&["list", "services", "--layout", "list"])
        .expect("Failed to run list");
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.contains("3 services (page 1 of 1)"));
    assert!(stdout.contains("TITLE"));
    assert!(stdout.contains("Yoga Session 3"));
    assert!(!stdout.contains("Prev"));
}
