//! `praxis delete`, `toggle` and `create` against a seeded store.

use assert_cmd::cargo::cargo_bin_cmd;
use praxis_testing::{TestWorld, assertions, fixtures};
use praxis_types::Resource;
use predicates::prelude::*;

fn catalog() -> TestWorld {
    TestWorld::new()
        .json()
        .with_items(Resource::Services, fixtures::mixed_catalog(3))
}

fn listed_count(world: &TestWorld) -> usize {
    let json = world.run(&["list", "services"]).unwrap().json().unwrap();
    json["content"]["view"]["items"].as_array().map(Vec::len).unwrap_or(0)
}

#[test]
fn test_delete_without_answer_is_cancelled() {
    let world = catalog();

    let result = world.run(&["delete", "services", "2"]).expect("Failed to run delete");
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stderr().contains("Delete services 2?"));

    let json = result.json().expect("Invalid JSON");
    assert_eq!(json["content"]["cancelled"], true);
    assert_eq!(listed_count(&world), 3);
}

#[test]
fn test_delete_confirmed_on_stdin() {
    let world = catalog();

    let mut cmd = cargo_bin_cmd!("praxis");
    world
        .configure_command(&mut cmd)
        .args(["delete", "services", "2"])
        .write_stdin("y\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"action\": \"delete\""))
        .stdout(predicate::str::contains("\"cancelled\": false"));

    assert_eq!(listed_count(&world), 2);
}

#[test]
fn test_delete_with_yes_flag() {
    let world = catalog();

    let result = world
        .run(&["delete", "services", "1", "--yes"])
        .expect("Failed to run delete");
    assert!(result.success());

    let json = result.json().expect("Invalid JSON");
    assert_eq!(json["content"]["id"], "1");
    assert_eq!(json["content"]["notifications"][0]["level"], "success");

    let listed = world.run(&["list", "services"]).unwrap().json().unwrap();
    assert_eq!(
        assertions::listed_titles(&listed).unwrap(),
        vec!["Yoga Session 3", "Breathwork Session 2"]
    );
}

#[test]
fn test_delete_missing_item_fails_with_notification() {
    let world = catalog();

    let result = world
        .run(&["delete", "services", "99", "--yes"])
        .expect("Failed to run delete");
    assert!(!result.success());
    assert!(result.stderr().contains("Error:"));

    let json = result.json().expect("Invalid JSON");
    assert_eq!(json["badge"]["level"], "error");
    assert_eq!(json["content"]["notifications"][0]["level"], "error");
    assert_eq!(listed_count(&world), 3);
}

#[test]
fn test_toggle_flips_and_stamps_first_publish() {
    let world = catalog();

    let first = world.run(&["toggle", "services", "1"]).expect("Failed to toggle");
    assert!(first.success(), "stderr: {}", first.stderr());
    assert_eq!(first.json().unwrap()["content"]["status"], "draft");

    let shown = world.run(&["show", "services", "1"]).unwrap().json().unwrap();
    assert!(shown["content"]["first_published_at"].is_null());

    let second = world.run(&["toggle", "services", "1"]).expect("Failed to toggle");
    assert_eq!(second.json().unwrap()["content"]["status"], "active");

    let shown = world.run(&["show", "services", "1"]).unwrap().json().unwrap();
    assert!(shown["content"]["first_published_at"].is_string());
    assert_eq!(shown["content"]["item"]["status_label"], "Active");
}

#[test]
fn test_toggle_rejects_bookings() {
    let world = TestWorld::new().with_owned_items(
        Resource::Bookings,
        "p-1",
        vec![fixtures::sparse_item(1).with("status", serde_json::json!("confirmed"))],
    );

    let result = world.run(&["toggle", "bookings", "1"]).expect("Failed to toggle");
    assert!(!result.success());
    assert!(result.stderr().contains("Cannot toggle an item that is confirmed"));
    assert!(result.stdout().contains("Status change failed"));
}

#[test]
fn test_create_reports_every_invalid_field() {
    let world = TestWorld::new().json();

    let result = world
        .run(&["create", "--title", "Gong Bath", "--price", "free", "--description", "short"])
        .expect("Failed to run create");
    assert!(!result.success());

    let json = result.json().expect("Invalid JSON");
    let fields: Vec<&str> = json["content"]["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["description", "category", "price", "duration_minutes"]);
    assert_eq!(json["content"]["errors"][2]["message"], "Enter a valid price");

    let listed = world.run(&["list", "services"]).unwrap().json().unwrap();
    assertions::assert_view_state(&listed, "empty").unwrap();
}

#[test]
fn test_create_stores_a_draft_for_the_owner() {
    let world = TestWorld::new().json();

    let result = world
        .run(&[
            "create",
            "--title",
            "Gong Bath",
            "--description",
            "Gongs and singing bowls for deep rest",
            "--category",
            "Sound Healing",
            "--price",
            "$30",
            "--duration",
            "60",
            "--actor",
            "p-2",
        ])
        .expect("Failed to run create");
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().expect("Invalid JSON");
    assert_eq!(json["content"]["status"], "draft");
    assert_eq!(json["badge"]["label"], "Created Gong Bath");

    let listed = world
        .run(&["list", "services", "--actor", "p-2"])
        .unwrap()
        .json()
        .unwrap();
    let item = &listed["content"]["view"]["items"][0];
    assert_eq!(item["title"], "Gong Bath");
    assert_eq!(item["price"], "30.00");
    assert_eq!(item["price_cents"], 3000);
    assert_eq!(item["duration_minutes"], 60);

    let other = world
        .run(&["list", "services", "--actor", "p-1"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_view_state(&other, "empty").unwrap();
}
