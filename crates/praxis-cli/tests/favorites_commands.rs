//! Anonymous favorites on disk and the merge into an actor's server set.

use praxis_runtime::{FAVORITES_KEY, FileStorage, KeyValueStorage};
use praxis_testing::{TestWorld, fixtures};
use praxis_types::Resource;

fn catalog() -> TestWorld {
    TestWorld::new()
        .json()
        .with_items(Resource::Services, fixtures::mixed_catalog(4))
}

fn favorite_flags(world: &TestWorld) -> Vec<(String, bool)> {
    let json = world.run(&["list", "services"]).unwrap().json().unwrap();
    json["content"]["view"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| {
            (
                item["id"].as_str().unwrap().to_string(),
                item["is_favorite"].as_bool().unwrap(),
            )
        })
        .collect()
}

#[test]
fn test_anonymous_favorite_marks_listing() {
    let world = catalog();

    let result = world.run(&["favorite", "2"]).expect("Failed to run favorite");
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.json().unwrap()["content"]["is_favorite"], true);

    let stored = FileStorage::new(world.paths().storage())
        .get(FAVORITES_KEY)
        .unwrap();
    assert_eq!(stored.as_deref(), Some("[\"2\"]"));

    let flags = favorite_flags(&world);
    assert!(flags.contains(&("2".to_string(), true)));
    assert_eq!(flags.iter().filter(|(_, fav)| *fav).count(), 1);

    let again = world.run(&["favorite", "2"]).unwrap();
    assert_eq!(again.json().unwrap()["content"]["is_favorite"], false);
    assert!(favorite_flags(&world).iter().all(|(_, fav)| !fav));
}

#[test]
fn test_favorite_of_missing_item_fails() {
    let world = catalog();

    let result = world.run(&["favorite", "40"]).expect("Failed to run favorite");
    assert!(!result.success());
    assert!(result.stderr().contains("Could not favorite service 40"));
    assert!(!world.paths().storage().exists());
}

#[test]
fn test_login_merges_then_toggles_on_server() {
    let world = catalog();
    world.run(&["favorite", "1"]).unwrap();
    world.run(&["favorite", "3"]).unwrap();

    let listed = world.run(&["favorites", "--actor", "u-9"]).expect("Failed to run favorites");
    assert!(listed.success(), "stderr: {}", listed.stderr());
    let json = listed.json().unwrap();
    assert_eq!(json["content"]["merge"]["pushed"], 2);
    assert_eq!(json["content"]["merge"]["total"], 2);
    assert_eq!(json["content"]["items"].as_array().unwrap().len(), 2);

    // The local blob is gone once the server owns the set
    let stored = FileStorage::new(world.paths().storage())
        .get(FAVORITES_KEY)
        .unwrap();
    assert_eq!(stored, None);

    let toggled = world.run(&["favorite", "4", "--actor", "u-9"]).unwrap();
    let json = toggled.json().unwrap();
    assert_eq!(json["content"]["merge"]["pushed"], 0);
    assert_eq!(json["content"]["is_favorite"], true);

    let db = world.open_db().unwrap();
    let server: Vec<String> = db
        .list_favorites(&praxis_types::ActorId::new("u-9"))
        .unwrap()
        .iter()
        .map(|id| id.to_string())
        .collect();
    assert_eq!(server.len(), 3);
    assert!(server.contains(&"4".to_string()));
}

#[test]
fn test_deleted_favorite_is_reported_missing() {
    let world = catalog();
    world.run(&["favorite", "2"]).unwrap();
    world.run(&["favorite", "3"]).unwrap();
    world.run(&["delete", "services", "3", "--yes"]).unwrap();

    let json = world.run(&["favorites"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["items"][0]["id"], "2");
    assert_eq!(json["content"]["missing"], serde_json::json!(["3"]));
    assert_eq!(json["badge"]["label"], "1 favorite");
}

#[test]
fn test_no_favorites_suggests_browsing() {
    let world = catalog();

    let json = world.run(&["favorites"]).unwrap().json().unwrap();
    assert_eq!(json["badge"]["label"], "No favorites");
    assert_eq!(json["suggestions"][0]["command"], "praxis list services");
}
