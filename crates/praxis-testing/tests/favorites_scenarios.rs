//! Anonymous favorites persisted on disk, merged into the server set at login.

use praxis_runtime::{
    FAVORITES_KEY, FavoritesRemote, FavoritesStore, FileStorage, KeyValueStorage, MergeReport, RemoteError,
};
use praxis_testing::{Call, FlakyClient, Op};
use praxis_types::{ActorId, ItemId, Resource};
use tempfile::TempDir;

fn ids(values: &[&str]) -> Vec<ItemId> {
    values.iter().map(|v| ItemId::new(*v)).collect()
}

#[test]
fn test_anonymous_favorites_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");

    let store = FavoritesStore::new(FileStorage::new(&path));
    store.toggle_local(&ItemId::new("3")).unwrap();
    store.toggle_local(&ItemId::new("9")).unwrap();
    drop(store);

    let reopened = FavoritesStore::new(FileStorage::new(&path));
    assert_eq!(reopened.ids().unwrap().into_iter().collect::<Vec<_>>(), ids(&["3", "9"]));
}

#[test]
fn test_corrupt_storage_file_reads_as_no_favorites() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = FavoritesStore::new(FileStorage::new(&path));
    assert!(store.ids().unwrap().is_empty());
    assert!(store.toggle_local(&ItemId::new("1")).unwrap());
}

#[tokio::test]
async fn test_login_merge_pushes_only_missing_ids() {
    let temp_dir = TempDir::new().unwrap();
    let remote = FlakyClient::with_items(Resource::Services, vec![]);
    let actor = ActorId::new("u-7");
    remote.add_favorite(&actor, &ItemId::new("2")).await.unwrap();

    let mut store = FavoritesStore::new(FileStorage::new(temp_dir.path().join("storage.json")));
    for id in ["1", "2", "5"] {
        store.toggle_local(&ItemId::new(id)).unwrap();
    }

    let report = store.merge_on_login(&remote, actor.clone()).await.unwrap();
    assert_eq!(report, MergeReport { pushed: 2, total: 3 });
    assert_eq!(store.storage().get(FAVORITES_KEY).unwrap(), None);

    let pushed: Vec<Call> = remote
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::AddFavorite(..)))
        .collect();
    assert_eq!(
        pushed,
        vec![
            Call::AddFavorite(actor.clone(), ItemId::new("2")),
            Call::AddFavorite(actor.clone(), ItemId::new("1")),
            Call::AddFavorite(actor.clone(), ItemId::new("5")),
        ]
    );

    let calls_before = remote.count(Op::Favorites);
    let again = store.merge_on_login(&remote, actor.clone()).await.unwrap();
    assert_eq!(again.pushed, 0);
    assert_eq!(remote.count(Op::Favorites), calls_before);
}

#[tokio::test]
async fn test_failed_push_keeps_local_blob_for_retry() {
    let temp_dir = TempDir::new().unwrap();
    let remote = FlakyClient::with_items(Resource::Services, vec![]);
    let actor = ActorId::new("u-7");

    let mut store = FavoritesStore::new(FileStorage::new(temp_dir.path().join("storage.json")));
    store.toggle_local(&ItemId::new("4")).unwrap();

    remote.fail_next(Op::Favorites, RemoteError::network("offline"));
    assert!(store.merge_on_login(&remote, actor.clone()).await.is_err());
    assert!(store.synced_actor().is_none());
    assert!(store.storage().get(FAVORITES_KEY).unwrap().is_some());

    let report = store.merge_on_login(&remote, actor.clone()).await.unwrap();
    assert_eq!(report.pushed, 1);
    assert_eq!(remote.list_favorites(&actor).await.unwrap(), ids(&["4"]));
}

#[tokio::test]
async fn test_toggle_after_login_goes_to_server() {
    let temp_dir = TempDir::new().unwrap();
    let remote = FlakyClient::with_items(Resource::Services, vec![]);
    let actor = ActorId::new("u-3");

    let mut store = FavoritesStore::new(FileStorage::new(temp_dir.path().join("storage.json")));
    store.merge_on_login(&remote, actor.clone()).await.unwrap();

    assert!(store.toggle(&remote, &ItemId::new("11")).await.unwrap());
    assert_eq!(remote.list_favorites(&actor).await.unwrap(), ids(&["11"]));
    assert_eq!(store.storage().get(FAVORITES_KEY).unwrap(), None);
}
