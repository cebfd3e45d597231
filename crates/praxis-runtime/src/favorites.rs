use praxis_types::{ActorId, ItemId};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

use crate::client::FavoritesRemote;
use crate::storage::KeyValueStorage;
use crate::Result;

/// Storage key of the anonymous favorites blob
pub const FAVORITES_KEY: &str = "praxis.favorites";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Local ids that were missing on the server and got pushed
    pub pushed: usize,
    /// Size of the server set after the merge
    pub total: usize,
}

#[derive(Debug)]
struct SyncedFavorites {
    actor: ActorId,
    ids: BTreeSet<ItemId>,
}

/// Favorite item ids.
///
/// Anonymous sessions keep them as a JSON array in key-value storage. After
/// `merge_on_login` the server set is authoritative and every toggle goes
/// to the remote.
pub struct FavoritesStore<S> {
    storage: S,
    synced: Option<SyncedFavorites>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, synced: None }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn synced_actor(&self) -> Option<&ActorId> {
        self.synced.as_ref().map(|s| &s.actor)
    }

    fn read_local(&self) -> Result<BTreeSet<ItemId>> {
        let Some(blob) = self.storage.get(FAVORITES_KEY)? else {
            return Ok(BTreeSet::new());
        };
        match serde_json::from_str::<Vec<ItemId>>(&blob) {
            Ok(ids) => Ok(ids.into_iter().collect()),
            Err(err) => {
                warn!(error = %err, "favorites blob is corrupt, treating as empty");
                Ok(BTreeSet::new())
            }
        }
    }

    fn write_local(&self, ids: &BTreeSet<ItemId>) -> Result<()> {
        let blob = serde_json::to_string(&ids.iter().collect::<Vec<_>>())?;
        self.storage.set(FAVORITES_KEY, &blob)
    }

    pub fn ids(&self) -> Result<BTreeSet<ItemId>> {
        match &self.synced {
            Some(synced) => Ok(synced.ids.clone()),
            None => self.read_local(),
        }
    }

    /// Ids as a lookup set for the projection overlay
    pub fn id_set(&self) -> Result<HashSet<ItemId>> {
        Ok(self.ids()?.into_iter().collect())
    }

    pub fn contains(&self, id: &ItemId) -> Result<bool> {
        Ok(self.ids()?.contains(id))
    }

    /// Flip one id in the local blob. Returns whether it is now a favorite.
    pub fn toggle_local(&self, id: &ItemId) -> Result<bool> {
        let mut ids = self.read_local()?;
        let now_favorite = if ids.remove(id) {
            false
        } else {
            ids.insert(id.clone());
            true
        };
        self.write_local(&ids)?;
        Ok(now_favorite)
    }

    /// Flip one id wherever favorites currently live.
    pub async fn toggle<R: FavoritesRemote>(&mut self, remote: &R, id: &ItemId) -> Result<bool> {
        let Some(synced) = self.synced.as_mut() else {
            return self.toggle_local(id);
        };

        if synced.ids.contains(id) {
            remote.remove_favorite(&synced.actor, id).await?;
            synced.ids.remove(id);
            Ok(false)
        } else {
            remote.add_favorite(&synced.actor, id).await?;
            synced.ids.insert(id.clone());
            Ok(true)
        }
    }

    /// Push local favorites missing on the server, then adopt the server set.
    ///
    /// Runs once per store; later calls for the same actor are no-ops. If a
    /// push fails the local blob is kept so the merge can be retried.
    pub async fn merge_on_login<R: FavoritesRemote>(&mut self, remote: &R, actor: ActorId) -> Result<MergeReport> {
        if let Some(synced) = &self.synced
            && synced.actor == actor
        {
            return Ok(MergeReport {
                pushed: 0,
                total: synced.ids.len(),
            });
        }

        let local = self.read_local()?;
        let mut server: BTreeSet<ItemId> = remote.list_favorites(&actor).await?.into_iter().collect();

        let mut pushed = 0;
        for id in local.difference(&server.clone()) {
            remote.add_favorite(&actor, id).await?;
            server.insert(id.clone());
            pushed += 1;
        }

        self.storage.remove(FAVORITES_KEY)?;
        debug!(actor = %actor, pushed, total = server.len(), "merged favorites on login");

        let report = MergeReport {
            pushed,
            total: server.len(),
        };
        self.synced = Some(SyncedFavorites { actor, ids: server });
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MemoryBackend;
    use crate::storage::MemoryStorage;

    fn ids(values: &[&str]) -> BTreeSet<ItemId> {
        values.iter().map(|v| ItemId::new(*v)).collect()
    }

    #[test]
    fn test_toggle_local_twice_restores() {
        let store = FavoritesStore::new(MemoryStorage::new());
        assert!(store.toggle_local(&ItemId::new("4")).unwrap());
        assert!(store.contains(&ItemId::new("4")).unwrap());
        assert!(!store.toggle_local(&ItemId::new("4")).unwrap());
        assert!(store.ids().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_blob_is_empty_and_overwritten() {
        let storage = MemoryStorage::new();
        storage.set(FAVORITES_KEY, "{oops").unwrap();
        let store = FavoritesStore::new(storage);

        assert!(store.ids().unwrap().is_empty());
        store.toggle_local(&ItemId::new("1")).unwrap();
        assert_eq!(store.storage().get(FAVORITES_KEY).unwrap(), Some(r#"["1"]"#.to_string()));
    }

    #[tokio::test]
    async fn test_merge_pushes_missing_and_clears_local() {
        let remote = MemoryBackend::new();
        let actor = ActorId::new("u-1");
        remote.add_favorite(&actor, &ItemId::new("2")).await.unwrap();

        let mut store = FavoritesStore::new(MemoryStorage::new());
        store.toggle_local(&ItemId::new("1")).unwrap();
        store.toggle_local(&ItemId::new("2")).unwrap();

        let report = store.merge_on_login(&remote, actor.clone()).await.unwrap();
        assert_eq!(report, MergeReport { pushed: 1, total: 2 });
        assert_eq!(store.storage().get(FAVORITES_KEY).unwrap(), None);
        assert_eq!(store.ids().unwrap(), ids(&["1", "2"]));

        let again = store.merge_on_login(&remote, actor.clone()).await.unwrap();
        assert_eq!(again.pushed, 0);

        assert!(!store.toggle(&remote, &ItemId::new("1")).await.unwrap());
        assert_eq!(remote.list_favorites(&actor).await.unwrap(), vec![ItemId::new("2")]);
    }
}
