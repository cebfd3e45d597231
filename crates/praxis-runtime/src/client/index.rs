use praxis_index::Database;
use praxis_types::{ActorId, ItemId, ListQuery, RawItem, RemotePage, Resource};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{FavoritesRemote, ResourceClient};
use crate::{RemoteError, RemoteResult};

/// Server-mode remote backed by the SQLite store.
///
/// Filters, ordering and pagination are applied by the store, so pages come
/// back exactly as a paginating REST endpoint would return them.
#[derive(Clone)]
pub struct IndexBackend {
    db: Arc<Mutex<Database>>,
}

impl IndexBackend {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Database> {
        self.db.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the underlying store, e.g. for seeding.
    pub fn with_db<T>(&self, f: impl FnOnce(&Database) -> praxis_index::Result<T>) -> crate::Result<T> {
        Ok(f(&self.lock())?)
    }
}

fn row_id(resource: Resource, id: &ItemId) -> RemoteResult<i64> {
    id.as_str()
        .parse()
        .map_err(|_| RemoteError::not_found(format!("{}/{}", resource, id)))
}

fn remote_error(err: praxis_index::Error) -> RemoteError {
    match err {
        praxis_index::Error::NotFound(what) => RemoteError::not_found(what),
        praxis_index::Error::Query(msg) => RemoteError::rejected(msg),
        other => RemoteError::server(500, other.to_string()),
    }
}

impl ResourceClient for IndexBackend {
    async fn list(&self, query: &ListQuery) -> RemoteResult<RemotePage> {
        self.lock().list_items(query).map_err(remote_error)
    }

    async fn get(&self, resource: Resource, id: &ItemId) -> RemoteResult<RawItem> {
        let row = row_id(resource, id)?;
        self.lock()
            .get_item(resource, row)
            .map_err(remote_error)?
            .map(|record| record.into_raw())
            .ok_or_else(|| RemoteError::not_found(format!("{}/{}", resource, id)))
    }

    async fn create(
        &self,
        resource: Resource,
        owner: Option<&ActorId>,
        payload: RawItem,
    ) -> RemoteResult<RawItem> {
        self.lock()
            .insert_item(resource, owner, payload)
            .map(|record| record.into_raw())
            .map_err(remote_error)
    }

    async fn update(&self, resource: Resource, id: &ItemId, patch: RawItem) -> RemoteResult<RawItem> {
        let row = row_id(resource, id)?;
        self.lock()
            .update_item(resource, row, &patch)
            .map(|record| record.into_raw())
            .map_err(remote_error)
    }

    async fn delete(&self, resource: Resource, id: &ItemId) -> RemoteResult<()> {
        let row = row_id(resource, id)?;
        if self.lock().delete_item(resource, row).map_err(remote_error)? {
            Ok(())
        } else {
            Err(RemoteError::not_found(format!("{}/{}", resource, id)))
        }
    }
}

impl FavoritesRemote for IndexBackend {
    async fn list_favorites(&self, actor: &ActorId) -> RemoteResult<Vec<ItemId>> {
        self.lock().list_favorites(actor).map_err(remote_error)
    }

    async fn add_favorite(&self, actor: &ActorId, id: &ItemId) -> RemoteResult<()> {
        self.lock().add_favorite(actor, id).map(|_| ()).map_err(remote_error)
    }

    async fn remove_favorite(&self, actor: &ActorId, id: &ItemId) -> RemoteResult<()> {
        self.lock().remove_favorite(actor, id).map(|_| ()).map_err(remote_error)
    }
}
