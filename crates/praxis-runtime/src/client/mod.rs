mod index;
mod memory;

pub use index::IndexBackend;
pub use memory::MemoryBackend;

use praxis_types::{ActorId, ItemId, ListQuery, RawItem, RemotePage, Resource};
use std::future::Future;

use crate::RemoteResult;

/// REST-style access to remote collections.
///
/// Implementors own transport concerns (timeouts, auth headers). Futures are
/// `Send` so a client can be driven from any tokio worker.
pub trait ResourceClient {
    fn list(&self, query: &ListQuery) -> impl Future<Output = RemoteResult<RemotePage>> + Send;

    fn get(&self, resource: Resource, id: &ItemId) -> impl Future<Output = RemoteResult<RawItem>> + Send;

    /// Create an item; the returned body carries the id assigned by the remote.
    fn create(
        &self,
        resource: Resource,
        owner: Option<&ActorId>,
        payload: RawItem,
    ) -> impl Future<Output = RemoteResult<RawItem>> + Send;

    /// Partial update; returns the full updated body.
    fn update(
        &self,
        resource: Resource,
        id: &ItemId,
        patch: RawItem,
    ) -> impl Future<Output = RemoteResult<RawItem>> + Send;

    fn delete(&self, resource: Resource, id: &ItemId) -> impl Future<Output = RemoteResult<()>> + Send;
}

/// Server-side favorites of a signed-in actor
pub trait FavoritesRemote {
    fn list_favorites(&self, actor: &ActorId) -> impl Future<Output = RemoteResult<Vec<ItemId>>> + Send;

    fn add_favorite(&self, actor: &ActorId, id: &ItemId) -> impl Future<Output = RemoteResult<()>> + Send;

    fn remove_favorite(
        &self,
        actor: &ActorId,
        id: &ItemId,
    ) -> impl Future<Output = RemoteResult<()>> + Send;
}
