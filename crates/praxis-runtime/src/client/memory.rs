use chrono::{SecondsFormat, Utc};
use praxis_types::{ActorId, ItemId, ListQuery, RawItem, RemotePage, Resource};
use serde_json::json;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use super::{FavoritesRemote, ResourceClient};
use crate::{RemoteError, RemoteResult};

const OWNER_KEYS: &[&str] = &["practitioner_id", "practitionerId", "owner_id"];

#[derive(Default)]
struct MemoryState {
    items: HashMap<Resource, Vec<RawItem>>,
    favorites: HashMap<ActorId, BTreeSet<ItemId>>,
}

/// In-process full-set remote.
///
/// `list` ignores filters, ordering and pagination and returns the whole
/// collection (scoped to a practitioner when asked); callers re-filter
/// locally. Ids are generated as UUIDs.
#[derive(Default)]
pub struct MemoryBackend {
    state: Mutex<MemoryState>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-filled with `items` under `resource`, kept in the given order.
    pub fn with_items(resource: Resource, items: Vec<RawItem>) -> Self {
        let backend = Self::new();
        backend.lock().items.insert(resource, items);
        backend
    }

    pub fn len(&self, resource: Resource) -> usize {
        self.lock().items.get(&resource).map_or(0, Vec::len)
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn owned_by(item: &RawItem, actor: &ActorId) -> bool {
    item.text_of(OWNER_KEYS).as_deref() == Some(actor.as_str())
}

fn missing(resource: Resource, id: &ItemId) -> RemoteError {
    RemoteError::not_found(format!("{}/{}", resource, id))
}

impl ResourceClient for MemoryBackend {
    async fn list(&self, query: &ListQuery) -> RemoteResult<RemotePage> {
        let state = self.lock();
        let items: Vec<RawItem> = state
            .items
            .get(&query.resource)
            .into_iter()
            .flatten()
            .filter(|item| match &query.practitioner {
                Some(actor) => owned_by(item, actor),
                None => true,
            })
            .cloned()
            .collect();
        Ok(RemotePage::whole(items))
    }

    async fn get(&self, resource: Resource, id: &ItemId) -> RemoteResult<RawItem> {
        self.lock()
            .items
            .get(&resource)
            .and_then(|items| items.iter().find(|item| item.id().as_ref() == Some(id)))
            .cloned()
            .ok_or_else(|| missing(resource, id))
    }

    async fn create(
        &self,
        resource: Resource,
        owner: Option<&ActorId>,
        payload: RawItem,
    ) -> RemoteResult<RawItem> {
        let mut item = payload.with("id", json!(Uuid::new_v4().to_string()));
        if item.get("created_at").is_none() {
            item.insert(
                "created_at",
                json!(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            );
        }
        if let Some(owner) = owner {
            item.insert("practitioner_id", json!(owner.as_str()));
        }

        self.lock().items.entry(resource).or_default().push(item.clone());
        Ok(item)
    }

    async fn update(&self, resource: Resource, id: &ItemId, patch: RawItem) -> RemoteResult<RawItem> {
        let mut state = self.lock();
        let item = state
            .items
            .get_mut(&resource)
            .and_then(|items| items.iter_mut().find(|item| item.id().as_ref() == Some(id)))
            .ok_or_else(|| missing(resource, id))?;

        for (key, value) in patch.as_map() {
            if key != "id" {
                item.insert(key.clone(), value.clone());
            }
        }
        Ok(item.clone())
    }

    async fn delete(&self, resource: Resource, id: &ItemId) -> RemoteResult<()> {
        let mut state = self.lock();
        let items = state.items.entry(resource).or_default();
        let before = items.len();
        items.retain(|item| item.id().as_ref() != Some(id));
        if items.len() == before {
            return Err(missing(resource, id));
        }
        Ok(())
    }
}

impl FavoritesRemote for MemoryBackend {
    async fn list_favorites(&self, actor: &ActorId) -> RemoteResult<Vec<ItemId>> {
        Ok(self
            .lock()
            .favorites
            .get(actor)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn add_favorite(&self, actor: &ActorId, id: &ItemId) -> RemoteResult<()> {
        self.lock()
            .favorites
            .entry(actor.clone())
            .or_default()
            .insert(id.clone());
        Ok(())
    }

    async fn remove_favorite(&self, actor: &ActorId, id: &ItemId) -> RemoteResult<()> {
        if let Some(ids) = self.lock().favorites.get_mut(actor) {
            ids.remove(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RemoteErrorKind;

    #[tokio::test]
    async fn test_list_returns_whole_collection() {
        let backend = MemoryBackend::with_items(
            Resource::Services,
            vec![
                RawItem::from_value(json!({"id": 1, "title": "A"})),
                RawItem::from_value(json!({"id": 2, "title": "B"})),
            ],
        );
        let mut query = ListQuery::full_set(Resource::Services);
        query.search = Some("A".to_string());
        query.page = Some(2);
        query.page_size = Some(1);

        let page = backend.list(&query).await.unwrap();
        assert_eq!(page.total_count, 2);
        assert!(!page.has_next);
    }

    #[tokio::test]
    async fn test_create_assigns_uuid_and_owner() {
        let backend = MemoryBackend::new();
        let owner = ActorId::new("p-1");
        let created = backend
            .create(Resource::Services, Some(&owner), RawItem::from_value(json!({"title": "New"})))
            .await
            .unwrap();

        let id = created.id().unwrap();
        assert!(Uuid::parse_str(id.as_str()).is_ok());

        let scoped = ListQuery::full_set(Resource::Services).practitioner(owner);
        assert_eq!(backend.list(&scoped).await.unwrap().items.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let backend = MemoryBackend::new();
        let err = backend
            .delete(Resource::Services, &ItemId::new("42"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, RemoteErrorKind::NotFound);
    }
}
