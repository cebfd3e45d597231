use praxis_types::{ItemId, ListQuery, RawItem, RemotePage, Resource};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Cache shared between view-models and mutation handlers.
///
/// The lock is never held across an `.await`.
pub type SharedCache = Arc<Mutex<QueryCache>>;

pub fn shared_cache() -> SharedCache {
    Arc::new(Mutex::new(QueryCache::default()))
}

pub(crate) fn lock(cache: &SharedCache) -> MutexGuard<'_, QueryCache> {
    cache.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One cache slot: a resource plus the exact request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: Resource,
    pub query: ListQuery,
}

impl QueryKey {
    pub fn new(query: ListQuery) -> Self {
        Self {
            resource: query.resource,
            query,
        }
    }
}

/// Entries of one resource captured before an optimistic write
#[derive(Debug, Clone)]
pub struct CacheSnapshot {
    resource: Resource,
    entries: Vec<(QueryKey, RemotePage)>,
}

/// Fetched pages keyed by `QueryKey`; the single source of truth for
/// what has been loaded.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, RemotePage>,
}

impl QueryCache {
    pub fn insert(&mut self, key: QueryKey, page: RemotePage) {
        self.entries.insert(key, page);
    }

    pub fn get(&self, key: &QueryKey) -> Option<&RemotePage> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &QueryKey) -> Option<RemotePage> {
        self.entries.remove(key)
    }

    /// Drop every entry of `resource`; other resources are untouched.
    pub fn invalidate(&mut self, resource: Resource) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.resource != resource);
        let removed = before - self.entries.len();
        debug!(resource = %resource, removed, "invalidated cache entries");
        removed
    }

    /// First cached copy of an item, searching every page of `resource`.
    pub fn find_item(&self, resource: Resource, id: &ItemId) -> Option<RawItem> {
        self.entries
            .iter()
            .filter(|(key, _)| key.resource == resource)
            .flat_map(|(_, page)| page.items.iter())
            .find(|item| item.id().as_ref() == Some(id))
            .cloned()
    }

    /// Replace every cached copy of an item. Returns how many copies changed.
    pub fn set_item(&mut self, resource: Resource, id: &ItemId, item: RawItem) -> usize {
        let mut replaced = 0;
        for (key, page) in self.entries.iter_mut() {
            if key.resource != resource {
                continue;
            }
            for slot in page.items.iter_mut() {
                if slot.id().as_ref() == Some(id) {
                    *slot = item.clone();
                    replaced += 1;
                }
            }
        }
        replaced
    }

    pub fn snapshot(&self, resource: Resource) -> CacheSnapshot {
        CacheSnapshot {
            resource,
            entries: self
                .entries
                .iter()
                .filter(|(key, _)| key.resource == resource)
                .map(|(key, page)| (key.clone(), page.clone()))
                .collect(),
        }
    }

    /// Put a resource back exactly as it was when `snapshot` was taken.
    pub fn restore(&mut self, snapshot: CacheSnapshot) {
        self.entries.retain(|key, _| key.resource != snapshot.resource);
        self.entries.extend(snapshot.entries);
        debug!(resource = %snapshot.resource, "restored cache snapshot");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_of(ids: &[i64]) -> RemotePage {
        RemotePage::whole(
            ids.iter()
                .map(|id| RawItem::from_value(json!({"id": id, "status": "draft"})))
                .collect(),
        )
    }

    fn key(resource: Resource, page: u32) -> QueryKey {
        let mut query = ListQuery::full_set(resource);
        query.page = Some(page);
        query.page_size = Some(20);
        QueryKey::new(query)
    }

    #[test]
    fn test_distinct_queries_cached_separately() {
        let mut cache = QueryCache::default();
        cache.insert(key(Resource::Services, 1), page_of(&[1]));
        cache.insert(key(Resource::Services, 2), page_of(&[2]));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&key(Resource::Services, 2)).unwrap().items.len(), 1);
    }

    #[test]
    fn test_invalidate_is_scoped_to_resource() {
        let mut cache = QueryCache::default();
        cache.insert(key(Resource::Services, 1), page_of(&[1]));
        cache.insert(key(Resource::Services, 2), page_of(&[2]));
        cache.insert(key(Resource::Bookings, 1), page_of(&[3]));

        assert_eq!(cache.invalidate(Resource::Services), 2);
        assert!(cache.contains(&key(Resource::Bookings, 1)));
        assert!(!cache.contains(&key(Resource::Services, 1)));
    }

    #[test]
    fn test_set_item_then_restore() {
        let mut cache = QueryCache::default();
        cache.insert(key(Resource::Services, 1), page_of(&[1, 2]));
        let snapshot = cache.snapshot(Resource::Services);

        let patched = RawItem::from_value(json!({"id": 2, "status": "active"}));
        assert_eq!(cache.set_item(Resource::Services, &ItemId::from(2), patched), 1);
        assert_eq!(
            cache.find_item(Resource::Services, &ItemId::from(2)).unwrap().get("status"),
            Some(&json!("active"))
        );

        cache.restore(snapshot);
        assert_eq!(
            cache.find_item(Resource::Services, &ItemId::from(2)).unwrap().get("status"),
            Some(&json!("draft"))
        );
    }
}
