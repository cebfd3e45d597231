use praxis_engine::{FilterState, ViewState, apply_locally};
use praxis_types::{ActorId, ItemId, ItemStatus, ListQuery, RemotePage, Selection, SortKey};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use crate::cache::{QueryKey, SharedCache, lock};
use crate::client::ResourceClient;
use crate::source::{CollectionConfig, FetchTicket, SourceMode, SourceStatus};
use crate::{RemoteError, RemoteResult};

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Loading,
    Failed(RemoteError),
    Settled,
}

/// Filter state plus fetch lifecycle for one collection view.
///
/// Setters only change the filter state. `load()` (or the split
/// `begin_fetch`/`complete` pair) turns the current state into a request.
/// Pages live in the shared `QueryCache`; this type keeps no copy.
pub struct CollectionViewModel<C> {
    client: Arc<C>,
    cache: SharedCache,
    config: CollectionConfig,
    filters: FilterState,
    actor: Option<ActorId>,
    favorites: HashSet<ItemId>,
    phase: Phase,
    generation: u64,
    in_flight: Option<FetchTicket>,
    mounted: bool,
}

impl<C: ResourceClient> CollectionViewModel<C> {
    pub fn new(client: Arc<C>, cache: SharedCache, config: CollectionConfig) -> Self {
        let filters = config.initial_filters.clone().with_sort_policy(config.sort_policy);
        Self {
            client,
            cache,
            config,
            filters,
            actor: None,
            favorites: HashSet::new(),
            phase: Phase::Idle,
            generation: 0,
            in_flight: None,
            mounted: true,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    pub fn actor(&self) -> Option<&ActorId> {
        self.actor.as_ref()
    }

    pub fn set_actor(&mut self, actor: Option<ActorId>) {
        self.actor = actor;
    }

    /// Ids rendered with the favorite marker
    pub fn set_favorites(&mut self, favorites: HashSet<ItemId>) {
        self.favorites = favorites;
    }

    // Filter transitions

    pub fn set_category(&mut self, category: Selection<String>) {
        self.filters.set_category(category);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filters.set_search(term);
    }

    pub fn set_status(&mut self, status: Selection<ItemStatus>) {
        self.filters.set_status(status);
    }

    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.filters.set_sort(sort_key);
    }

    pub fn set_page(&mut self, page: u32) {
        self.filters.set_page(page);
    }

    pub fn clear_all(&mut self) {
        self.filters.clear_all();
    }

    // Fetch lifecycle

    fn is_gated(&self) -> bool {
        self.config.requires_actor && self.actor.is_none()
    }

    /// Cache key for the current filter state.
    ///
    /// Full-set sources use one filter-free key per scope, so every local
    /// re-filter shares the same fetched collection.
    pub fn current_key(&self) -> QueryKey {
        let query = match self.config.mode {
            SourceMode::Server => {
                self.filters
                    .to_query(self.config.resource, self.config.page_size, self.actor.as_ref())
            }
            SourceMode::FullSet => {
                let query = ListQuery::full_set(self.config.resource);
                match &self.actor {
                    Some(actor) => query.practitioner(actor.clone()),
                    None => query,
                }
            }
        };
        QueryKey::new(query)
    }

    /// Decide whether the current state needs a request.
    ///
    /// Returns `None` when unmounted, gated, or already cached. Otherwise the
    /// returned ticket supersedes every earlier one.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if !self.mounted {
            return None;
        }
        if self.is_gated() {
            self.retire_in_flight();
            self.phase = Phase::Idle;
            return None;
        }

        let key = self.current_key();
        if lock(&self.cache).contains(&key) {
            self.retire_in_flight();
            self.phase = Phase::Settled;
            return None;
        }

        self.generation += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            key,
        };
        debug!(
            resource = %self.config.resource,
            generation = ticket.generation,
            "issuing fetch"
        );
        self.phase = Phase::Loading;
        self.in_flight = Some(ticket.clone());
        Some(ticket)
    }

    /// Any request still outstanding no longer describes what is on screen.
    fn retire_in_flight(&mut self) {
        if self.in_flight.take().is_some() {
            self.generation += 1;
        }
    }

    /// Apply a finished request. Returns false when the result was discarded
    /// because a newer request, a cache hit or an unmount superseded it.
    pub fn complete(&mut self, ticket: FetchTicket, result: RemoteResult<RemotePage>) -> bool {
        if !self.mounted || self.in_flight.as_ref() != Some(&ticket) {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        match result {
            Ok(page) => {
                debug!(
                    generation = ticket.generation,
                    items = page.items.len(),
                    total = page.total_count,
                    "fetch completed"
                );
                lock(&self.cache).insert(ticket.key, page);
                self.phase = Phase::Settled;
            }
            Err(err) => {
                debug!(generation = ticket.generation, error = %err, "fetch failed");
                self.phase = Phase::Failed(err);
            }
        }
        self.in_flight = None;
        true
    }

    /// Fetch the current state if it is not already cached.
    pub async fn load(&mut self) {
        if let Some(ticket) = self.begin_fetch() {
            let result = self.client.list(&ticket.key.query).await;
            self.complete(ticket, result);
        }
    }

    /// Re-issue the current query after a failure.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Drop the cached entry for the current state and fetch it again.
    pub async fn refresh(&mut self) {
        let key = self.current_key();
        lock(&self.cache).remove(&key);
        self.load().await;
    }

    /// Stop applying results. In-flight requests complete into the void.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        self.in_flight = None;
    }

    pub fn in_flight(&self) -> Option<&FetchTicket> {
        self.in_flight.as_ref()
    }

    pub fn status(&self) -> SourceStatus {
        if self.is_gated() {
            return SourceStatus::Idle;
        }
        match &self.phase {
            Phase::Idle => SourceStatus::Idle,
            Phase::Loading => SourceStatus::Loading,
            Phase::Failed(err) => SourceStatus::Error(err.clone()),
            Phase::Settled => match lock(&self.cache).get(&self.current_key()) {
                Some(page) => SourceStatus::Ready(page.clone()),
                // Invalidated since it settled; the next load refetches
                None => SourceStatus::Idle,
            },
        }
    }

    /// Render-ready view of the current state
    pub fn snapshot(&self) -> ViewState {
        match self.status() {
            SourceStatus::Idle => ViewState::Idle,
            SourceStatus::Loading => ViewState::loading(self.config.page_size),
            SourceStatus::Error(err) => ViewState::failed(err.to_string(), err.is_retryable()),
            SourceStatus::Ready(page) => {
                let page = match self.config.mode {
                    SourceMode::Server => page,
                    SourceMode::FullSet => apply_locally(&page.items, &self.filters, self.config.page_size),
                };
                ViewState::from_page(&page, &self.filters, self.config.page_size, &self.favorites)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::shared_cache;
    use crate::client::MemoryBackend;
    use praxis_engine::EmptyKind;
    use praxis_types::{RawItem, Resource};
    use serde_json::json;

    fn backend() -> Arc<MemoryBackend> {
        Arc::new(MemoryBackend::with_items(
            Resource::Services,
            vec![
                RawItem::from_value(json!({"id": 1, "title": "Vinyasa", "category": "Yoga", "practitioner_id": "p-1"})),
                RawItem::from_value(json!({"id": 2, "title": "Sound Bath", "category": "Meditation", "practitioner_id": "p-1"})),
                RawItem::from_value(json!({"id": 3, "title": "Yin", "category": "Yoga", "practitioner_id": "p-2"})),
            ],
        ))
    }

    fn full_set_config() -> CollectionConfig {
        CollectionConfig::new(Resource::Services).with_mode(SourceMode::FullSet)
    }

    #[tokio::test]
    async fn test_gated_until_actor_set() {
        let mut vm = CollectionViewModel::new(backend(), shared_cache(), full_set_config().requiring_actor());

        assert!(vm.begin_fetch().is_none());
        assert_eq!(vm.status(), SourceStatus::Idle);
        assert_eq!(vm.snapshot(), ViewState::Idle);

        vm.set_actor(Some(ActorId::new("p-1")));
        vm.load().await;
        let ViewState::Ready(view) = vm.snapshot() else {
            panic!("expected ready state");
        };
        assert_eq!(view.items.len(), 2);
    }

    #[tokio::test]
    async fn test_full_set_filters_locally_from_one_fetch() {
        let cache = shared_cache();
        let mut vm = CollectionViewModel::new(backend(), cache.clone(), full_set_config());
        vm.load().await;

        vm.set_category(Selection::Only("yoga".to_string()));
        assert!(vm.begin_fetch().is_none(), "full-set key is filter-free");

        let ViewState::Ready(view) = vm.snapshot() else {
            panic!("expected ready state");
        };
        assert_eq!(view.items.len(), 2);
        assert_eq!(lock(&cache).len(), 1);
    }

    #[tokio::test]
    async fn test_no_matches_offers_clear_filters() {
        let mut vm = CollectionViewModel::new(backend(), shared_cache(), full_set_config());
        vm.load().await;
        vm.set_search("aerial silks");

        assert_eq!(vm.snapshot(), ViewState::Empty { kind: EmptyKind::NoMatches });

        vm.clear_all();
        assert!(vm.snapshot().is_ready());
    }

    #[test]
    fn test_unmount_discards_completion() {
        let mut vm = CollectionViewModel::new(backend(), shared_cache(), full_set_config());
        let ticket = vm.begin_fetch().unwrap();
        vm.unmount();

        assert!(!vm.complete(ticket, Ok(RemotePage::empty())));
        assert!(vm.begin_fetch().is_none());
    }

    #[test]
    fn test_failure_is_status_data() {
        let mut vm = CollectionViewModel::new(backend(), shared_cache(), full_set_config());
        let ticket = vm.begin_fetch().unwrap();
        vm.complete(ticket, Err(RemoteError::network("connection reset")));

        assert!(matches!(vm.status(), SourceStatus::Error(_)));
        assert_eq!(
            vm.snapshot(),
            ViewState::failed("Network error: connection reset", true)
        );
    }
}
