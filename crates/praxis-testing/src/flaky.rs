//! Resource client with failure injection, call recording and latency.
//!
//! Wraps a `MemoryBackend`; every call is recorded before it runs, so tests
//! can assert both what was sent and what was never sent.

use praxis_runtime::{FavoritesRemote, MemoryBackend, RemoteError, RemoteResult, ResourceClient};
use praxis_types::{ActorId, ItemId, ListQuery, RawItem, RemotePage, Resource};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// One recorded client call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(ListQuery),
    Get(Resource, ItemId),
    Create(Resource),
    Update(Resource, ItemId),
    Delete(Resource, ItemId),
    ListFavorites(ActorId),
    AddFavorite(ActorId, ItemId),
    RemoveFavorite(ActorId, ItemId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
    Favorites,
}

impl Call {
    fn op(&self) -> Op {
        match self {
            Call::List(_) => Op::List,
            Call::Get(..) => Op::Get,
            Call::Create(_) => Op::Create,
            Call::Update(..) => Op::Update,
            Call::Delete(..) => Op::Delete,
            Call::ListFavorites(_) | Call::AddFavorite(..) | Call::RemoveFavorite(..) => Op::Favorites,
        }
    }
}

#[derive(Default)]
struct Script {
    calls: Vec<Call>,
    failures: HashMap<Op, VecDeque<RemoteError>>,
    /// Latency per requested page; unpaginated lists use page 1
    page_latency: HashMap<u32, Duration>,
}

/// Paginated list queries are sliced to the requested page; filters and
/// ordering are not applied.
pub struct FlakyClient {
    inner: MemoryBackend,
    script: Mutex<Script>,
}

impl FlakyClient {
    pub fn new(inner: MemoryBackend) -> Self {
        Self {
            inner,
            script: Mutex::new(Script::default()),
        }
    }

    pub fn with_items(resource: Resource, items: Vec<RawItem>) -> Self {
        Self::new(MemoryBackend::with_items(resource, items))
    }

    pub fn inner(&self) -> &MemoryBackend {
        &self.inner
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().expect("flaky client script poisoned")
    }

    /// Make the next call of `op` fail with `error`. Queued failures are
    /// consumed in order.
    pub fn fail_next(&self, op: Op, error: RemoteError) {
        self.script().failures.entry(op).or_default().push_back(error);
    }

    /// Delay list responses for `page` by `latency`.
    pub fn delay_page(&self, page: u32, latency: Duration) {
        self.script().page_latency.insert(page, latency);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script().calls.clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.script().calls.iter().filter(|c| c.op() == op).count()
    }

    /// Record `call` and pop the failure queued for its operation, if any.
    fn record(&self, call: Call) -> RemoteResult<()> {
        let mut script = self.script();
        let op = call.op();
        script.calls.push(call);
        match script.failures.get_mut(&op).and_then(VecDeque::pop_front) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ResourceClient for FlakyClient {
    async fn list(&self, query: &ListQuery) -> RemoteResult<RemotePage> {
        let latency = self
            .script()
            .page_latency
            .get(&query.page.unwrap_or(1))
            .copied();
        let outcome = self.record(Call::List(query.clone()));
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        outcome?;
        let mut page = self.inner.list(query).await?;
        if let (Some(number), Some(size)) = (query.page, query.page_size) {
            let start = ((number.max(1) - 1) * size) as usize;
            let total = page.items.len();
            page.items = page.items.into_iter().skip(start).take(size as usize).collect();
            page.has_prev = number > 1;
            page.has_next = start + page.items.len() < total;
        }
        Ok(page)
    }

    async fn get(&self, resource: Resource, id: &ItemId) -> RemoteResult<RawItem> {
        self.record(Call::Get(resource, id.clone()))?;
        self.inner.get(resource, id).await
    }

    async fn create(
        &self,
        resource: Resource,
        owner: Option<&ActorId>,
        payload: RawItem,
    ) -> RemoteResult<RawItem> {
        self.record(Call::Create(resource))?;
        self.inner.create(resource, owner, payload).await
    }

    async fn update(&self, resource: Resource, id: &ItemId, patch: RawItem) -> RemoteResult<RawItem> {
        self.record(Call::Update(resource, id.clone()))?;
        self.inner.update(resource, id, patch).await
    }

    async fn delete(&self, resource: Resource, id: &ItemId) -> RemoteResult<()> {
        self.record(Call::Delete(resource, id.clone()))?;
        self.inner.delete(resource, id).await
    }
}

impl FavoritesRemote for FlakyClient {
    async fn list_favorites(&self, actor: &ActorId) -> RemoteResult<Vec<ItemId>> {
        self.record(Call::ListFavorites(actor.clone()))?;
        self.inner.list_favorites(actor).await
    }

    async fn add_favorite(&self, actor: &ActorId, id: &ItemId) -> RemoteResult<()> {
        self.record(Call::AddFavorite(actor.clone(), id.clone()))?;
        self.inner.add_favorite(actor, id).await
    }

    async fn remove_favorite(&self, actor: &ActorId, id: &ItemId) -> RemoteResult<()> {
        self.record(Call::RemoveFavorite(actor.clone(), id.clone()))?;
        self.inner.remove_favorite(actor, id).await
    }
}
