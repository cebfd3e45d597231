use praxis_engine::{FilterState, SortPagePolicy};
use praxis_types::{RemotePage, Resource};
use serde::{Deserialize, Serialize};

use crate::RemoteError;
use crate::cache::QueryKey;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Where filtering, sorting and pagination happen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceMode {
    /// Every filter change is a new remote request
    #[default]
    Server,
    /// One unfiltered fetch; filters are applied locally
    FullSet,
}

/// Lifecycle of the current request
#[derive(Debug, Clone, PartialEq)]
pub enum SourceStatus {
    /// Not fetching (e.g. waiting for a signed-in actor)
    Idle,
    Loading,
    Error(RemoteError),
    Ready(RemotePage),
}

impl SourceStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SourceStatus::Loading)
    }
}

/// Identity of one in-flight request.
///
/// A completion is applied only while it is still the view's in-flight ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub key: QueryKey,
}

#[derive(Debug, Clone)]
pub struct CollectionConfig {
    pub initial_filters: FilterState,
    pub page_size: u32,
    pub resource: Resource,
    /// Gate fetching on a signed-in actor (practitioner-scoped views)
    pub requires_actor: bool,
    pub mode: SourceMode,
    pub sort_policy: SortPagePolicy,
}

impl CollectionConfig {
    pub fn new(resource: Resource) -> Self {
        Self {
            initial_filters: FilterState::default(),
            page_size: DEFAULT_PAGE_SIZE,
            resource,
            requires_actor: false,
            mode: SourceMode::Server,
            sort_policy: SortPagePolicy::default(),
        }
    }

    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.initial_filters = filters;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_mode(mut self, mode: SourceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_sort_policy(mut self, sort_policy: SortPagePolicy) -> Self {
        self.sort_policy = sort_policy;
        self
    }

    pub fn requiring_actor(mut self) -> Self {
        self.requires_actor = true;
        self
    }
}
