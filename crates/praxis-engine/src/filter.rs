use praxis_types::{ActorId, ItemStatus, ListQuery, Resource, Selection, SortKey};
use serde::{Deserialize, Serialize};

/// What a sort change does to the current page.
///
/// Filter, search, status and category changes always return to page 1.
/// Sort changes are the one dimension where list views disagree, so the
/// behaviour is an explicit choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPagePolicy {
    /// Re-order in place and stay on the current page
    #[default]
    KeepPage,
    /// Jump back to page 1 after re-ordering
    ResetPage,
}

/// Client-held description of "which subset, in what order, which page".
///
/// Pure data: setters never fetch. A higher layer observes the new state and
/// issues the request.
///
/// Only constructible through the setters, so `page` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    active_category: Selection<String>,
    search_term: String,
    status_filter: Selection<ItemStatus>,
    sort_key: SortKey,
    page: u32,
    sort_policy: SortPagePolicy,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(SortPagePolicy::default())
    }
}

impl FilterState {
    pub fn new(sort_policy: SortPagePolicy) -> Self {
        Self {
            active_category: Selection::All,
            search_term: String::new(),
            status_filter: Selection::All,
            sort_key: SortKey::default(),
            page: 1,
            sort_policy,
        }
    }

    pub fn active_category(&self) -> &Selection<String> {
        &self.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status_filter(&self) -> &Selection<ItemStatus> {
        &self.status_filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn sort_policy(&self) -> SortPagePolicy {
        self.sort_policy
    }

    pub fn set_category(&mut self, category: Selection<String>) {
        self.active_category = category;
        self.page = 1;
    }

    /// Store the term exactly as typed; whitespace is only trimmed when the
    /// term is turned into a query.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Selection<ItemStatus>) {
        self.status_filter = status;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
        if self.sort_policy == SortPagePolicy::ResetPage {
            self.page = 1;
        }
    }

    /// Pages are 1-based; 0 is clamped to 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Return to the pristine state. The sort policy is configuration, not
    /// filter state, and survives.
    pub fn clear_all(&mut self) {
        *self = Self::new(self.sort_policy);
    }

    /// Swap the sort policy without touching any filter.
    pub fn with_sort_policy(mut self, sort_policy: SortPagePolicy) -> Self {
        self.sort_policy = sort_policy;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set_category(Selection::Only(category.into()));
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search(term);
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.set_status(Selection::Only(status));
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.set_sort(sort_key);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.set_page(page);
        self
    }

    /// Search term as it will be sent, `None` when blank
    pub fn effective_search(&self) -> Option<&str> {
        let trimmed = self.search_term.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Whether any subset-narrowing filter is applied (sort and page excluded)
    pub fn has_active_filters(&self) -> bool {
        !self.active_category.is_all()
            || self.effective_search().is_some()
            || !self.status_filter.is_all()
    }

    /// Serialize into a paginated list request.
    pub fn to_query(&self, resource: Resource, page_size: u32, scope: Option<&ActorId>) -> ListQuery {
        ListQuery {
            resource,
            practitioner: scope.cloned(),
            category: self.active_category.as_option().cloned(),
            search: self.effective_search().map(str::to_string),
            status: self.status_filter.as_option().copied(),
            ordering: Some(self.sort_key),
            page: Some(self.page),
            page_size: Some(page_size.max(1)),
        }
    }
}
