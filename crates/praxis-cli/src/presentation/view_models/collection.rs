use praxis_engine::PageSlot;
use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CollectionPageViewModel {
    pub resource: String,
    pub filters: FilterSummary,
    pub view: CollectionStateViewModel,
}

/// Filter state that produced this page
#[derive(Debug, Clone, Serialize)]
pub struct FilterSummary {
    pub category: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: String,
    pub page: u32,
    pub page_size: u32,
    pub practitioner: Option<String>,
}

impl FilterSummary {
    pub fn is_filtered(&self) -> bool {
        self.category.is_some() || self.search.is_some() || self.status.is_some()
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CollectionStateViewModel {
    Idle,
    Loading {
        skeletons: usize,
    },
    Failed {
        message: String,
        retryable: bool,
    },
    Empty {
        kind: EmptyKindViewModel,
        message: String,
        can_clear_filters: bool,
    },
    Ready {
        items: Vec<ItemCardViewModel>,
        pagination: PaginationViewModel,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyKindViewModel {
    NoData,
    NoMatches,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemCardViewModel {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub category: String,
    pub status: String,
    pub status_label: String,
    pub price: String,
    pub price_cents: i64,
    pub duration: String,
    pub duration_minutes: Option<u32>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationViewModel {
    pub current: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub slots: Vec<PageSlot>,
    pub has_next: bool,
    pub has_prev: bool,
    /// Whether the bar is drawn at all (more than one page)
    pub visible: bool,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for CollectionPageViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::collection::CollectionPageView;
        Box::new(CollectionPageView::new(self, options))
    }
}
