use std::collections::HashSet;

use praxis_types::{DisplayItem, ItemId, RemotePage};
use serde::Serialize;

use crate::filter::FilterState;
use crate::pagination::PageControls;
use crate::projection::project_all;

/// Skeleton rows shown while a page loads, regardless of page size
const MAX_SKELETONS: usize = 6;

/// Why a collection rendered nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyKind {
    /// The collection itself has no items
    NoData,
    /// Items exist but none match the active filters
    NoMatches,
}

impl EmptyKind {
    pub fn for_filters(filters: &FilterState) -> Self {
        if filters.has_active_filters() {
            EmptyKind::NoMatches
        } else {
            EmptyKind::NoData
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            EmptyKind::NoData => "Nothing here yet.",
            EmptyKind::NoMatches => "No results match the current filters.",
        }
    }

    /// Only a filtered-out collection can be recovered by clearing filters
    pub fn offers_clear_filters(&self) -> bool {
        matches!(self, EmptyKind::NoMatches)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadyView {
    pub items: Vec<DisplayItem>,
    pub controls: PageControls,
}

/// What the render surface should draw.
///
/// Loading, failure and the two empty variants are all distinct, so an error
/// can never masquerade as an empty success.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    /// Waiting for required context (e.g. a signed-in practitioner)
    Idle,
    Loading { skeletons: usize },
    Failed { message: String, retryable: bool },
    Empty { kind: EmptyKind },
    Ready(ReadyView),
}

impl ViewState {
    pub fn loading(page_size: u32) -> Self {
        ViewState::Loading {
            skeletons: (page_size as usize).clamp(1, MAX_SKELETONS),
        }
    }

    pub fn failed(message: impl Into<String>, retryable: bool) -> Self {
        ViewState::Failed {
            message: message.into(),
            retryable,
        }
    }

    pub fn from_page(
        page: &RemotePage,
        filters: &FilterState,
        page_size: u32,
        favorites: &HashSet<ItemId>,
    ) -> Self {
        if page.is_empty() && filters.page() == 1 {
            return ViewState::Empty {
                kind: EmptyKind::for_filters(filters),
            };
        }

        ViewState::Ready(ReadyView {
            items: project_all(&page.items, favorites),
            controls: PageControls::new(
                filters.page(),
                page.total_count,
                page_size,
                page.has_next,
                page.has_prev,
            ),
        })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }
}
