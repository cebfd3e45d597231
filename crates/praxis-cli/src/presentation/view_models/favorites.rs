use serde::Serialize;
use std::fmt;

use super::collection::ItemCardViewModel;
use super::{CreateView, DisplayOptions};

#[derive(Debug, Serialize)]
pub struct FavoriteToggleViewModel {
    pub id: String,
    pub is_favorite: bool,
    pub actor: Option<String>,
    pub merge: Option<MergeSummary>,
}

/// What happened when anonymous favorites met the server set
#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    pub pushed: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct FavoritesListViewModel {
    pub actor: Option<String>,
    pub merge: Option<MergeSummary>,
    pub items: Vec<ItemCardViewModel>,
    /// Favorite ids whose item no longer exists
    pub missing: Vec<String>,
}

impl CreateView for FavoriteToggleViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::favorites::FavoriteToggleView;
        Box::new(FavoriteToggleView::new(self, options))
    }
}

impl CreateView for FavoritesListViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::favorites::FavoritesListView;
        Box::new(FavoritesListView::new(self, options))
    }
}
