use serde::Serialize;
use std::fmt;

use super::collection::ItemCardViewModel;
use super::{CreateView, DisplayOptions};

#[derive(Debug, Serialize)]
pub struct ItemDetailViewModel {
    pub resource: String,
    pub item: ItemCardViewModel,
    pub first_published_at: Option<String>,
    pub location: Option<String>,
    /// The item exactly as the remote returned it
    pub raw: serde_json::Value,
}

impl CreateView for ItemDetailViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::item::ItemDetailView;
        Box::new(ItemDetailView::new(self, options))
    }
}
