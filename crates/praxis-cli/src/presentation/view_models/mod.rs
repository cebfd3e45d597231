pub mod collection;
pub mod common;
pub mod favorites;
pub mod item;
pub mod mutation;
pub mod result;
pub mod system;

use std::fmt;

pub use collection::{
    CollectionPageViewModel, CollectionStateViewModel, EmptyKindViewModel, FilterSummary,
    ItemCardViewModel, PaginationViewModel,
};
pub use common::{DisplayOptions, Guidance, StatusBadge, StatusLevel, ViewMode};
pub use favorites::{FavoriteToggleViewModel, FavoritesListViewModel, MergeSummary};
pub use item::ItemDetailViewModel;
pub use mutation::{
    FieldErrorViewModel, MutationAction, MutationResultViewModel, NotificationViewModel,
    ValidationErrorsViewModel,
};
pub use result::CommandResultViewModel;
pub use system::{ConfigViewModel, SeedCount, SeedResultViewModel};

/// Bridge from a view model (data) to its text view (layout).
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
