use praxis_runtime::MergeReport;
use praxis_types::{ActorId, DisplayItem, ItemId};

use super::collection::card;
use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, FavoriteToggleViewModel, FavoritesListViewModel, Guidance, MergeSummary,
    StatusBadge,
};

fn merge_summary(report: Option<MergeReport>) -> Option<MergeSummary> {
    report.map(|r| MergeSummary {
        pushed: r.pushed,
        total: r.total,
    })
}

pub fn present_favorite_toggle(
    id: &ItemId,
    is_favorite: bool,
    actor: Option<&ActorId>,
    merge: Option<MergeReport>,
) -> CommandResultViewModel<FavoriteToggleViewModel> {
    let badge = if is_favorite {
        StatusBadge::success("Added to favorites")
    } else {
        StatusBadge::info("Removed from favorites")
    };
    let tip = match actor {
        Some(actor) => fmt::favorites_for(actor.as_str()),
        None => cmd::FAVORITES.to_string(),
    };

    CommandResultViewModel::new(FavoriteToggleViewModel {
        id: id.to_string(),
        is_favorite,
        actor: actor.map(|a| a.to_string()),
        merge: merge_summary(merge),
    })
    .with_badge(badge)
    .with_suggestion(Guidance::new("See all favorites").with_command(tip))
}

/// `items` are the favorites that still exist; `missing` the ids that don't.
pub fn present_favorites(
    actor: Option<&ActorId>,
    merge: Option<MergeReport>,
    items: Vec<DisplayItem>,
    missing: Vec<ItemId>,
) -> CommandResultViewModel<FavoritesListViewModel> {
    let count = items.len();
    let mut result = CommandResultViewModel::new(FavoritesListViewModel {
        actor: actor.map(|a| a.to_string()),
        merge: merge_summary(merge),
        items: items.into_iter().map(card).collect(),
        missing: missing.iter().map(ItemId::to_string).collect(),
    });

    if count == 0 {
        result = result
            .with_badge(StatusBadge::info("No favorites"))
            .with_suggestion(Guidance::new("Browse services").with_command(cmd::LIST_SERVICES));
    } else {
        let label = if count == 1 {
            "1 favorite".to_string()
        } else {
            format!("{} favorites", count)
        };
        result = result.with_badge(StatusBadge::success(label));
    }
    result
}
