use praxis_engine::{EmptyKind, FilterState, ViewState};
use praxis_runtime::{Config, DEFAULT_PAGE_SIZE};
use praxis_types::{ActorId, DisplayItem, Resource, SortKey};

use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CollectionPageViewModel, CollectionStateViewModel, CommandResultViewModel, EmptyKindViewModel,
    FilterSummary, Guidance, ItemCardViewModel, PaginationViewModel, StatusBadge,
};

/// What `praxis list` falls back to when a flag is left out.
///
/// Suggested commands only spell out the settings that differ from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDefaults {
    pub sort: SortKey,
    pub page_size: u32,
}

impl Default for ListDefaults {
    fn default() -> Self {
        Self {
            sort: SortKey::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<&Config> for ListDefaults {
    fn from(config: &Config) -> Self {
        Self {
            sort: config.default_sort,
            page_size: config.page_size,
        }
    }
}

pub fn present_collection(
    resource: Resource,
    filters: &FilterState,
    page_size: u32,
    practitioner: Option<&ActorId>,
    defaults: ListDefaults,
    state: ViewState,
) -> CommandResultViewModel<CollectionPageViewModel> {
    let summary = summarize_filters(filters, page_size, practitioner);
    let view = build_state(state);

    let result = CommandResultViewModel::new(CollectionPageViewModel {
        resource: resource.as_str().to_string(),
        filters: summary,
        view,
    });
    add_collection_guidance(resource, defaults, result)
}

pub(crate) fn card(item: DisplayItem) -> ItemCardViewModel {
    ItemCardViewModel {
        id: item.id.to_string(),
        title: item.title,
        subtitle: item.subtitle,
        category: item.category,
        status: item.status.as_str().to_string(),
        status_label: item.status.label().to_string(),
        price: item.price,
        price_cents: item.price_cents,
        duration: item.duration,
        duration_minutes: item.duration_minutes,
        image_url: item.image_url,
        created_at: item.created_at.map(|ts| ts.to_rfc3339()),
        is_favorite: item.is_favorite,
    }
}

/// "service" / "services" for badges
pub(crate) fn noun(resource: Resource, count: u64) -> String {
    let plural = resource.as_str().replace('_', " ");
    if count == 1 {
        plural.trim_end_matches('s').to_string()
    } else {
        plural
    }
}

fn summarize_filters(filters: &FilterState, page_size: u32, practitioner: Option<&ActorId>) -> FilterSummary {
    FilterSummary {
        category: filters.active_category().as_option().cloned(),
        search: filters.effective_search().map(str::to_string),
        status: filters.status_filter().as_option().map(|s| s.as_str().to_string()),
        sort: filters.sort_key().as_str().to_string(),
        page: filters.page(),
        page_size,
        practitioner: practitioner.map(|actor| actor.to_string()),
    }
}

fn build_state(state: ViewState) -> CollectionStateViewModel {
    match state {
        ViewState::Idle => CollectionStateViewModel::Idle,
        ViewState::Loading { skeletons } => CollectionStateViewModel::Loading { skeletons },
        ViewState::Failed { message, retryable } => CollectionStateViewModel::Failed { message, retryable },
        ViewState::Empty { kind } => CollectionStateViewModel::Empty {
            kind: match kind {
                EmptyKind::NoData => EmptyKindViewModel::NoData,
                EmptyKind::NoMatches => EmptyKindViewModel::NoMatches,
            },
            message: kind.message().to_string(),
            can_clear_filters: kind.offers_clear_filters(),
        },
        ViewState::Ready(ready) => CollectionStateViewModel::Ready {
            pagination: PaginationViewModel {
                visible: ready.controls.is_needed(),
                current: ready.controls.current,
                total_pages: ready.controls.total_pages,
                total_count: ready.controls.total_count,
                slots: ready.controls.slots,
                has_next: ready.controls.has_next,
                has_prev: ready.controls.has_prev,
            },
            items: ready.items.into_iter().map(card).collect(),
        },
    }
}

/// The `praxis list` invocation that reproduces these filters on `page`.
fn list_command(resource: Resource, filters: &FilterSummary, defaults: ListDefaults, page: u32) -> String {
    let mut command = fmt::list(resource);
    if let Some(category) = &filters.category {
        command.push_str(&format!(" --category {}", quote(category)));
    }
    if let Some(search) = &filters.search {
        command.push_str(&format!(" --search {}", quote(search)));
    }
    if let Some(status) = &filters.status {
        command.push_str(&format!(" --status {}", status.replace('_', "-")));
    }
    if filters.sort != defaults.sort.as_str() {
        command.push_str(&format!(" --sort {}", filters.sort.replace('_', "-")));
    }
    command.push_str(&scope_args(filters, defaults));
    command.push_str(&format!(" --page {}", page));
    command
}

/// Page size and practitioner survive clearing the filters.
fn scope_args(filters: &FilterSummary, defaults: ListDefaults) -> String {
    let mut args = String::new();
    if filters.page_size != defaults.page_size {
        args.push_str(&format!(" --page-size {}", filters.page_size));
    }
    if let Some(practitioner) = &filters.practitioner {
        args.push_str(&format!(" --actor {}", practitioner));
    }
    args
}

fn quote(value: &str) -> String {
    if value.contains(char::is_whitespace) {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

fn add_collection_guidance(
    resource: Resource,
    defaults: ListDefaults,
    mut result: CommandResultViewModel<CollectionPageViewModel>,
) -> CommandResultViewModel<CollectionPageViewModel> {
    let filters = result.content.filters.clone();

    let (badge, suggestions) = match &result.content.view {
        CollectionStateViewModel::Idle => (
            StatusBadge::info(format!("Sign in to see {}", noun(resource, 2))),
            vec![Guidance::new("List as a practitioner").with_command(format!("{} --actor <id>", fmt::list(resource)))],
        ),
        CollectionStateViewModel::Loading { .. } => (StatusBadge::info("Loading"), vec![]),
        CollectionStateViewModel::Failed { retryable, .. } => {
            let mut tips = vec![];
            if *retryable {
                tips.push(Guidance::new("Try again").with_command(list_command(resource, &filters, defaults, filters.page)));
            }
            (StatusBadge::error(format!("Could not load {}", noun(resource, 2))), tips)
        }
        CollectionStateViewModel::Empty { kind, .. } => match kind {
            EmptyKindViewModel::NoData => (
                StatusBadge::info(format!("No {} yet", noun(resource, 2))),
                vec![Guidance::new("Load the demo catalog").with_command(cmd::SEED)],
            ),
            EmptyKindViewModel::NoMatches => (
                StatusBadge::warning("No matches"),
                vec![Guidance::new("Clear all filters").with_command(format!(
                    "{}{}",
                    fmt::list(resource),
                    scope_args(&filters, defaults)
                ))],
            ),
        },
        CollectionStateViewModel::Ready { items, pagination } => {
            let mut tips = vec![];
            let badge = if items.is_empty() {
                tips.push(
                    Guidance::new("Back to the first page").with_command(list_command(resource, &filters, defaults, 1)),
                );
                StatusBadge::warning(format!("Page {} is empty", pagination.current))
            } else {
                StatusBadge::success(format!(
                    "{} {} (page {} of {})",
                    pagination.total_count,
                    noun(resource, pagination.total_count),
                    pagination.current,
                    pagination.total_pages.max(1)
                ))
            };
            if pagination.has_next && !items.is_empty() {
                tips.push(
                    Guidance::new("Next page")
                        .with_command(list_command(resource, &filters, defaults, pagination.current + 1)),
                );
            }
            if let Some(first) = items.first() {
                tips.push(Guidance::new("Open an item").with_command(fmt::show(resource, &first.id)));
            }
            (badge, tips)
        }
    };

    result = result.with_badge(badge);
    for tip in suggestions {
        result = result.with_suggestion(tip);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Cli, Commands};
    use crate::types::ResourceArg;
    use clap::Parser;
    use praxis_types::{ItemStatus, RawItem, RemotePage};
    use serde_json::json;
    use std::collections::HashSet;

    fn ready(total: u64, page: u32) -> (FilterState, ViewState) {
        let filters = FilterState::default().with_search("yin yoga").with_page(page);
        let items = vec![RawItem::from_value(json!({"id": 5, "title": "Yin Yoga", "price": 2500}))];
        let remote = RemotePage {
            items,
            total_count: total,
            has_next: page < 3,
            has_prev: page > 1,
        };
        let state = ViewState::from_page(&remote, &filters, 1, &HashSet::new());
        (filters, state)
    }

    #[test]
    fn test_ready_badge_and_next_page_keeps_filters() {
        let (filters, state) = ready(3, 1);
        let result = present_collection(Resource::Services, &filters, 1, None, ListDefaults::default(), state);

        let badge = result.badge.as_ref().map(|b| b.label.clone());
        assert_eq!(badge.as_deref(), Some("3 services (page 1 of 3)"));
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("praxis list services --search \"yin yoga\" --page-size 1 --page 2")
        );
    }

    #[test]
    fn test_no_matches_suggests_clearing() {
        let filters = FilterState::default().with_category("Reiki");
        let state = ViewState::from_page(&RemotePage::empty(), &filters, 20, &HashSet::new());
        let result = present_collection(Resource::StreamPosts, &filters, 20, None, ListDefaults::default(), state);

        assert_eq!(result.suggestions[0].command.as_deref(), Some("praxis list stream-posts"));
        match result.content.view {
            CollectionStateViewModel::Empty { can_clear_filters, .. } => assert!(can_clear_filters),
            other => panic!("expected empty, got {:?}", other),
        }
    }

    #[test]
    fn test_singular_noun() {
        assert_eq!(noun(Resource::Services, 1), "service");
        assert_eq!(noun(Resource::StreamPosts, 2), "stream posts");
    }

    #[test]
    fn test_failure_only_offers_retry_when_retryable() {
        let filters = FilterState::default();
        let result = present_collection(
            Resource::Bookings,
            &filters,
            20,
            None,
            ListDefaults::default(),
            ViewState::failed("bad request", false),
        );
        assert!(result.suggestions.is_empty());
        assert_eq!(result.badge.map(|b| b.label), Some("Could not load bookings".to_string()));
    }

    fn suggested<'a>(result: &'a CommandResultViewModel<CollectionPageViewModel>, description: &str) -> &'a str {
        result
            .suggestions
            .iter()
            .find(|tip| tip.description == description)
            .and_then(|tip| tip.command.as_deref())
            .unwrap_or_else(|| panic!("no {:?} suggestion", description))
    }

    #[test]
    fn test_next_page_command_round_trips_every_filter() {
        let filters = FilterState::default()
            .with_category("yoga")
            .with_search("breath")
            .with_status(ItemStatus::Draft)
            .with_sort(SortKey::PriceAsc);
        let remote = RemotePage {
            items: vec![RawItem::from_value(json!({"id": 8, "title": "Breathwork", "status": "draft"}))],
            total_count: 12,
            has_next: true,
            has_prev: false,
        };
        let state = ViewState::from_page(&remote, &filters, 5, &HashSet::new());
        let actor = ActorId::new("p-2");
        let result = present_collection(
            Resource::Bookings,
            &filters,
            5,
            Some(&actor),
            ListDefaults::default(),
            state,
        );

        let command = suggested(&result, "Next page");
        assert_eq!(
            command,
            "praxis list bookings --category yoga --search breath --status draft --sort price-asc --page-size 5 --actor p-2 --page 2"
        );

        let cli = Cli::try_parse_from(command.split_whitespace()).unwrap();
        let Commands::List(args) = cli.command else {
            panic!("expected a list command");
        };
        assert_eq!(args.resource, ResourceArg::Bookings);
        assert_eq!(args.category.as_deref(), Some("yoga"));
        assert_eq!(args.search.as_deref(), Some("breath"));
        assert_eq!(args.status.map(ItemStatus::from), Some(ItemStatus::Draft));
        assert_eq!(args.sort.map(SortKey::from), Some(SortKey::PriceAsc));
        assert_eq!(args.page_size, Some(5));
        assert_eq!(args.actor.as_deref(), Some("p-2"));
        assert_eq!(args.page, 2);
    }

    #[test]
    fn test_sort_is_spelled_out_when_config_default_differs() {
        let (filters, state) = ready(3, 1);
        let defaults = ListDefaults {
            sort: SortKey::Title,
            page_size: 1,
        };
        let result = present_collection(Resource::Services, &filters, 1, None, defaults, state);

        assert_eq!(
            suggested(&result, "Next page"),
            "praxis list services --search \"yin yoga\" --sort newest --page 2"
        );
    }

    #[test]
    fn test_clearing_filters_keeps_practitioner_and_page_size() {
        let filters = FilterState::default().with_category("Reiki");
        let state = ViewState::from_page(&RemotePage::empty(), &filters, 5, &HashSet::new());
        let actor = ActorId::new("p-1");
        let result = present_collection(
            Resource::Bookings,
            &filters,
            5,
            Some(&actor),
            ListDefaults::default(),
            state,
        );

        assert_eq!(
            suggested(&result, "Clear all filters"),
            "praxis list bookings --page-size 5 --actor p-1"
        );
    }
}
