use anyhow::Result;
use praxis_engine::{FilterState, ViewState};
use praxis_runtime::{
    CollectionConfig, CollectionViewModel, FavoritesRemote, SourceMode, shared_cache,
};
use praxis_types::{ActorId, ItemId, Resource, Selection};
use std::collections::HashSet;
use tracing::debug;

use super::HandlerContext;
use crate::args::ListArgs;
use crate::presentation::presenters::{self, ListDefaults};
use crate::presentation::{DisplayOptions, ViewMode};

/// Bookings are a practitioner dashboard; nothing is listed without one.
fn requires_actor(resource: Resource) -> bool {
    matches!(resource, Resource::Bookings)
}

pub async fn handle(ctx: &HandlerContext, args: ListArgs) -> Result<()> {
    let resource = Resource::from(args.resource);
    let page_size = args.page_size.unwrap_or(ctx.config.page_size).max(1);
    let actor = args.actor.as_deref().map(ActorId::new);

    let mut config = CollectionConfig::new(resource)
        .with_filters(FilterState::default().with_sort(ctx.config.default_sort))
        .with_page_size(page_size)
        .with_mode(SourceMode::Server)
        .with_sort_policy(ctx.config.sort_page_policy);
    if requires_actor(resource) {
        config = config.requiring_actor();
    }

    let backend = ctx.backend()?;
    let mut view = CollectionViewModel::new(backend.clone(), shared_cache(), config);
    view.set_actor(actor.clone());

    // Order matters: every filter change returns to page 1, so the page goes last
    if let Some(category) = args.category {
        view.set_category(Selection::Only(category));
    }
    if let Some(search) = args.search {
        view.set_search(search);
    }
    if let Some(status) = args.status {
        view.set_status(Selection::Only(status.into()));
    }
    if let Some(sort) = args.sort {
        view.set_sort(sort.into());
    }
    view.set_page(args.page);

    let favorites: HashSet<ItemId> = match &actor {
        Some(actor) => backend.list_favorites(actor).await?.into_iter().collect(),
        None => ctx.favorites().id_set()?,
    };
    view.set_favorites(favorites);

    debug!(key = ?view.current_key(), "listing collection");
    view.load().await;
    let state = view.snapshot();
    let failure = match &state {
        ViewState::Failed { message, .. } => Some(message.clone()),
        _ => None,
    };

    let options = match args.layout {
        Some(layout) => DisplayOptions {
            mode: ViewMode::from(praxis_runtime::Layout::from(layout)),
            ..ctx.options
        },
        None => ctx.options,
    };
    let result = presenters::present_collection(
        resource,
        view.filters(),
        page_size,
        actor.as_ref(),
        ListDefaults::from(&ctx.config),
        state,
    );
    ctx.render_with(result, options)?;

    if let Some(message) = failure {
        anyhow::bail!("Could not load {}: {}", resource, message);
    }
    Ok(())
}
