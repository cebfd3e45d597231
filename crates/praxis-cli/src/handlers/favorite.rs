use anyhow::{Context, Result};
use praxis_runtime::ResourceClient;
use praxis_types::{ActorId, ItemId, Resource};
use tracing::info;

use super::HandlerContext;
use crate::presentation::presenters;

pub async fn handle(ctx: &HandlerContext, id: &str, actor: Option<&str>) -> Result<()> {
    let backend = ctx.backend()?;
    let item = ItemId::new(id);
    backend
        .get(Resource::Services, &item)
        .await
        .with_context(|| format!("Could not favorite service {}", id))?;

    let mut store = ctx.favorites();
    let actor = actor.map(ActorId::new);

    let merge = match &actor {
        Some(actor) => Some(store.merge_on_login(backend.as_ref(), actor.clone()).await?),
        None => None,
    };
    if let Some(report) = &merge {
        info!(pushed = report.pushed, total = report.total, "merged anonymous favorites");
    }

    let is_favorite = match &actor {
        Some(_) => store.toggle(backend.as_ref(), &item).await?,
        None => store.toggle_local(&item)?,
    };

    ctx.render(presenters::present_favorite_toggle(&item, is_favorite, actor.as_ref(), merge))
}
