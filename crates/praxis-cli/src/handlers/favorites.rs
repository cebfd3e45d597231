use anyhow::Result;
use praxis_engine::project_with;
use praxis_runtime::{RemoteErrorKind, ResourceClient};
use praxis_types::{ActorId, Resource};
use tracing::warn;

use super::HandlerContext;
use crate::presentation::presenters;

pub async fn handle(ctx: &HandlerContext, actor: Option<&str>) -> Result<()> {
    let backend = ctx.backend()?;
    let mut store = ctx.favorites();
    let actor = actor.map(ActorId::new);

    let merge = match &actor {
        Some(actor) => Some(store.merge_on_login(backend.as_ref(), actor.clone()).await?),
        None => None,
    };

    let ids = store.id_set()?;
    let mut items = Vec::new();
    let mut missing = Vec::new();
    for id in store.ids()? {
        match backend.get(Resource::Services, &id).await {
            Ok(raw) => items.push(project_with(&raw, &ids)),
            Err(err) if err.kind == RemoteErrorKind::NotFound => {
                warn!(id = %id, "favorite points at a missing service");
                missing.push(id);
            }
            Err(err) => return Err(err.into()),
        }
    }

    ctx.render(presenters::present_favorites(actor.as_ref(), merge, items, missing))
}
