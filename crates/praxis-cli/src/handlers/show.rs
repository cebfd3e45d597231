use anyhow::{Context, Result};
use praxis_runtime::ResourceClient;
use praxis_types::{ItemId, Resource};

use super::HandlerContext;
use crate::presentation::presenters;

pub async fn handle(ctx: &HandlerContext, resource: Resource, id: &str) -> Result<()> {
    let backend = ctx.backend()?;
    let raw = backend
        .get(resource, &ItemId::new(id))
        .await
        .with_context(|| format!("Could not load {} {}", resource, id))?;

    let favorites = ctx.favorites().id_set()?;
    ctx.render(presenters::present_item(resource, raw, &favorites))
}
