use anyhow::Result;
use praxis_runtime::{MutationHandler, Notifier, shared_cache};
use praxis_types::{ItemId, Resource};

use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::MutationAction;

pub async fn handle(ctx: &HandlerContext, resource: Resource, id: &str) -> Result<()> {
    let handler = MutationHandler::new(ctx.backend()?, shared_cache(), Notifier::new()).optimistic(true);

    match handler.toggle_status(resource, &ItemId::new(id)).await {
        Ok(outcome) => ctx.render(presenters::present_outcome(
            MutationAction::Toggle,
            resource,
            Some(id),
            outcome,
            handler.notifier().drain(),
        )),
        Err(err) => Err(ctx.mutation_failed(MutationAction::Toggle, resource, Some(id), handler.notifier(), err)),
    }
}
