use anyhow::Result;
use praxis_engine::ServiceDraft;
use praxis_runtime::{AssumeYes, MutationHandler, Notifier, shared_cache};
use praxis_types::{ActorId, MutationIntent, Resource};

use super::HandlerContext;
use crate::args::CreateArgs;
use crate::presentation::presenters;
use crate::presentation::view_models::MutationAction;

pub async fn handle(ctx: &HandlerContext, args: CreateArgs) -> Result<()> {
    let resource = Resource::Services;
    let owner = args.actor.as_deref().map(ActorId::new);
    let draft = ServiceDraft {
        title: args.title,
        description: args.description,
        category: args.category,
        price: args.price,
        duration_minutes: args.duration,
        location: args.location,
    };

    // Submitted the way the wizard submits: one create intent with the form payload
    let intent = MutationIntent::Create {
        resource,
        payload: serde_json::to_value(&draft)?,
    };

    let handler = MutationHandler::new(ctx.backend()?, shared_cache(), Notifier::new());
    match handler.dispatch(intent, owner.as_ref(), &AssumeYes).await {
        Ok(outcome) => ctx.render(presenters::present_outcome(
            MutationAction::Create,
            resource,
            None,
            outcome,
            handler.notifier().drain(),
        )),
        Err(err) => Err(ctx.mutation_failed(MutationAction::Create, resource, None, handler.notifier(), err)),
    }
}
