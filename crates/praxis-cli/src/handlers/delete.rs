use anyhow::Result;
use praxis_runtime::{AssumeYes, Confirm, MutationHandler, Notifier, shared_cache};
use praxis_types::{ItemId, Resource};
use std::io::{BufRead, Write};

use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::MutationAction;

/// Asks on stderr and reads one line from stdin. End of input means no.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }
}

pub async fn handle(ctx: &HandlerContext, resource: Resource, id: &str, yes: bool) -> Result<()> {
    let handler = MutationHandler::new(ctx.backend()?, shared_cache(), Notifier::new());
    let item = ItemId::new(id);

    let outcome = if yes {
        handler.delete(resource, &item, &AssumeYes).await
    } else {
        handler.delete(resource, &item, &StdinConfirm).await
    };

    match outcome {
        Ok(outcome) => ctx.render(presenters::present_outcome(
            MutationAction::Delete,
            resource,
            Some(id),
            outcome,
            handler.notifier().drain(),
        )),
        Err(err) => Err(ctx.mutation_failed(MutationAction::Delete, resource, Some(id), handler.notifier(), err)),
    }
}
