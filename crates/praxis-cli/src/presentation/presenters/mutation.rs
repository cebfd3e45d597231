use praxis_engine::{FieldError, project};
use praxis_runtime::{Notification, NotificationLevel, Outcome};
use praxis_types::Resource;

use crate::args::hints::fmt;
use crate::presentation::view_models::{
    CommandResultViewModel, FieldErrorViewModel, Guidance, MutationAction, MutationResultViewModel,
    NotificationViewModel, StatusBadge, ValidationErrorsViewModel,
};

fn notifications(drained: Vec<Notification>) -> Vec<NotificationViewModel> {
    drained
        .into_iter()
        .map(|n| NotificationViewModel {
            level: match n.level {
                NotificationLevel::Success => "success".to_string(),
                NotificationLevel::Error => "error".to_string(),
            },
            message: n.message,
        })
        .collect()
}

pub fn present_outcome(
    action: MutationAction,
    resource: Resource,
    requested_id: Option<&str>,
    outcome: Outcome,
    drained: Vec<Notification>,
) -> CommandResultViewModel<MutationResultViewModel> {
    let mut content = MutationResultViewModel {
        action,
        resource: resource.as_str().to_string(),
        id: requested_id.map(str::to_string),
        status: None,
        title: None,
        cancelled: false,
        notifications: notifications(drained),
    };

    match outcome {
        Outcome::Cancelled => {
            content.cancelled = true;
            let id = content.id.clone().unwrap_or_default();
            CommandResultViewModel::new(content)
                .with_badge(StatusBadge::info("Cancelled"))
                .with_suggestion(
                    Guidance::new("Skip the prompt").with_command(fmt::delete_yes(resource, &id)),
                )
        }
        Outcome::Deleted(id) => {
            content.id = Some(id.to_string());
            CommandResultViewModel::new(content)
                .with_badge(StatusBadge::success(format!("Deleted {} {}", resource, id)))
        }
        Outcome::Toggled { item, status } => {
            let display = project(&item);
            content.id = Some(display.id.to_string());
            content.title = Some(display.title);
            content.status = Some(status.as_str().to_string());
            CommandResultViewModel::new(content).with_badge(StatusBadge::success(status.label()))
        }
        Outcome::Created(item) => {
            let display = project(&item);
            let id = display.id.to_string();
            content.id = Some(id.clone());
            content.title = Some(display.title.clone());
            content.status = Some(display.status.as_str().to_string());
            CommandResultViewModel::new(content)
                .with_badge(StatusBadge::success(format!("Created {}", display.title)))
                .with_suggestion(Guidance::new("Review it").with_command(fmt::show(resource, &id)))
                .with_suggestion(Guidance::new("Publish it").with_command(fmt::toggle(resource, &id)))
        }
    }
}

/// Remote refusal: the cache was left as it was and the notifier holds why.
pub fn present_mutation_failure(
    action: MutationAction,
    resource: Resource,
    id: Option<&str>,
    drained: Vec<Notification>,
) -> CommandResultViewModel<MutationResultViewModel> {
    let label = match action {
        MutationAction::Delete => "Delete failed",
        MutationAction::Toggle => "Status change failed",
        MutationAction::Create => "Create failed",
    };
    CommandResultViewModel::new(MutationResultViewModel {
        action,
        resource: resource.as_str().to_string(),
        id: id.map(str::to_string),
        status: None,
        title: None,
        cancelled: false,
        notifications: notifications(drained),
    })
    .with_badge(StatusBadge::error(label))
}

pub fn present_validation_errors(
    resource: Resource,
    errors: &[FieldError],
) -> CommandResultViewModel<ValidationErrorsViewModel> {
    let label = if errors.len() == 1 {
        "1 field needs attention".to_string()
    } else {
        format!("{} fields need attention", errors.len())
    };
    CommandResultViewModel::new(ValidationErrorsViewModel {
        resource: resource.as_str().to_string(),
        errors: errors
            .iter()
            .map(|e| FieldErrorViewModel {
                field: e.field.to_string(),
                message: e.message.clone(),
            })
            .collect(),
    })
    .with_badge(StatusBadge::error(label))
}
