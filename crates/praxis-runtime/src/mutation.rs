use chrono::{SecondsFormat, Utc};
use praxis_engine::{FieldError, ServiceDraft, project, validate_service};
use praxis_types::{ActorId, ItemId, ItemStatus, MutationIntent, RawItem, Resource};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::cache::{SharedCache, lock};
use crate::client::ResourceClient;
use crate::notify::Notifier;
use crate::{Error, RemoteError, Result};

/// Blocking yes/no prompt shown before destructive actions
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Confirmation that never asks (e.g. `--yes`)
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The user declined; nothing was sent
    Cancelled,
    Deleted(ItemId),
    /// Status flipped; carries the item as the remote returned it
    Toggled { item: RawItem, status: ItemStatus },
    Created(RawItem),
}

/// Applies user-initiated changes and keeps the shared cache honest.
///
/// Failures leave the cache as it was (rolling back optimistic patches),
/// push an error notification, and return the error. Nothing is retried.
pub struct MutationHandler<C> {
    client: Arc<C>,
    cache: SharedCache,
    notifier: Notifier,
    optimistic: bool,
}

impl<C: ResourceClient> MutationHandler<C> {
    pub fn new(client: Arc<C>, cache: SharedCache, notifier: Notifier) -> Self {
        Self {
            client,
            cache,
            notifier,
            optimistic: false,
        }
    }

    /// Patch cached copies before the remote confirms a toggle.
    pub fn optimistic(mut self, enabled: bool) -> Self {
        self.optimistic = enabled;
        self
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    fn fail(&self, action: &str, err: RemoteError) -> Error {
        warn!(action, error = %err, "mutation failed");
        self.notifier.error(format!("Could not {}: {}", action, err.message));
        Error::Remote(err)
    }

    pub async fn delete(&self, resource: Resource, id: &ItemId, confirm: &impl Confirm) -> Result<Outcome> {
        let prompt = format!("Delete {} {}? This cannot be undone.", resource, id);
        if !confirm.confirm(&prompt) {
            debug!(resource = %resource, id = %id, "delete cancelled");
            return Ok(Outcome::Cancelled);
        }

        match self.client.delete(resource, id).await {
            Ok(()) => {
                lock(&self.cache).invalidate(resource);
                self.notifier.success(format!("Deleted {}", id));
                Ok(Outcome::Deleted(id.clone()))
            }
            Err(err) => Err(self.fail("delete", err)),
        }
    }

    /// Flip between active and draft.
    ///
    /// The first move into active stamps `first_published_at`; later
    /// publishes keep the original timestamp.
    pub async fn toggle_status(&self, resource: Resource, id: &ItemId) -> Result<Outcome> {
        let cached = lock(&self.cache).find_item(resource, id);
        let current = match cached {
            Some(item) => item,
            None => self
                .client
                .get(resource, id)
                .await
                .map_err(|err| self.fail("update status", err))?,
        };

        let display = project(&current);
        if !resource.supports_status_toggle() {
            return Err(Error::InvalidTransition(display.status));
        }
        let next = display
            .status
            .toggled()
            .ok_or(Error::InvalidTransition(display.status))?;

        let mut patch = RawItem::new().with("status", json!(next.as_str()));
        if next == ItemStatus::Active && display.first_published_at.is_none() {
            patch.insert(
                "first_published_at",
                json!(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            );
        }

        let snapshot = if self.optimistic {
            let mut cache = lock(&self.cache);
            let snapshot = cache.snapshot(resource);
            let mut patched = current.clone();
            for (key, value) in patch.as_map() {
                patched.insert(key.clone(), value.clone());
            }
            cache.set_item(resource, id, patched);
            Some(snapshot)
        } else {
            None
        };

        match self.client.update(resource, id, patch).await {
            Ok(item) => {
                lock(&self.cache).invalidate(resource);
                self.notifier
                    .success(format!("{} is now {}", display.title, next.label().to_lowercase()));
                Ok(Outcome::Toggled { item, status: next })
            }
            Err(err) => {
                if let Some(snapshot) = snapshot {
                    lock(&self.cache).restore(snapshot);
                }
                Err(self.fail("update status", err))
            }
        }
    }

    /// Validate the draft and create it. Invalid drafts never reach the remote.
    pub async fn create(&self, resource: Resource, owner: Option<&ActorId>, draft: &ServiceDraft) -> Result<Outcome> {
        let payload = validate_service(draft).map_err(Error::Validation)?;

        match self.client.create(resource, owner, payload).await {
            Ok(item) => {
                lock(&self.cache).invalidate(resource);
                self.notifier.success(format!("Created {}", project(&item).title));
                Ok(Outcome::Created(item))
            }
            Err(err) => Err(self.fail("create", err)),
        }
    }

    /// Consume one intent from the render surface.
    pub async fn dispatch(
        &self,
        intent: MutationIntent,
        owner: Option<&ActorId>,
        confirm: &impl Confirm,
    ) -> Result<Outcome> {
        match intent {
            MutationIntent::Delete { resource, id } => self.delete(resource, &id, confirm).await,
            MutationIntent::ToggleStatus { resource, id } => self.toggle_status(resource, &id).await,
            MutationIntent::Create { resource, payload } => {
                let draft: ServiceDraft = serde_json::from_value(payload).map_err(|err| {
                    Error::Validation(vec![FieldError {
                        field: "payload",
                        message: err.to_string(),
                    }])
                })?;
                self.create(resource, owner, &draft).await
            }
        }
    }
}
