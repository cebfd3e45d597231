use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::resource::{ItemId, Resource};

/// What a mutation intent asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Delete,
    ToggleStatus,
    Create,
}

/// A user-initiated change to one entity.
///
/// Created by the render surface, consumed exactly once by a mutation handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MutationIntent {
    Delete { resource: Resource, id: ItemId },
    ToggleStatus { resource: Resource, id: ItemId },
    Create { resource: Resource, payload: Value },
}

impl MutationIntent {
    pub fn kind(&self) -> MutationKind {
        match self {
            MutationIntent::Delete { .. } => MutationKind::Delete,
            MutationIntent::ToggleStatus { .. } => MutationKind::ToggleStatus,
            MutationIntent::Create { .. } => MutationKind::Create,
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            MutationIntent::Delete { resource, .. }
            | MutationIntent::ToggleStatus { resource, .. }
            | MutationIntent::Create { resource, .. } => *resource,
        }
    }

    pub fn target_id(&self) -> Option<&ItemId> {
        match self {
            MutationIntent::Delete { id, .. } | MutationIntent::ToggleStatus { id, .. } => Some(id),
            MutationIntent::Create { .. } => None,
        }
    }
}
