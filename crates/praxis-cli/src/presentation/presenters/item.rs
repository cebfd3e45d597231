use std::collections::HashSet;

use praxis_engine::project_with;
use praxis_types::{ItemId, RawItem, Resource};

use super::collection::card;
use crate::args::hints::fmt;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, ItemDetailViewModel};

const LOCATION_KEYS: &[&str] = &["location", "address", "venue", "location_name"];

pub fn present_item(
    resource: Resource,
    raw: RawItem,
    favorites: &HashSet<ItemId>,
) -> CommandResultViewModel<ItemDetailViewModel> {
    let item = project_with(&raw, favorites);
    let id = item.id.to_string();
    let can_toggle = resource.supports_status_toggle() && item.status.toggled().is_some();

    let mut result = CommandResultViewModel::new(ItemDetailViewModel {
        resource: resource.as_str().to_string(),
        first_published_at: item.first_published_at.map(|ts| ts.to_rfc3339()),
        location: raw.text_of(LOCATION_KEYS),
        item: card(item),
        raw: raw.into_value(),
    });

    if can_toggle {
        result = result.with_suggestion(
            Guidance::new("Publish or unpublish").with_command(fmt::toggle(resource, &id)),
        );
    }
    result
}
