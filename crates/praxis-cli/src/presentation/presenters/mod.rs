mod collection;
mod favorites;
mod item;
mod mutation;
mod system;

pub use collection::{ListDefaults, present_collection};
pub use favorites::{present_favorite_toggle, present_favorites};
pub use item::present_item;
pub use mutation::{present_mutation_failure, present_outcome, present_validation_errors};
pub use system::{present_config, present_seed};
