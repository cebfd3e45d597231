// Engine module - pure collection view-model logic
// This layer sits between raw remote items (types) and the runtime/presentation layers.
// Nothing here performs I/O; every function is total over its inputs.

pub mod filter;
pub mod local;
pub mod pagination;
pub mod projection;
pub mod validation;
pub mod view_state;

pub use filter::{FilterState, SortPagePolicy};
pub use local::apply_locally;
pub use pagination::{DEFAULT_WINDOW_SIZE, PageControls, PageSlot, page_window, total_pages};
pub use projection::{project, project_all, project_with};
pub use validation::{FieldError, ServiceDraft, validate_service};
pub use view_state::{EmptyKind, ReadyView, ViewState};
