// NOTE: praxis Architecture Rationale
//
// Why a CLI over the view-model (not direct SQL)?
// - Every command goes through CollectionViewModel / MutationHandler exactly as a UI would
// - The SQLite store stands in for the REST remote behind the ResourceClient seam
// - Swapping the store for an HTTP client changes one constructor, not the handlers
//
// Why server-mode listing?
// - The store paginates, filters and sorts like a paginating endpoint
// - Full-set (local re-filter) mode is exercised by the runtime tests instead
//
// Why one process per intent?
// - Each invocation is one render: build state, fetch once, present, exit
// - The query cache therefore never outlives a command; invalidation is still
//   applied so handlers behave the same when embedded in a long-lived surface

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
