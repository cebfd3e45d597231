mod context;

pub mod config;
pub mod create;
pub mod delete;
pub mod favorite;
pub mod favorites;
pub mod list;
pub mod seed;
pub mod show;
pub mod toggle;

pub use context::HandlerContext;
