// Runtime layer - async orchestration over remote collections
// View-models and mutation handlers share one query cache; clients are the
// only place that talks to a remote.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod favorites;
pub mod mutation;
pub mod notify;
pub mod source;
pub mod storage;
pub mod view_model;

pub use cache::{CacheSnapshot, QueryCache, QueryKey, SharedCache, shared_cache};
pub use client::{FavoritesRemote, IndexBackend, MemoryBackend, ResourceClient};
pub use config::{Config, DataPaths, Layout, resolve_data_dir};
pub use error::{Error, RemoteError, RemoteErrorKind, RemoteResult, Result};
pub use favorites::{FAVORITES_KEY, FavoritesStore, MergeReport};
pub use mutation::{AssumeYes, Confirm, MutationHandler, Outcome};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use source::{CollectionConfig, DEFAULT_PAGE_SIZE, FetchTicket, SourceMode, SourceStatus};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use view_model::CollectionViewModel;
