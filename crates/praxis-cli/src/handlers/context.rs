use anyhow::{Context, Result};
use praxis_index::Database;
use praxis_runtime::{Config, DataPaths, FavoritesStore, FileStorage, IndexBackend, Notifier};
use praxis_types::Resource;
use serde::Serialize;
use std::sync::Arc;

use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, MutationAction};
use crate::presentation::{ConsoleRenderer, DisplayOptions, Renderer, ViewMode};
use crate::types::OutputFormat;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: DisplayOptions,
    pub paths: DataPaths,
    pub config: Config,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, enable_color: bool, paths: DataPaths, config: Config) -> Self {
        Self {
            format,
            options: DisplayOptions {
                mode: ViewMode::from(config.layout),
                enable_color,
            },
            paths,
            config,
        }
    }

    /// Render a view model using the configured format and display options
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        self.render_with(view_model, self.options)
    }

    pub fn render_with<T>(&self, view_model: CommandResultViewModel<T>, options: DisplayOptions) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json, options);
        renderer.render(view_model)
    }

    /// Open (creating if needed) the store behind the remote client.
    pub fn backend(&self) -> Result<Arc<IndexBackend>> {
        std::fs::create_dir_all(self.paths.root())
            .with_context(|| format!("Failed to create data directory {}", self.paths.root().display()))?;
        let db = Database::open(&self.paths.database())
            .with_context(|| format!("Failed to open database {}", self.paths.database().display()))?;
        Ok(Arc::new(IndexBackend::new(db)))
    }

    pub fn favorites(&self) -> FavoritesStore<FileStorage> {
        FavoritesStore::new(FileStorage::new(self.paths.storage()))
    }

    /// Show why a mutation failed, then hand the error back for the exit code.
    ///
    /// Validation failures list every field; remote failures list the
    /// notifications the handler queued.
    pub fn mutation_failed(
        &self,
        action: MutationAction,
        resource: Resource,
        id: Option<&str>,
        notifier: &Notifier,
        err: praxis_runtime::Error,
    ) -> anyhow::Error {
        let rendered = match &err {
            praxis_runtime::Error::Validation(errors) => {
                self.render(presenters::present_validation_errors(resource, errors))
            }
            _ => self.render(presenters::present_mutation_failure(action, resource, id, notifier.drain())),
        };
        match rendered {
            Ok(()) => anyhow::Error::new(err),
            Err(render_err) => render_err.context(err.to_string()),
        }
    }
}
