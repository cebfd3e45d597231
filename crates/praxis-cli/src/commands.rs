use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use super::logging::init_logging;
use crate::presentation::formatters::stdout_supports_color;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use praxis_runtime::{Config, DataPaths, resolve_data_dir};
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let paths = DataPaths::new(data_dir);
    let config = Config::load_from(&paths.config())
        .with_context(|| format!("Failed to load {}", paths.config().display()))?;
    debug!(data_dir = %paths.root().display(), ?config, "resolved configuration");

    let enable_color = cli.format == OutputFormat::Plain && stdout_supports_color();
    let ctx = HandlerContext::new(cli.format, enable_color, paths, config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(dispatch(&ctx, cli.command))
}

async fn dispatch(ctx: &HandlerContext, command: Commands) -> Result<()> {
    match command {
        Commands::Seed { reset, count } => handlers::seed::handle(ctx, reset, count).await,

        Commands::List(args) => handlers::list::handle(ctx, args).await,

        Commands::Show { resource, id } => handlers::show::handle(ctx, resource.into(), &id).await,

        Commands::Delete { resource, id, yes } => {
            handlers::delete::handle(ctx, resource.into(), &id, yes).await
        }

        Commands::Toggle { resource, id } => handlers::toggle::handle(ctx, resource.into(), &id).await,

        Commands::Create(args) => handlers::create::handle(ctx, args).await,

        Commands::Favorite { id, actor } => handlers::favorite::handle(ctx, &id, actor.as_deref()).await,

        Commands::Favorites { actor } => handlers::favorites::handle(ctx, actor.as_deref()).await,

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(ctx),
        },
    }
}
