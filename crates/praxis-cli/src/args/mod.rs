// NOTE: Command Organization Rationale
//
// Why flat verbs (not namespaced)?
// - Every command acts on one collection or one item; there is a single noun hierarchy
// - `praxis list services` reads like the intent it replaces in a UI
// - Only `config` has sub-verbs, so it is the one namespace

pub mod hints;

use crate::types::{LayoutArg, LogLevel, OutputFormat, ResourceArg, SortArg, StatusArg};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "praxis")]
#[command(about = "Browse and manage practitioner marketplace collections", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: $PRAXIS_PATH, then the XDG data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Fill the store with a demo catalog")]
    Seed {
        #[arg(long, help = "Delete every item and favorite first")]
        reset: bool,

        #[arg(long, default_value = "24", help = "Number of services to create")]
        count: u32,
    },

    #[command(about = "List a collection with filters, sort and pagination")]
    List(ListArgs),

    #[command(about = "Show one item")]
    Show {
        resource: ResourceArg,

        id: String,
    },

    #[command(about = "Delete an item after confirmation")]
    Delete {
        resource: ResourceArg,

        id: String,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Flip an item between active and draft")]
    Toggle {
        resource: ResourceArg,

        id: String,
    },

    #[command(about = "Create a service from wizard fields")]
    Create(CreateArgs),

    #[command(about = "Add or remove a service from favorites")]
    Favorite {
        id: String,

        #[arg(long, help = "Signed-in actor; merges anonymous favorites first")]
        actor: Option<String>,
    },

    #[command(about = "List favorite services")]
    Favorites {
        #[arg(long, help = "Signed-in actor; merges anonymous favorites first")]
        actor: Option<String>,
    },

    #[command(about = "Inspect configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    pub resource: ResourceArg,

    #[arg(long, help = "Category tab (case-insensitive)")]
    pub category: Option<String>,

    #[arg(long, help = "Free-text search over title, description and category")]
    pub search: Option<String>,

    #[arg(long)]
    pub status: Option<StatusArg>,

    #[arg(long, help = "Sort order (default: from config)")]
    pub sort: Option<SortArg>,

    #[arg(long, default_value = "1")]
    pub page: u32,

    #[arg(long, help = "Items per page (default: from config)")]
    pub page_size: Option<u32>,

    #[arg(long, help = "Render as cards or rows (default: from config)")]
    pub layout: Option<LayoutArg>,

    #[arg(long, help = "Only items owned by this practitioner")]
    pub actor: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub category: String,

    #[arg(long, default_value = "", help = "Price as typed, e.g. 85 or $85.00")]
    pub price: String,

    #[arg(long, help = "Duration in minutes")]
    pub duration: Option<u32>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long, help = "Owning practitioner")]
    pub actor: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the resolved data directory and settings")]
    Show,
}
