use clap::ValueEnum;
use praxis_runtime::Layout;
use praxis_types::{ItemStatus, Resource, SortKey};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ResourceArg {
    Services,
    Bookings,
    StreamPosts,
    Practitioners,
}

impl From<ResourceArg> for Resource {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Services => Resource::Services,
            ResourceArg::Bookings => Resource::Bookings,
            ResourceArg::StreamPosts => Resource::StreamPosts,
            ResourceArg::Practitioners => Resource::Practitioners,
        }
    }
}

impl fmt::Display for ResourceArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceArg::Services => write!(f, "services"),
            ResourceArg::Bookings => write!(f, "bookings"),
            ResourceArg::StreamPosts => write!(f, "stream-posts"),
            ResourceArg::Practitioners => write!(f, "practitioners"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SortArg {
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    Title,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => SortKey::Newest,
            SortArg::Oldest => SortKey::Oldest,
            SortArg::PriceAsc => SortKey::PriceAsc,
            SortArg::PriceDesc => SortKey::PriceDesc,
            SortArg::Title => SortKey::Title,
        }
    }
}

impl fmt::Display for SortArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortArg::Newest => write!(f, "newest"),
            SortArg::Oldest => write!(f, "oldest"),
            SortArg::PriceAsc => write!(f, "price-asc"),
            SortArg::PriceDesc => write!(f, "price-desc"),
            SortArg::Title => write!(f, "title"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum StatusArg {
    Active,
    Draft,
    Scheduled,
    Archived,
    Pending,
    Confirmed,
    Completed,
    Canceled,
    NoShow,
}

impl From<StatusArg> for ItemStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => ItemStatus::Active,
            StatusArg::Draft => ItemStatus::Draft,
            StatusArg::Scheduled => ItemStatus::Scheduled,
            StatusArg::Archived => ItemStatus::Archived,
            StatusArg::Pending => ItemStatus::Pending,
            StatusArg::Confirmed => ItemStatus::Confirmed,
            StatusArg::Completed => ItemStatus::Completed,
            StatusArg::Canceled => ItemStatus::Canceled,
            StatusArg::NoShow => ItemStatus::NoShow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LayoutArg {
    Grid,
    List,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Grid => Layout::Grid,
            LayoutArg::List => Layout::List,
        }
    }
}

impl fmt::Display for LayoutArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutArg::Grid => write!(f, "grid"),
            LayoutArg::List => write!(f, "list"),
        }
    }
}
