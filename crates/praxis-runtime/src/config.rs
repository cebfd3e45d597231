use crate::{Error, Result};
use praxis_engine::SortPagePolicy;
use praxis_types::SortKey;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::source::DEFAULT_PAGE_SIZE;

pub const CONFIG_FILE: &str = "config.toml";
pub const DATABASE_FILE: &str = "praxis.db";
pub const STORAGE_FILE: &str = "storage.json";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PRAXIS_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.praxis
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PRAXIS_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("praxis"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".praxis"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found".to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Files inside one data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn database(&self) -> PathBuf {
        self.root.join(DATABASE_FILE)
    }

    pub fn storage(&self) -> PathBuf {
        self.root.join(STORAGE_FILE)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub page_size: u32,
    pub sort_page_policy: SortPagePolicy,
    pub layout: Layout,
    pub default_sort: SortKey,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort_page_policy: SortPagePolicy::default(),
            layout: Layout::default(),
            default_sort: SortKey::default(),
        }
    }
}

impl Config {
    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validated()
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validated(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        Ok(self)
    }
}
