//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Seeding the item store and writing config
//! - Executing CLI commands against that directory

use anyhow::Result;
use assert_cmd::Command;
use praxis_index::Database;
use praxis_runtime::{Config, DataPaths};
use praxis_types::{ActorId, RawItem, Resource};
use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use praxis_testing::{TestWorld, fixtures};
/// use praxis_types::Resource;
///
/// let world = TestWorld::new().with_items(Resource::Services, fixtures::mixed_catalog(3));
///
/// let result = world.run(&["list", "services"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    paths: DataPaths,
    env_vars: HashMap<String, String>,
    json: bool,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".praxis");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            paths: DataPaths::new(data_dir),
            temp_dir,
            env_vars: HashMap::new(),
            json: false,
        }
    }

    /// Get the data directory path (.praxis).
    pub fn data_dir(&self) -> &Path {
        self.paths.root()
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Run commands with `--format json`.
    pub fn json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Insert items directly into the store, in order.
    pub fn with_items(self, resource: Resource, items: Vec<RawItem>) -> Self {
        self.insert_items(resource, None, items)
            .expect("Failed to seed items");
        self
    }

    /// Insert items owned by `practitioner`.
    pub fn with_owned_items(self, resource: Resource, practitioner: &str, items: Vec<RawItem>) -> Self {
        self.insert_items(resource, Some(&ActorId::new(practitioner)), items)
            .expect("Failed to seed items");
        self
    }

    pub fn with_config(self, config: &Config) -> Self {
        config
            .save_to(&self.paths.config())
            .expect("Failed to write config");
        self
    }

    fn insert_items(&self, resource: Resource, owner: Option<&ActorId>, items: Vec<RawItem>) -> Result<()> {
        let db = self.open_db()?;
        for item in items {
            db.insert_item(resource, owner, item)?;
        }
        Ok(())
    }

    /// Open the world's store for direct inspection.
    pub fn open_db(&self) -> Result<Database> {
        Ok(Database::open(&self.paths.database())?)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("praxis")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(if self.json { "json" } else { "plain" });

        cmd.current_dir(self.temp_dir.path());
        cmd.env("NO_COLOR", "1");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()`, which requires the binary to be
    /// built; cargo does this automatically for the CLI crate's own tests.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("praxis")
            .map_err(|e| anyhow::anyhow!("Failed to find praxis binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
