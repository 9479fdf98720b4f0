//! Opening the link store snapshot the commands work on.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use scenario_runtime::{FileLinkStore, RuntimeConfig, ScenarioService};

/// Store selection shared by every command.
#[derive(Args, Debug)]
pub struct StoreArgs {
    /// Snapshot file (defaults to SCENARIO_STORE_PATH, then the platform data dir)
    #[arg(short, long, value_name = "FILE")]
    pub store: Option<PathBuf>,
}

impl StoreArgs {
    pub fn config(&self) -> RuntimeConfig {
        let mut config = RuntimeConfig::from_env();
        if let Some(path) = &self.store {
            config.store_path = path.clone();
        }
        config
    }

    /// Opens the snapshot, failing if it does not exist yet.
    pub fn open(&self) -> Result<(ScenarioService<FileLinkStore>, PathBuf)> {
        let config = self.config();
        let path = config.store_path.clone();
        ensure_exists(&path)?;

        let store = FileLinkStore::open(&path)
            .with_context(|| format!("Failed to open store: {}", path.display()))?;
        Ok((ScenarioService::with_config(store, &config), path))
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!(
            "Store snapshot not found: {}\n\
             Hint: set SCENARIO_STORE_PATH or pass --store",
            path.display()
        );
    }
    Ok(())
}
