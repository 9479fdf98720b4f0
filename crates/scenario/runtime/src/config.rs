//! Runtime configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use scenario_core::{GraphBuilder, LayoutConfig};

/// Settings shared by the store, the engines and the developer tooling.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Snapshot file used by [`FileLinkStore`](crate::FileLinkStore).
    pub store_path: PathBuf,
    /// Upper bound on grant hops followed when attributing a reveal edge.
    pub max_attribution_depth: usize,
    pub layout: LayoutConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            max_attribution_depth: GraphBuilder::DEFAULT_MAX_DEPTH,
            layout: LayoutConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `SCENARIO_STORE_PATH`
    /// - `SCENARIO_MAX_ATTRIBUTION_DEPTH`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("SCENARIO_STORE_PATH") {
            config.store_path = path;
        }

        if let Some(depth) = read_env::<usize>("SCENARIO_MAX_ATTRIBUTION_DEPTH") {
            config.max_attribution_depth = depth;
        }

        config
    }
}

/// Platform data directory, falling back to the working directory.
///
/// - Linux: `~/.local/share/scenario/store.json`
/// - macOS: `~/Library/Application Support/scenario/store.json`
/// - Windows: `%APPDATA%\scenario\store.json`
pub fn default_store_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "scenario")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./scenario_data"))
        .join("store.json")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
