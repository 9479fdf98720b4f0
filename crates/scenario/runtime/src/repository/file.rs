//! File-backed link store.
//!
//! The whole store is one JSON snapshot:
//! ```text
//! {store_path}        committed snapshot
//! {store_path}.tmp    staging file, renamed over the snapshot on commit
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::repository::{LinkStore, RepositoryError, Result, Tables};

/// Link store persisted as a JSON snapshot.
///
/// Tables are held in memory like [`InMemoryLinkStore`](super::InMemoryLinkStore).
/// A transaction's working copy is written to disk before it replaces the
/// live tables, so a failed write leaves both disk and memory at the
/// previous commit.
pub struct FileLinkStore {
    path: PathBuf,
    tables: RwLock<Tables>,
}

impl FileLinkStore {
    /// Open the snapshot at `path`, starting empty when it does not exist.
    ///
    /// Parent directories are created. Nothing is written until the first
    /// committed transaction.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tables = if path.exists() {
            let bytes = fs::read(&path)?;
            let tables: Tables = serde_json::from_slice(&bytes)?;
            tables.verify().map_err(RepositoryError::CorruptedData)?;
            tracing::debug!("Loaded link store from {}", path.display());
            tables
        } else {
            tracing::debug!("No snapshot at {}, starting empty", path.display());
            Tables::default()
        };

        Ok(Self {
            path,
            tables: RwLock::new(tables),
        })
    }

    /// Location of the committed snapshot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, tables: &Tables) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(tables)?;

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved link store to {}", self.path.display());
        Ok(())
    }
}

impl LinkStore for FileLinkStore {
    fn read<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&Tables) -> std::result::Result<T, E>,
        E: From<RepositoryError>,
    {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        f(&tables)
    }

    fn transaction<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut Tables) -> std::result::Result<T, E>,
        E: From<RepositoryError>,
    {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut working = tables.clone();
        let value = f(&mut working)?;
        self.persist(&working)?;
        *tables = working;
        Ok(value)
    }
}
