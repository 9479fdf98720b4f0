//! In-memory link store for tests and local runs.

use std::sync::RwLock;

use crate::repository::{LinkStore, RepositoryError, Tables};

/// Link store held entirely in memory.
///
/// Transactions run against a working copy that replaces the live tables
/// only when the closure succeeds. The write lock is held for the whole
/// transaction, so writers are serialized.
pub struct InMemoryLinkStore {
    tables: RwLock<Tables>,
}

impl InMemoryLinkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_tables(Tables::default())
    }

    /// Create a store seeded with existing tables.
    pub fn with_tables(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }
}

impl Default for InMemoryLinkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkStore for InMemoryLinkStore {
    fn read<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Tables) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        f(&tables)
    }

    fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Tables) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut working = tables.clone();
        let value = f(&mut working)?;
        *tables = working;
        Ok(value)
    }
}
