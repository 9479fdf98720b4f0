//! Link store contract.

use super::{RepositoryError, Tables};

/// Transactional access to the scenario tables.
///
/// Both entry points are generic over the caller's error type so engine code
/// can use `?` on its own errors inside the closure; store failures convert
/// through `From<RepositoryError>`.
pub trait LinkStore: Send + Sync {
    /// Runs `f` against one consistent snapshot of every table.
    ///
    /// Concurrent transactions are either fully visible or not at all.
    fn read<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Tables) -> Result<T, E>,
        E: From<RepositoryError>;

    /// Runs `f` against a private working copy and commits it only when `f`
    /// returns `Ok`. On `Err` no change is kept.
    ///
    /// Transactions are serialized: at most one writer runs at a time.
    fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Tables) -> Result<T, E>,
        E: From<RepositoryError>;
}
