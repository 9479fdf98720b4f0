//! Link store: the relational tables a scenario lives in.
//!
//! The store is an external collaborator of the engines. It offers
//! insert / update / delete / select by predicate on typed tables, and two
//! ways in: a read-only snapshot and an all-or-nothing transaction.

mod error;
mod file;
mod memory;
mod table;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileLinkStore;
pub use memory::InMemoryLinkStore;
pub use table::{Row, Table, Tables};
pub use traits::LinkStore;
