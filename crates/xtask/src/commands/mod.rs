//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod audit;
mod clean;
mod graph;
mod rebuild_icons;
mod summary;

pub use audit::Audit;
pub use clean::Clean;
pub use graph::Graph;
pub use rebuild_icons::RebuildIcons;
pub use summary::Summary;
