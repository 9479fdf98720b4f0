//! Derived-view engines over the link store tables.
//!
//! - [`icons`] keeps the card icons owned by skill tests and card links in
//!   line with their relation
//! - [`graph`] projects a scenario's relations into the location graph
//! - [`audit`] recomputes every owned icon set and reports drift
//!
//! Engines take table references; callers decide the transaction boundary.

pub mod audit;
pub mod graph;
pub mod icons;

pub use audit::{IconDrift, RebuildReport, audit_icon_sets, rebuild_icon_sets};
pub use graph::build_graph;
pub use icons::{IconProjector, base_icon, remove_icons};
