//! Storage-backed engines for scenario authoring.
//!
//! This crate puts the pure rules of `scenario-core` on top of a transactional
//! link store. Consumers embed [`ScenarioService`] and call its operations;
//! every mutation commits a relation together with the card icons derived
//! from it.
//!
//! Modules are organized by responsibility:
//! - [`repository`] defines the [`LinkStore`] contract and its in-memory and
//!   file-backed implementations
//! - [`engine`] hosts icon projection, graph projection and the icon audit
//! - [`service`] exposes the authoring operations
//! - [`config`] loads runtime settings from the environment
pub mod config;
pub mod engine;
pub mod error;
pub mod repository;
pub mod service;

pub use config::RuntimeConfig;
pub use engine::{IconDrift, IconProjector, RebuildReport};
pub use error::{EngineError, Result};
pub use repository::{
    FileLinkStore, InMemoryLinkStore, LinkStore, RepositoryError, Row, Table, Tables,
};
pub use service::{
    CardIconFilter, CardLinkFilter, ElementLinkFilter, LocationLinkFilter, ScenarioService,
    SkillTestFilter,
};
