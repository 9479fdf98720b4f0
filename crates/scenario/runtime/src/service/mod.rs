//! Scenario authoring operations over a [`LinkStore`].
//!
//! [`ScenarioService`] is the entry point API handlers call. Each mutation
//! runs in one store transaction, so a relation row and the icons projected
//! from it are committed together or not at all.

mod cards;
mod catalog;
mod elements;
mod filters;
mod locations;
mod relations;

pub use filters::{
    CardIconFilter, CardLinkFilter, ElementLinkFilter, LocationLinkFilter, SkillTestFilter,
};

use scenario_core::{Graph, LayoutConfig, LocGraph, ScenarioId};

use crate::config::RuntimeConfig;
use crate::engine::{self, IconDrift, IconProjector, RebuildReport};
use crate::error::{EngineError, Result};
use crate::repository::{LinkStore, Row, Table};

pub struct ScenarioService<S> {
    store: S,
    layout: LayoutConfig,
    max_attribution_depth: usize,
}

impl<S: LinkStore> ScenarioService<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, &RuntimeConfig::default())
    }

    pub fn with_config(store: S, config: &RuntimeConfig) -> Self {
        Self {
            store,
            layout: config.layout.clone(),
            max_attribution_depth: config.max_attribution_depth,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    fn projector(&self) -> IconProjector<'_> {
        IconProjector::new(&self.layout)
    }

    /// Location graph of a scenario, read from one consistent snapshot.
    pub fn build_graph(&self, scenario: ScenarioId) -> Result<Vec<LocGraph>> {
        Ok(self.graph_report(scenario)?.locations)
    }

    /// Location graph plus the reveal edges that could not be attributed.
    pub fn graph_report(&self, scenario: ScenarioId) -> Result<Graph> {
        self.store
            .read(|tables| engine::build_graph(tables, scenario, self.max_attribution_depth))
    }

    pub fn audit_icon_sets(&self) -> Result<Vec<IconDrift>> {
        self.store
            .read(|tables| engine::audit_icon_sets(tables, &self.layout))
    }

    pub fn rebuild_icon_sets(&self) -> Result<RebuildReport> {
        self.store
            .transaction(|tables| engine::rebuild_icon_sets(tables, &self.layout))
    }
}

/// Fetches a row or fails with `NotFound` naming its table.
fn require<R: Row>(table: &Table<R>, id: R::Id) -> Result<&R> {
    table
        .get(id)
        .ok_or_else(|| EngineError::not_found(R::TABLE, format!("#{}", Into::<i64>::into(id))))
}
