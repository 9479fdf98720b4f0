//! Pure scenario authoring rules shared by the runtime and offline tools.
//!
//! `scenario-core` defines the relational rows a scenario is made of (cards,
//! icons, stats, typed links), the validation applied before any row is
//! persisted, and the two deterministic derivations built on top of them:
//!
//! - [`projection`] lays out the icon set a skill test or card link owns
//! - [`graph`] assembles the location → card dependency graph, resolving
//!   element grant chains
//!
//! Nothing here touches storage; the runtime feeds rows in and persists what
//! comes out.
pub mod config;
pub mod error;
pub mod graph;
pub mod ids;
pub mod model;
pub mod projection;
pub mod validation;


pub use config::LayoutConfig;
pub use error::{Axis, ErrorSeverity, ValidationError};
pub use graph::{CardGraph, DropReason, DroppedReveal, Graph, GraphBuilder, LocGraph};
pub use ids::{
    CardIconId, CardId, CardLinkId, ElementId, ElementLinkId, IconId, LocationCardId, LocationId,
    LocationLinkId, ScenarioId, SkillTestId, StatId, StateTokenId,
};
pub use model::{
    AnnotationType, Card, CardFace, CardIcon, CardLink, Element, ElementLink, Face, Icon,
    IconOrigin, Location, LocationCard, LocationLetter, LocationLink, Scenario, ShieldCounts,
    ShieldKind, SkillTest, Stat, StateToken, TextField,
};
pub use projection::{IconPlacement, card_link_placement, skill_test_layout};
