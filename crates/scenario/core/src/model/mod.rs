//! Row types of a scenario.
//!
//! These mirror the relational tables one to one. Derived rows ([`CardIcon`]
//! with an origin) are produced by [`crate::projection`]; everything else is
//! authored directly.

mod card;
mod catalog;
mod links;
mod location;

pub use card::{AnnotationType, Card, CardFace, CardIcon, Face, IconOrigin, TextField};
pub use catalog::{Element, Icon, Scenario, Stat, StateToken};
pub use links::{CardLink, ElementLink, LocationLink, ShieldCounts, ShieldKind, SkillTest};
pub use location::{Location, LocationCard, LocationLetter};
