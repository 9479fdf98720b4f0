//! Icon-set audit and rebuild.
//!
//! The audit recomputes what every skill test and card link should own and
//! compares it with the stored card icons. The rebuild discards every owned
//! icon and projects them again from the relations.

use std::fmt;

use scenario_core::{CardIcon, CardIconId, CardId, IconOrigin, IconPlacement, LayoutConfig};
use tracing::info;

use crate::engine::icons::IconProjector;
use crate::error::Result;
use crate::repository::Tables;

/// A difference between stored icons and their projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconDrift {
    /// The projection emits an icon no stored row matches.
    Missing {
        origin: IconOrigin,
        card: CardId,
        placement: IconPlacement,
    },
    /// A stored icon owned by the relation matches nothing in the projection.
    Unexpected { origin: IconOrigin, icon: CardIconId },
    /// A stored icon references a relation that no longer exists.
    Orphaned { origin: IconOrigin, icon: CardIconId },
    /// A stored icon references both a skill test and a card link.
    DualOrigin { icon: CardIconId },
}

impl fmt::Display for IconDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing {
                origin,
                card,
                placement,
            } => write!(
                f,
                "missing icon {} at ({}, {}) on card {} for {:?}",
                placement.icon, placement.x, placement.y, card, origin
            ),
            Self::Unexpected { origin, icon } => {
                write!(f, "unexpected card icon {} owned by {:?}", icon, origin)
            }
            Self::Orphaned { origin, icon } => {
                write!(f, "card icon {} references missing {:?}", icon, origin)
            }
            Self::DualOrigin { icon } => {
                write!(f, "card icon {} references two relations", icon)
            }
        }
    }
}

/// Reports every drift between stored icon sets and their projection.
///
/// Fails only when a projection itself cannot be computed, e.g. a stat
/// pointing at a deleted icon.
pub fn audit_icon_sets(tables: &Tables, layout: &LayoutConfig) -> Result<Vec<IconDrift>> {
    let projector = IconProjector::new(layout);
    let mut drift = Vec::new();

    for test in tables.skill_tests.iter() {
        let expected = projector.skill_test_placements(tables, test)?;
        compare(
            tables,
            IconOrigin::SkillTest(test.id),
            test.card,
            expected,
            &mut drift,
        );
    }

    for link in tables.card_links.iter() {
        let expected = projector.card_link_placement(tables, link)?;
        compare(
            tables,
            IconOrigin::CardLink(link.id),
            link.card,
            vec![expected],
            &mut drift,
        );
    }

    for icon in tables.card_icons.iter() {
        match icon.origin() {
            Err(_) => drift.push(IconDrift::DualOrigin { icon: icon.id }),
            Ok(Some(origin)) if !origin_exists(tables, origin) => {
                drift.push(IconDrift::Orphaned {
                    origin,
                    icon: icon.id,
                })
            }
            Ok(_) => {}
        }
    }

    Ok(drift)
}

fn compare(
    tables: &Tables,
    origin: IconOrigin,
    card: CardId,
    expected: Vec<IconPlacement>,
    drift: &mut Vec<IconDrift>,
) {
    let mut stored: Vec<&CardIcon> = tables
        .card_icons
        .select_many(|icon| icon.is_owned_by(origin) && icon.origin().is_ok());

    for placement in expected {
        match stored
            .iter()
            .position(|row| row.card == card && placement.matches(row))
        {
            Some(index) => {
                stored.swap_remove(index);
            }
            None => drift.push(IconDrift::Missing {
                origin,
                card,
                placement,
            }),
        }
    }

    drift.extend(
        stored
            .into_iter()
            .map(|row| IconDrift::Unexpected { origin, icon: row.id }),
    );
}

fn origin_exists(tables: &Tables, origin: IconOrigin) -> bool {
    match origin {
        IconOrigin::SkillTest(id) => tables.skill_tests.contains(id),
        IconOrigin::CardLink(id) => tables.card_links.contains(id),
    }
}

/// Outcome of [`rebuild_icon_sets`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RebuildReport {
    pub removed: usize,
    pub relations: usize,
    pub inserted: usize,
}

/// Drops every owned icon and projects all skill tests and card links again.
///
/// Manual icons are kept. Meant to run inside one transaction.
pub fn rebuild_icon_sets(tables: &mut Tables, layout: &LayoutConfig) -> Result<RebuildReport> {
    let projector = IconProjector::new(layout);
    let mut report = RebuildReport {
        removed: tables
            .card_icons
            .delete_where(|icon| icon.skill_test.is_some() || icon.card_link.is_some()),
        ..RebuildReport::default()
    };

    let skill_tests: Vec<_> = tables.skill_tests.iter().cloned().collect();
    for test in &skill_tests {
        report.inserted += projector.synthesize_skill_test_icons(tables, test)?.len();
        report.relations += 1;
    }

    let card_links: Vec<_> = tables.card_links.iter().cloned().collect();
    for link in &card_links {
        projector.synthesize_card_link_icon(tables, link)?;
        report.inserted += 1;
        report.relations += 1;
    }

    info!(
        removed = report.removed,
        relations = report.relations,
        inserted = report.inserted,
        "rebuilt icon sets"
    );
    Ok(report)
}
