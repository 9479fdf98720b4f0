//! Graph projection: scans one scenario's tables into a [`Graph`].

use scenario_core::{Card, Graph, GraphBuilder, ScenarioId};
use tracing::{debug, error, warn};

use crate::error::{EngineError, Result};
use crate::repository::Tables;

/// Builds the location graph of `scenario`.
///
/// Reads locations with their cards, then element grants, reveals, card links
/// and skill tests, in that order. Reveal edges that cannot be attributed to
/// a location card are dropped and reported in [`Graph::dropped`]. A row
/// pointing at a missing card or element fails the whole projection.
pub fn build_graph(tables: &Tables, scenario: ScenarioId, max_depth: usize) -> Result<Graph> {
    if !tables.scenarios.contains(scenario) {
        return Err(EngineError::not_found("scenario", scenario));
    }

    let mut builder = GraphBuilder::with_max_depth(max_depth);

    for location in tables.locations.select_many(|l| l.scenario == scenario) {
        let cards = tables
            .location_cards
            .select_many(|lc| lc.location == location.id)
            .into_iter()
            .map(|lc| {
                tables.cards.get(lc.card).ok_or_else(|| {
                    dangling(format!("location card {} points at card {}", lc.id, lc.card))
                })
            })
            .collect::<Result<Vec<&Card>>>()?;
        builder.add_location(location, cards);
    }

    for link in tables
        .element_links
        .select_many(|el| el.scenario == scenario && el.gives_uses)
    {
        let element = tables.elements.get(link.element).ok_or_else(|| {
            dangling(format!(
                "element link {} points at element {}",
                link.id, link.element
            ))
        })?;
        builder.add_grant(element.card, link.card);
    }

    for link in tables
        .location_links
        .select_many(|ll| ll.scenario == scenario)
    {
        builder.add_reveal(link.card, link.location);
    }

    for link in tables.card_links.select_many(|cl| cl.scenario == scenario) {
        builder.add_state_token(link.card, link.state_token, link.unlocks_unlocked);
    }

    for test in tables.skill_tests.select_many(|st| st.scenario == scenario) {
        builder.add_skill_test(test.card, test.stat);
    }

    let graph = builder.finish();
    for drop in &graph.dropped {
        warn!(
            card = %drop.card,
            location = %drop.location,
            reason = ?drop.reason,
            "reveal edge left out of graph"
        );
    }
    debug!(
        scenario = %scenario,
        locations = graph.locations.len(),
        dropped = graph.dropped.len(),
        "built scenario graph"
    );
    Ok(graph)
}

fn dangling(detail: String) -> EngineError {
    error!(%detail, "dangling reference in link store");
    EngineError::InvariantViolation(format!("dangling reference: {}", detail))
}
