mod common;

use common::Fixture;
use scenario_core::{
    CardId, DropReason, ElementLink, ElementLinkId, LocationId, ShieldCounts, StatId,
};
use scenario_runtime::{EngineError, InMemoryLinkStore, LinkStore, RuntimeConfig, ScenarioService};
use serde_json::json;

struct Asylum {
    fx: Fixture,
    dortoir: LocationId,
    catacombes: LocationId,
    cour: LocationId,
    /// Dortoir F
    d1: CardId,
    /// Dortoir A
    d2: CardId,
    /// Element card granted by D1.
    e1: CardId,
    /// Element card granted by E1.
    e2: CardId,
    /// Element card nobody grants.
    orphan: CardId,
}

impl Asylum {
    fn new() -> Self {
        let fx = Fixture::new();
        let s = &fx.service;
        let scenario = fx.scenario.id;

        let dortoir = s.create_location(scenario, "Dortoir", false).unwrap();
        let catacombes = s.create_location(scenario, "Catacombes", false).unwrap();
        let cour = s.create_location(scenario, "Cour", true).unwrap();

        let d1 = s.create_location_card(dortoir.id, "F").unwrap().card;
        let d2 = s.create_location_card(dortoir.id, "A").unwrap().card;

        let first = s.create_element(scenario, 1, "Key").unwrap();
        let second = s.create_element(scenario, 2, "Map").unwrap();
        let third = s.create_element(scenario, 3, "Torch").unwrap();

        s.create_element_link(d1, first.id, true).unwrap();
        s.create_element_link(first.card, second.id, true).unwrap();

        Self {
            dortoir: dortoir.id,
            catacombes: catacombes.id,
            cour: cour.id,
            d1,
            d2,
            e1: first.card,
            e2: second.card,
            orphan: third.card,
            fx,
        }
    }
}

#[test]
fn reveal_from_element_card_lands_on_granting_location_card() {
    let a = Asylum::new();
    let s = &a.fx.service;
    s.create_location_link(a.e1, a.catacombes).unwrap();

    let graph = s.build_graph(a.fx.scenario.id).unwrap();
    let dortoir = &graph[0];
    assert_eq!(dortoir.id, a.dortoir);

    let d1 = dortoir.cards.iter().find(|c| c.id == a.d1).unwrap();
    assert_eq!(d1.reveals, vec![a.catacombes]);
    assert!(
        graph
            .iter()
            .flat_map(|l| l.cards.iter())
            .all(|c| c.id != a.e1)
    );

    // Revealed locations are hidden.
    let catacombes = graph.iter().find(|l| l.id == a.catacombes).unwrap();
    assert!(catacombes.hidden);
}

#[test]
fn attribution_follows_grant_chains() {
    let a = Asylum::new();
    let s = &a.fx.service;
    s.create_location_link(a.e2, a.cour).unwrap();
    s.create_location_link(a.d2, a.catacombes).unwrap();

    let graph = s.build_graph(a.fx.scenario.id).unwrap();
    let cards = &graph[0].cards;
    assert_eq!(cards[0].id, a.d1);
    assert_eq!(cards[0].reveals, vec![a.cour]);
    assert_eq!(cards[1].id, a.d2);
    assert_eq!(cards[1].reveals, vec![a.catacombes]);
}

#[test]
fn token_links_and_skill_tests_do_not_backtrack() {
    let a = Asylum::new();
    let s = &a.fx.service;
    let token = a.fx.token.id;
    let stat = a.fx.stat.id;

    s.create_card_link(a.d1, token, true).unwrap();
    s.create_card_link(a.d2, token, false).unwrap();
    s.create_card_link(a.e1, token, true).unwrap();
    s.create_card_link(a.orphan, token, false).unwrap();
    s.create_skill_test(a.d1, stat, ShieldCounts::new(1, 0, 0, 0, 0))
        .unwrap();
    s.create_skill_test(a.e1, stat, ShieldCounts::default())
        .unwrap();

    let graph = s.build_graph(a.fx.scenario.id).unwrap();
    let cards = &graph[0].cards;
    assert_eq!(cards[0].unlock_state_tokens, vec![token]);
    assert!(cards[0].is_unlocked_state_tokens.is_empty());
    assert_eq!(cards[0].skill_tests, vec![stat]);
    assert_eq!(cards[1].is_unlocked_state_tokens, vec![token]);
    assert!(cards[1].skill_tests.is_empty());
}

#[test]
fn unattributed_reveals_are_reported() {
    let a = Asylum::new();
    let s = &a.fx.service;
    s.create_location_link(a.orphan, a.cour).unwrap();

    let report = s.graph_report(a.fx.scenario.id).unwrap();
    assert!(
        report
            .locations
            .iter()
            .all(|l| l.cards.iter().all(|c| c.reveals.is_empty()))
    );
    assert_eq!(report.dropped.len(), 1);
    assert_eq!(report.dropped[0].card, a.orphan);
    assert_eq!(report.dropped[0].location, a.cour);
    assert_eq!(report.dropped[0].reason, DropReason::Unattributed);
}

#[test]
fn cyclic_grants_in_stored_data_terminate() {
    let a = Asylum::new();
    let s = &a.fx.service;
    let scenario = a.fx.scenario.id;
    let x = s.create_element(scenario, 10, "").unwrap();
    let y = s.create_element(scenario, 11, "").unwrap();

    // Written past the service, which would refuse the second grant.
    s.store()
        .transaction(|t| {
            for (element, card) in [(y.id, x.card), (x.id, y.card)] {
                t.element_links.insert(ElementLink {
                    id: ElementLinkId::UNSET,
                    scenario,
                    element,
                    card,
                    gives_uses: true,
                });
            }
            Ok::<_, EngineError>(())
        })
        .unwrap();
    s.create_location_link(x.card, a.cour).unwrap();

    let report = s.graph_report(scenario).unwrap();
    assert_eq!(report.dropped.len(), 1);
    assert_eq!(report.dropped[0].reason, DropReason::Cycle);
}

#[test]
fn attribution_depth_is_bounded_by_config() {
    let a = Asylum::new();
    a.fx.service.create_location_link(a.e2, a.cour).unwrap();

    let tables = a
        .fx
        .service
        .store()
        .read(|t| Ok::<_, EngineError>(t.clone()))
        .unwrap();
    let config = RuntimeConfig {
        max_attribution_depth: 1,
        ..RuntimeConfig::default()
    };
    let shallow = ScenarioService::with_config(InMemoryLinkStore::with_tables(tables), &config);

    let report = shallow.graph_report(a.fx.scenario.id).unwrap();
    assert_eq!(report.dropped.len(), 1);
    assert_eq!(report.dropped[0].reason, DropReason::DepthExceeded);
}

#[test]
fn serialized_graph_omits_empty_lists() {
    let a = Asylum::new();
    let s = &a.fx.service;
    s.create_location_link(a.e1, a.catacombes).unwrap();
    s.create_skill_test(a.d2, a.fx.stat.id, ShieldCounts::default())
        .unwrap();

    let graph = s.build_graph(a.fx.scenario.id).unwrap();
    let value = serde_json::to_value(&graph).unwrap();
    let stat: StatId = a.fx.stat.id;

    assert_eq!(
        value,
        json!([
            {
                "id": a.dortoir.0,
                "name": "Dortoir",
                "hidden": false,
                "cards": [
                    { "id": a.d1.0, "description": "Dortoir - F", "reveals": [a.catacombes.0] },
                    { "id": a.d2.0, "description": "Dortoir - A", "skill_tests": [stat.0] },
                ],
            },
            { "id": a.catacombes.0, "name": "Catacombes", "hidden": true },
            { "id": a.cour.0, "name": "Cour", "hidden": true },
        ])
    );
}

#[test]
fn dangling_rows_abort_the_projection() {
    let a = Asylum::new();
    let s = &a.fx.service;
    s.store()
        .transaction(|t| {
            t.cards.delete(a.d1);
            Ok::<_, EngineError>(())
        })
        .unwrap();

    let err = s.build_graph(a.fx.scenario.id).unwrap_err();
    assert!(matches!(err, EngineError::InvariantViolation(_)));
}

#[test]
fn unknown_scenario_is_not_found() {
    let a = Asylum::new();
    assert!(matches!(
        a.fx.service.build_graph(scenario_core::ScenarioId(404)),
        Err(EngineError::NotFound { entity: "scenario", .. })
    ));
}
