//! Shared fixture: one scenario with the base palette, a stat, a state token
//! and a plain card.
#![allow(dead_code)]

use scenario_core::{Card, CardFace, IconId, Scenario, ShieldKind, Stat, StateToken};
use scenario_runtime::{InMemoryLinkStore, ScenarioService};

pub struct Fixture {
    pub service: ScenarioService<InMemoryLinkStore>,
    pub scenario: Scenario,
    pub stat: Stat,
    pub stat_icon: IconId,
    pub token: StateToken,
    pub token_icon: IconId,
    pub card: Card,
}

impl Fixture {
    pub fn new() -> Self {
        let service = ScenarioService::new(InMemoryLinkStore::new());
        let scenario = service.create_scenario("Asylum").unwrap();

        for kind in ShieldKind::ALL {
            service
                .create_icon(None, kind.icon_short_name(), "")
                .unwrap();
        }

        let stat_icon = service
            .create_icon(Some(scenario.id), "wisdom", "icons/wisdom.png")
            .unwrap()
            .id;
        let stat = service
            .create_stat(scenario.id, stat_icon, "Wisdom", "")
            .unwrap();

        let token_icon = service.create_icon(None, "key", "icons/key.png").unwrap().id;
        let token = service.create_state_token("key", token_icon).unwrap();

        let card = service
            .create_card(
                scenario.id,
                1,
                "Front door",
                CardFace::default(),
                CardFace::default(),
            )
            .unwrap();

        Self {
            service,
            scenario,
            stat,
            stat_icon,
            token,
            token_icon,
            card,
        }
    }

    pub fn shield_icon(&self, kind: ShieldKind) -> IconId {
        self.service
            .load_base_icon(kind.icon_short_name())
            .unwrap()
            .id
    }

    pub fn new_card(&self, description: &str) -> Card {
        self.service
            .create_card(
                self.scenario.id,
                0,
                description,
                CardFace::default(),
                CardFace::default(),
            )
            .unwrap()
    }
}
