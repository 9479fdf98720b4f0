//! Cards and manually placed card icons.

use scenario_core::{
    Card, CardFace, CardIcon, CardIconId, CardId, CardLinkId, ElementId, IconOrigin, ScenarioId,
    SkillTestId,
};
use tracing::info;

use super::{CardIconFilter, ScenarioService, require};
use crate::error::{EngineError, Result};
use crate::repository::{LinkStore, Tables};

impl<S: LinkStore> ScenarioService<S> {
    pub fn create_card(
        &self,
        scenario: ScenarioId,
        number: u32,
        description: &str,
        front: CardFace,
        back: CardFace,
    ) -> Result<Card> {
        let card = self.store.transaction(|tables| {
            require(&tables.scenarios, scenario)?;
            let id = tables
                .cards
                .insert(Card::new(scenario, number, description).with_faces(front, back));
            require(&tables.cards, id).cloned()
        })?;
        info!(card = %card.id, scenario = %scenario, number, "created card");
        Ok(card)
    }

    pub fn load_card(&self, id: CardId) -> Result<Card> {
        self.store.read(|tables| require(&tables.cards, id).cloned())
    }

    pub fn list_cards(&self, scenario: ScenarioId) -> Result<Vec<Card>> {
        self.store.read(|tables| {
            Ok(tables
                .cards
                .select_many(|card| card.scenario == scenario)
                .into_iter()
                .cloned()
                .collect())
        })
    }

    /// Rewrites number, description and faces. A card never changes scenario.
    pub fn update_card(&self, card: &Card) -> Result<Card> {
        let updated = self.store.transaction(|tables| {
            let stored = require(&tables.cards, card.id)?;
            let row = Card {
                scenario: stored.scenario,
                ..card.clone()
            };
            tables.cards.update(&row);
            Ok::<_, EngineError>(row)
        })?;
        info!(card = %updated.id, "updated card");
        Ok(updated)
    }

    /// Deletes a card with every row hanging off it.
    pub fn delete_card(&self, id: CardId) -> Result<()> {
        let removed = self.store.transaction(|tables| {
            require(&tables.cards, id)?;
            Ok::<_, EngineError>(delete_card_rows(tables, id))
        })?;
        info!(card = %id, removed, "deleted card");
        Ok(())
    }

    /// Places an icon by hand. The row may not claim an origin relation.
    pub fn create_card_icon(&self, row: CardIcon) -> Result<CardIcon> {
        let icon = self.store.transaction(|tables| {
            self.projector().check_card_icon(tables, &row)?;
            ensure_manual(&row)?;
            let id = tables.card_icons.insert(row);
            require(&tables.card_icons, id).cloned()
        })?;
        info!(card_icon = %icon.id, card = %icon.card, "created card icon");
        Ok(icon)
    }

    pub fn update_card_icon(&self, row: &CardIcon) -> Result<CardIcon> {
        self.store.transaction(|tables| {
            let stored = require(&tables.card_icons, row.id)?;
            ensure_manual(stored)?;
            self.projector().check_card_icon(tables, row)?;
            ensure_manual(row)?;
            tables.card_icons.update(row);
            Ok::<_, EngineError>(())
        })?;
        info!(card_icon = %row.id, card = %row.card, "updated card icon");
        Ok(row.clone())
    }

    /// Icons owned by a relation go away with the relation, not through here.
    pub fn delete_card_icon(&self, id: CardIconId) -> Result<()> {
        self.store.transaction(|tables| {
            ensure_manual(require(&tables.card_icons, id)?)?;
            tables.card_icons.delete(id);
            Ok::<_, EngineError>(())
        })?;
        info!(card_icon = %id, "deleted card icon");
        Ok(())
    }

    pub fn list_card_icons(&self, card: CardId, filter: CardIconFilter) -> Result<Vec<CardIcon>> {
        self.store.read(|tables| {
            require(&tables.cards, card)?;
            Ok(tables
                .card_icons
                .select_many(|icon| icon.card == card && filter.matches(icon))
                .into_iter()
                .cloned()
                .collect())
        })
    }
}

fn ensure_manual(row: &CardIcon) -> Result<()> {
    match row.origin()? {
        None => Ok(()),
        Some(origin) => Err(EngineError::Conflict(format!(
            "card icon {} is owned by {:?} and managed with it",
            row.id, origin
        ))),
    }
}

/// Removes a card and everything referencing it: its icons, the relations
/// it takes part in with their icon sets, its location card slot and the
/// element it backs. Returns the number of rows removed.
pub(super) fn delete_card_rows(tables: &mut Tables, card: CardId) -> usize {
    let skill_tests: Vec<SkillTestId> = tables.skill_tests.select_ids(|st| st.card == card);
    let card_links: Vec<CardLinkId> = tables.card_links.select_ids(|cl| cl.card == card);
    let elements: Vec<ElementId> = tables.elements.select_ids(|e| e.card == card);

    let mut removed = tables.card_icons.delete_where(|icon| {
        icon.card == card
            || skill_tests
                .iter()
                .any(|&id| icon.is_owned_by(IconOrigin::SkillTest(id)))
            || card_links
                .iter()
                .any(|&id| icon.is_owned_by(IconOrigin::CardLink(id)))
    });
    removed += tables.skill_tests.delete_where(|st| st.card == card);
    removed += tables.card_links.delete_where(|cl| cl.card == card);
    removed += tables.location_links.delete_where(|ll| ll.card == card);
    removed += tables
        .element_links
        .delete_where(|el| el.card == card || elements.contains(&el.element));
    removed += tables.location_cards.delete_where(|lc| lc.card == card);
    removed += tables.elements.delete_where(|e| e.card == card);
    removed += tables.cards.delete(card);
    removed
}
