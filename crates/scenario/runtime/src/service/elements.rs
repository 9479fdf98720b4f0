//! Elements, their backing cards and the grants handing them out.

use std::collections::{HashMap, HashSet};

use scenario_core::validation::validate_element_number;
use scenario_core::{Card, CardId, Element, ElementId, ElementLink, ElementLinkId, ScenarioId};
use tracing::info;

use super::cards::delete_card_rows;
use super::{ElementLinkFilter, ScenarioService, require};
use crate::error::{EngineError, Result};
use crate::repository::{LinkStore, Tables};

impl<S: LinkStore> ScenarioService<S> {
    /// Creates an element with its backing card described `"Element <n>"`.
    pub fn create_element(
        &self,
        scenario: ScenarioId,
        number: i32,
        description: &str,
    ) -> Result<Element> {
        validate_element_number(number)?;
        let element = self.store.transaction(|tables| {
            require(&tables.scenarios, scenario)?;
            let card = tables
                .cards
                .insert(Card::new(scenario, 0, Element::card_description(number)));
            let id = tables.elements.insert(Element {
                id: ElementId::UNSET,
                scenario,
                number,
                description: description.to_string(),
                notes: String::new(),
                card,
            });
            require(&tables.elements, id).cloned()
        })?;
        info!(element = %element.id, number, card = %element.card, "created element");
        Ok(element)
    }

    pub fn list_elements(&self, scenario: ScenarioId) -> Result<Vec<Element>> {
        self.store.read(|tables| {
            Ok(tables
                .elements
                .select_many(|e| e.scenario == scenario)
                .into_iter()
                .cloned()
                .collect())
        })
    }

    /// Rewrites number, description and notes; the backing card description
    /// follows the number.
    pub fn update_element(&self, element: &Element) -> Result<Element> {
        validate_element_number(element.number)?;
        let updated = self.store.transaction(|tables| {
            let stored = require(&tables.elements, element.id)?;
            let row = Element {
                scenario: stored.scenario,
                card: stored.card,
                ..element.clone()
            };
            tables.elements.update(&row);

            let mut backing = require(&tables.cards, row.card)?.clone();
            backing.description = Element::card_description(row.number);
            tables.cards.update(&backing);
            Ok::<_, EngineError>(row)
        })?;
        info!(element = %updated.id, number = updated.number, "updated element");
        Ok(updated)
    }

    /// Deletes an element through its backing card, taking every grant of it
    /// along.
    pub fn delete_element(&self, id: ElementId) -> Result<()> {
        let removed = self.store.transaction(|tables| {
            let card = require(&tables.elements, id)?.card;
            Ok::<_, EngineError>(delete_card_rows(tables, card))
        })?;
        info!(element = %id, removed, "deleted element");
        Ok(())
    }

    /// Records that `card` grants access to `element`.
    ///
    /// A `gives_uses` grant that would let the element's card reach itself
    /// through grants is rejected.
    pub fn create_element_link(
        &self,
        card: CardId,
        element: ElementId,
        gives_uses: bool,
    ) -> Result<ElementLink> {
        let link = self.store.transaction(|tables| {
            let scenario = require(&tables.cards, card)?.scenario;
            let target = require(&tables.elements, element)?;
            if target.scenario != scenario {
                return Err(EngineError::not_found("element", element));
            }
            if gives_uses && closes_cycle(tables, scenario, target.card, card) {
                return Err(EngineError::Conflict(format!(
                    "card {} granting element {} closes a grant cycle",
                    card, element
                )));
            }

            let id = tables.element_links.insert(ElementLink {
                id: ElementLinkId::UNSET,
                scenario,
                element,
                card,
                gives_uses,
            });
            require(&tables.element_links, id).cloned()
        })?;
        info!(
            element_link = %link.id,
            card = %card,
            element = %element,
            gives_uses,
            "created element link"
        );
        Ok(link)
    }

    pub fn delete_element_link(&self, id: ElementLinkId) -> Result<()> {
        self.store.transaction(|tables| {
            require(&tables.element_links, id)?;
            tables.element_links.delete(id);
            Ok::<_, EngineError>(())
        })?;
        info!(element_link = %id, "deleted element link");
        Ok(())
    }

    pub fn list_element_links(
        &self,
        scenario: ScenarioId,
        filter: ElementLinkFilter,
    ) -> Result<Vec<ElementLink>> {
        self.store.read(|tables| {
            Ok(tables
                .element_links
                .select_many(|el| el.scenario == scenario && filter.matches(el))
                .into_iter()
                .cloned()
                .collect())
        })
    }
}

/// Returns true if adding the grant `element_card → granting` lets
/// `granting` walk back to `element_card` through existing grants.
fn closes_cycle(
    tables: &Tables,
    scenario: ScenarioId,
    element_card: CardId,
    granting: CardId,
) -> bool {
    let mut grants: HashMap<CardId, Vec<CardId>> = HashMap::new();
    for link in tables
        .element_links
        .select_many(|el| el.scenario == scenario && el.gives_uses)
    {
        if let Some(element) = tables.elements.get(link.element) {
            grants.entry(element.card).or_default().push(link.card);
        }
    }

    let mut stack = vec![granting];
    let mut seen = HashSet::new();
    while let Some(card) = stack.pop() {
        if card == element_card {
            return true;
        }
        if !seen.insert(card) {
            continue;
        }
        if let Some(next) = grants.get(&card) {
            stack.extend(next.iter().copied());
        }
    }
    false
}
