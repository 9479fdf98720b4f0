//! Locations, their lettered cards and the links revealing them.

use scenario_core::validation::normalize_name;
use scenario_core::{
    Card, CardId, Location, LocationCard, LocationCardId, LocationId, LocationLetter,
    LocationLink, LocationLinkId, ScenarioId,
};
use tracing::{debug, info};

use super::{LocationLinkFilter, ScenarioService, require};
use crate::error::{EngineError, Result};
use crate::repository::LinkStore;

impl<S: LinkStore> ScenarioService<S> {
    pub fn create_location(
        &self,
        scenario: ScenarioId,
        name: &str,
        hidden: bool,
    ) -> Result<Location> {
        let name = normalize_name("location", name)?;
        let location = self.store.transaction(|tables| {
            require(&tables.scenarios, scenario)?;
            let id = tables.locations.insert(Location {
                id: LocationId::UNSET,
                scenario,
                name,
                hidden,
                notes: String::new(),
            });
            require(&tables.locations, id).cloned()
        })?;
        info!(
            location = %location.id,
            name = %location.name,
            hidden,
            "created location"
        );
        Ok(location)
    }

    pub fn load_location(&self, id: LocationId) -> Result<Location> {
        self.store
            .read(|tables| require(&tables.locations, id).cloned())
    }

    pub fn list_locations(&self, scenario: ScenarioId) -> Result<Vec<Location>> {
        self.store.read(|tables| {
            Ok(tables
                .locations
                .select_many(|l| l.scenario == scenario)
                .into_iter()
                .cloned()
                .collect())
        })
    }

    /// Rewrites name, hidden flag and notes. Backing cards of the location's
    /// lettered slots follow a rename.
    pub fn update_location(&self, location: &Location) -> Result<Location> {
        let name = normalize_name("location", &location.name)?;
        let updated = self.store.transaction(|tables| {
            let stored = require(&tables.locations, location.id)?;
            let row = Location {
                scenario: stored.scenario,
                name,
                ..location.clone()
            };
            tables.locations.update(&row);

            let slots: Vec<(CardId, LocationLetter)> = tables
                .location_cards
                .select_many(|lc| lc.location == row.id)
                .into_iter()
                .map(|lc| (lc.card, lc.letter))
                .collect();
            for (card, letter) in slots {
                let mut backing = require(&tables.cards, card)?.clone();
                backing.description = LocationCard::card_description(&row.name, letter);
                tables.cards.update(&backing);
            }
            Ok::<_, EngineError>(row)
        })?;
        info!(location = %updated.id, name = %updated.name, "updated location");
        Ok(updated)
    }

    /// Deletes a location, its lettered slots and the links revealing it.
    /// Backing cards are kept.
    pub fn delete_location(&self, id: LocationId) -> Result<()> {
        self.store.transaction(|tables| {
            require(&tables.locations, id)?;
            let slots = tables.location_cards.delete_where(|lc| lc.location == id);
            let links = tables.location_links.delete_where(|ll| ll.location == id);
            tables.locations.delete(id);
            debug!(location = %id, slots, links, "removed location rows");
            Ok::<_, EngineError>(())
        })?;
        info!(location = %id, "deleted location");
        Ok(())
    }

    /// Adds a lettered slot to a location, backed by a new card described
    /// `"<location> - <letter>"`. Letters are `A` to `H`, any case.
    pub fn create_location_card(
        &self,
        location: LocationId,
        letter: &str,
    ) -> Result<LocationCard> {
        let letter = LocationLetter::parse(letter)?;
        let slot = self.store.transaction(|tables| {
            let owner = require(&tables.locations, location)?.clone();
            if tables
                .location_cards
                .select_one(|lc| lc.location == location && lc.letter == letter)
                .is_some()
            {
                return Err(EngineError::Conflict(format!(
                    "location {} already has card {}",
                    owner.name, letter
                )));
            }

            let card = tables.cards.insert(Card::new(
                owner.scenario,
                0,
                LocationCard::card_description(&owner.name, letter),
            ));
            let id = tables.location_cards.insert(LocationCard {
                id: LocationCardId::UNSET,
                location,
                card,
                letter,
            });
            require(&tables.location_cards, id).cloned()
        })?;
        info!(
            location_card = %slot.id,
            location = %location,
            card = %slot.card,
            letter = %letter,
            "created location card"
        );
        Ok(slot)
    }

    pub fn list_location_cards(&self, location: LocationId) -> Result<Vec<LocationCard>> {
        self.store.read(|tables| {
            require(&tables.locations, location)?;
            Ok(tables
                .location_cards
                .select_many(|lc| lc.location == location)
                .into_iter()
                .cloned()
                .collect())
        })
    }

    /// Records that `card` reveals `location`. A revealed location is hidden
    /// until then, so the target is marked hidden in the same transaction.
    pub fn create_location_link(
        &self,
        card: CardId,
        location: LocationId,
    ) -> Result<LocationLink> {
        let link = self.store.transaction(|tables| {
            let scenario = require(&tables.cards, card)?.scenario;
            let mut target = require(&tables.locations, location)?.clone();
            if target.scenario != scenario {
                return Err(EngineError::not_found("location", location));
            }
            if !target.hidden {
                target.hidden = true;
                tables.locations.update(&target);
                debug!(location = %location, "marked revealed location hidden");
            }

            let id = tables.location_links.insert(LocationLink {
                id: LocationLinkId::UNSET,
                scenario,
                card,
                location,
            });
            require(&tables.location_links, id).cloned()
        })?;
        info!(
            location_link = %link.id,
            card = %card,
            location = %location,
            "created location link"
        );
        Ok(link)
    }

    pub fn delete_location_link(&self, id: LocationLinkId) -> Result<()> {
        self.store.transaction(|tables| {
            require(&tables.location_links, id)?;
            tables.location_links.delete(id);
            Ok::<_, EngineError>(())
        })?;
        info!(location_link = %id, "deleted location link");
        Ok(())
    }

    pub fn list_location_links(
        &self,
        scenario: ScenarioId,
        filter: LocationLinkFilter,
    ) -> Result<Vec<LocationLink>> {
        self.store.read(|tables| {
            Ok(tables
                .location_links
                .select_many(|ll| ll.scenario == scenario && filter.matches(ll))
                .into_iter()
                .cloned()
                .collect())
        })
    }
}
