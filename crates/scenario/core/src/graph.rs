//! Scenario dependency graph: locations → cards → reveal, token and skill
//! test edges.
//!
//! [`GraphBuilder`] is fed in a fixed order by the runtime: locations with
//! their cards first, then element grants, then the relation rows. Only cards
//! that sit directly in a location get a node. Reveal edges from any other
//! card are traced back through element grants to the location card that
//! ultimately hands the element out; token links and skill tests are not.

use std::collections::{HashMap, HashSet};

use crate::ids::{CardId, LocationId, StatId, StateTokenId};
use crate::model::{Card, Location};

/// A location and the cards it is made of.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocGraph {
    pub id: LocationId,
    pub name: String,
    pub hidden: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub cards: Vec<CardGraph>,
}

/// A location card and everything attributed to it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardGraph {
    pub id: CardId,
    pub description: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub reveals: Vec<LocationId>,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "unlocks_state_tokens",
            default,
            skip_serializing_if = "Vec::is_empty"
        )
    )]
    pub unlock_state_tokens: Vec<StateTokenId>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub is_unlocked_state_tokens: Vec<StateTokenId>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub skill_tests: Vec<StatId>,
}

impl CardGraph {
    fn new(card: &Card) -> Self {
        Self {
            id: card.id,
            description: card.description.clone(),
            reveals: Vec::new(),
            unlock_state_tokens: Vec::new(),
            is_unlocked_state_tokens: Vec::new(),
            skill_tests: Vec::new(),
        }
    }
}

/// Why a reveal edge could not be placed on any node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DropReason {
    /// The grant chain ended on a card that is in no location.
    Unattributed,
    /// The grant chain loops back on itself.
    Cycle,
    /// The grant chain is longer than the configured bound.
    DepthExceeded,
}

/// A reveal edge left out of the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppedReveal {
    pub card: CardId,
    pub location: LocationId,
    pub reason: DropReason,
}

/// Assembled graph plus the reveal edges that could not be displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    pub locations: Vec<LocGraph>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub dropped: Vec<DroppedReveal>,
}

/// Incremental graph assembly.
pub struct GraphBuilder {
    locations: Vec<LocGraph>,
    /// card id → (location index, card index)
    nodes: HashMap<CardId, (usize, usize)>,
    /// element card id → granting card id
    grants: HashMap<CardId, CardId>,
    dropped: Vec<DroppedReveal>,
    max_depth: usize,
}

impl GraphBuilder {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    pub fn new() -> Self {
        Self::with_max_depth(Self::DEFAULT_MAX_DEPTH)
    }

    /// Bounds the number of grant hops followed when attributing a reveal.
    /// A bound of zero is raised to one.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            locations: Vec::new(),
            nodes: HashMap::new(),
            grants: HashMap::new(),
            dropped: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Adds a location node and one card node per card, in the given order.
    pub fn add_location<'a>(
        &mut self,
        location: &Location,
        cards: impl IntoIterator<Item = &'a Card>,
    ) {
        let loc_index = self.locations.len();
        let mut node = LocGraph {
            id: location.id,
            name: location.name.clone(),
            hidden: location.hidden,
            cards: Vec::new(),
        };
        for card in cards {
            self.nodes.insert(card.id, (loc_index, node.cards.len()));
            node.cards.push(CardGraph::new(card));
        }
        self.locations.push(node);
    }

    /// Records that `granting_card` gives access to the element backed by
    /// `element_card`. A later grant of the same element replaces the earlier
    /// one.
    pub fn add_grant(&mut self, element_card: CardId, granting_card: CardId) {
        self.grants.insert(element_card, granting_card);
    }

    /// Attaches a reveal edge, tracing `card` back through grants when it has
    /// no node of its own. Returns the card the edge landed on.
    pub fn add_reveal(&mut self, card: CardId, location: LocationId) -> Option<CardId> {
        match self.attribute(card) {
            Ok(owner) => {
                if let Some(node) = self.node_mut(owner) {
                    node.reveals.push(location);
                }
                Some(owner)
            }
            Err(reason) => {
                self.dropped.push(DroppedReveal {
                    card,
                    location,
                    reason,
                });
                None
            }
        }
    }

    /// Attaches a state token edge to `card` if it has a node.
    pub fn add_state_token(
        &mut self,
        card: CardId,
        token: StateTokenId,
        unlocks_unlocked: bool,
    ) -> bool {
        let Some(node) = self.node_mut(card) else {
            return false;
        };
        if unlocks_unlocked {
            node.unlock_state_tokens.push(token);
        } else {
            node.is_unlocked_state_tokens.push(token);
        }
        true
    }

    /// Attaches a skill test edge to `card` if it has a node.
    pub fn add_skill_test(&mut self, card: CardId, stat: StatId) -> bool {
        let Some(node) = self.node_mut(card) else {
            return false;
        };
        node.skill_tests.push(stat);
        true
    }

    pub fn finish(self) -> Graph {
        Graph {
            locations: self.locations,
            dropped: self.dropped,
        }
    }

    fn node_mut(&mut self, card: CardId) -> Option<&mut CardGraph> {
        let (loc, idx) = *self.nodes.get(&card)?;
        self.locations.get_mut(loc)?.cards.get_mut(idx)
    }

    /// Walks grants from `card` until a card with a node is found.
    fn attribute(&self, card: CardId) -> Result<CardId, DropReason> {
        let mut current = card;
        let mut visited = HashSet::new();
        loop {
            if self.nodes.contains_key(&current) {
                return Ok(current);
            }
            if !visited.insert(current) {
                return Err(DropReason::Cycle);
            }
            if visited.len() > self.max_depth {
                return Err(DropReason::DepthExceeded);
            }
            match self.grants.get(&current) {
                Some(&granting) => current = granting,
                None => return Err(DropReason::Unattributed),
            }
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
