//! Optional narrowing for list operations. An unset field matches every row.

use scenario_core::{
    CardIcon, CardId, CardLink, CardLinkId, ElementId, ElementLink, LocationId, LocationLink,
    SkillTest, SkillTestId, StatId,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkillTestFilter {
    pub card: Option<CardId>,
    pub stat: Option<StatId>,
}

impl SkillTestFilter {
    pub fn by_card(card: CardId) -> Self {
        Self {
            card: Some(card),
            ..Self::default()
        }
    }

    pub fn matches(&self, row: &SkillTest) -> bool {
        self.card.is_none_or(|card| card == row.card)
            && self.stat.is_none_or(|stat| stat == row.stat)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardLinkFilter {
    pub card: Option<CardId>,
}

impl CardLinkFilter {
    pub fn by_card(card: CardId) -> Self {
        Self { card: Some(card) }
    }

    pub fn matches(&self, row: &CardLink) -> bool {
        self.card.is_none_or(|card| card == row.card)
    }
}

/// Narrows the icons of one card to those owned by a relation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardIconFilter {
    pub skill_test: Option<SkillTestId>,
    pub card_link: Option<CardLinkId>,
}

impl CardIconFilter {
    pub fn matches(&self, row: &CardIcon) -> bool {
        self.skill_test.is_none_or(|id| row.skill_test == Some(id))
            && self.card_link.is_none_or(|id| row.card_link == Some(id))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocationLinkFilter {
    pub card: Option<CardId>,
    pub location: Option<LocationId>,
}

impl LocationLinkFilter {
    pub fn by_location(location: LocationId) -> Self {
        Self {
            location: Some(location),
            ..Self::default()
        }
    }

    pub fn matches(&self, row: &LocationLink) -> bool {
        self.card.is_none_or(|card| card == row.card)
            && self.location.is_none_or(|location| location == row.location)
    }
}

/// `card` is the granting card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementLinkFilter {
    pub card: Option<CardId>,
    pub element: Option<ElementId>,
}

impl ElementLinkFilter {
    pub fn matches(&self, row: &ElementLink) -> bool {
        self.card.is_none_or(|card| card == row.card)
            && self.element.is_none_or(|element| element == row.element)
    }
}
