use crate::ids::{CardId, ElementId, IconId, ScenarioId, StatId, StateTokenId};

/// Highest-level object; all other rows belong to a scenario.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
}

/// Palette entry. Global (base game) icons have no scenario and are looked up
/// by short name, e.g. the shield icons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Icon {
    pub id: IconId,
    pub scenario: Option<ScenarioId>,
    pub short_name: String,
    pub url: String,
}

impl Icon {
    pub fn is_global(&self) -> bool {
        self.scenario.is_none()
    }

    /// Returns true if this icon may be placed on a card of `scenario`:
    /// either global or owned by that scenario.
    pub fn is_visible_from(&self, scenario: ScenarioId) -> bool {
        self.scenario.is_none_or(|owner| owner == scenario)
    }
}

/// Character statistic a skill test checks against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    pub id: StatId,
    pub scenario: ScenarioId,
    pub name: String,
    pub description: String,
    pub icon: IconId,
}

/// Base game token used to lock and unlock cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateToken {
    pub id: StateTokenId,
    pub short_name: String,
    pub icon: IconId,
}

/// Numbered element; its effects live on a dedicated backing card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub id: ElementId,
    pub scenario: ScenarioId,
    pub number: i32,
    pub description: String,
    pub notes: String,
    pub card: CardId,
}

impl Element {
    /// Description given to the backing card.
    pub fn card_description(number: i32) -> String {
        format!("Element {}", number)
    }
}
