use crate::error::ValidationError;
use crate::ids::{CardIconId, CardId, CardLinkId, IconId, ScenarioId, SkillTestId};

/// Basic building block of a scenario: a numbered card with two faces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub id: CardId,
    pub scenario: ScenarioId,
    pub number: u32,
    pub description: String,
    pub front: CardFace,
    pub back: CardFace,
}

impl Card {
    pub fn new(scenario: ScenarioId, number: u32, description: impl Into<String>) -> Self {
        Self {
            id: CardId::UNSET,
            scenario,
            number,
            description: description.into(),
            front: CardFace::default(),
            back: CardFace::default(),
        }
    }

    pub fn with_faces(mut self, front: CardFace, back: CardFace) -> Self {
        self.front = front;
        self.back = back;
        self
    }
}

/// Non-image content of one side of a card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardFace {
    pub text_area_size: i32,
    pub text_fields: Vec<TextField>,
}

/// Positioned text on a card face.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextField {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

/// Side of a card an icon is drawn on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    /// Maps the legacy `front_back` flag (true = front).
    pub const fn from_front(front: bool) -> Self {
        if front { Face::Front } else { Face::Back }
    }
}

/// Small shape drawn around an icon's annotation text.
///
/// Stored as a numeric code so rows written by older clients can carry values
/// this build does not know; [`AnnotationType::try_from`] rejects those.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnnotationType {
    #[default]
    None = 0,
    Square = 1,
    Circle = 2,
}

impl AnnotationType {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AnnotationType {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AnnotationType::None),
            1 => Ok(AnnotationType::Square),
            2 => Ok(AnnotationType::Circle),
            other => Err(ValidationError::UnknownAnnotationType(other)),
        }
    }
}

/// Relation a derived icon was generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IconOrigin {
    SkillTest(SkillTestId),
    CardLink(CardLinkId),
}

/// A positioned instance of an [`crate::Icon`] on one face of a card.
///
/// Icons with neither origin reference are manual and never touched by the
/// projection engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardIcon {
    pub id: CardIconId,
    pub card: CardId,
    pub face: Face,
    pub icon: IconId,
    pub x: u32,
    pub y: u32,
    pub size_x: u32,
    pub size_y: u32,
    pub annotation: String,
    pub annotation_type: u8,
    pub skill_test: Option<SkillTestId>,
    pub card_link: Option<CardLinkId>,
}

impl CardIcon {
    /// Origin of a derived icon, `None` for manual icons.
    pub fn origin(&self) -> Result<Option<IconOrigin>, ValidationError> {
        match (self.skill_test, self.card_link) {
            (Some(skill_test), Some(card_link)) => Err(ValidationError::DualOrigin {
                skill_test,
                card_link,
            }),
            (Some(skill_test), None) => Ok(Some(IconOrigin::SkillTest(skill_test))),
            (None, Some(card_link)) => Ok(Some(IconOrigin::CardLink(card_link))),
            (None, None) => Ok(None),
        }
    }

    pub fn set_origin(&mut self, origin: Option<IconOrigin>) {
        self.skill_test = None;
        self.card_link = None;
        match origin {
            Some(IconOrigin::SkillTest(id)) => self.skill_test = Some(id),
            Some(IconOrigin::CardLink(id)) => self.card_link = Some(id),
            None => {}
        }
    }

    /// Returns true if this icon belongs to the given relation.
    pub fn is_owned_by(&self, origin: IconOrigin) -> bool {
        match origin {
            IconOrigin::SkillTest(id) => self.skill_test == Some(id),
            IconOrigin::CardLink(id) => self.card_link == Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_codes_round_trip_known_values() {
        for ty in [
            AnnotationType::None,
            AnnotationType::Square,
            AnnotationType::Circle,
        ] {
            assert_eq!(AnnotationType::try_from(ty.code()), Ok(ty));
        }
        assert_eq!(
            AnnotationType::try_from(7),
            Err(ValidationError::UnknownAnnotationType(7))
        );
    }

    #[test]
    fn origin_rejects_both_references() {
        let icon = CardIcon {
            skill_test: Some(SkillTestId(1)),
            card_link: Some(CardLinkId(2)),
            ..CardIcon::default()
        };
        assert!(matches!(
            icon.origin(),
            Err(ValidationError::DualOrigin { .. })
        ));
    }

    #[test]
    fn set_origin_clears_the_other_reference() {
        let mut icon = CardIcon {
            skill_test: Some(SkillTestId(1)),
            ..CardIcon::default()
        };
        icon.set_origin(Some(IconOrigin::CardLink(CardLinkId(4))));
        assert_eq!(icon.skill_test, None);
        assert_eq!(icon.origin(), Ok(Some(IconOrigin::CardLink(CardLinkId(4)))));
        assert!(icon.is_owned_by(IconOrigin::CardLink(CardLinkId(4))));
        assert!(!icon.is_owned_by(IconOrigin::SkillTest(SkillTestId(1))));
    }
}
