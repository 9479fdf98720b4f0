use crate::error::ValidationError;
use crate::ids::{CardId, LocationCardId, LocationId, ScenarioId};

/// A place players can visit, made of lettered cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: LocationId,
    pub scenario: ScenarioId,
    pub name: String,
    pub hidden: bool,
    pub notes: String,
}

/// Letter slot of a card within a location. Unique per location.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum LocationLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl LocationLetter {
    /// Parses user input, ignoring surrounding whitespace and case.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        input
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidLetter(input.to_string()))
    }
}

/// Membership of a card in a location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationCard {
    pub id: LocationCardId,
    pub location: LocationId,
    pub card: CardId,
    pub letter: LocationLetter,
}

impl LocationCard {
    /// Description given to the backing card.
    pub fn card_description(location_name: &str, letter: LocationLetter) -> String {
        format!("{} - {}", location_name, letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_parse_case_insensitively() {
        assert_eq!(LocationLetter::parse("f"), Ok(LocationLetter::F));
        assert_eq!(LocationLetter::parse(" C "), Ok(LocationLetter::C));
        assert_eq!(
            LocationLetter::parse("I"),
            Err(ValidationError::InvalidLetter("I".into()))
        );
        assert!(LocationLetter::parse("").is_err());
    }

    #[test]
    fn backing_card_description() {
        assert_eq!(
            LocationCard::card_description("Dortoir", LocationLetter::F),
            "Dortoir - F"
        );
    }
}
