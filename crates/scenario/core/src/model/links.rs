use crate::ids::{
    CardId, CardLinkId, ElementId, ElementLinkId, LocationId, LocationLinkId, ScenarioId,
    SkillTestId, StatId, StateTokenId,
};
use crate::model::card::Face;

/// Difficulty marker category of a skill test.
///
/// The string form is the short name of the global icon drawn for the
/// category.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShieldKind {
    #[strum(serialize = "normal_shield")]
    Normal,
    #[strum(serialize = "skull_shield")]
    Skull,
    #[strum(serialize = "heart_shield")]
    Heart,
    #[strum(serialize = "ut_shield")]
    Ut,
    #[strum(serialize = "special_shield")]
    Special,
}

impl ShieldKind {
    /// Layout order of shield icons, left to right.
    pub const ALL: [ShieldKind; 5] = [
        ShieldKind::Normal,
        ShieldKind::Skull,
        ShieldKind::Heart,
        ShieldKind::Ut,
        ShieldKind::Special,
    ];

    /// Short name of the global icon for this category.
    pub fn icon_short_name(self) -> &'static str {
        self.into()
    }
}

/// Shield counts of a skill test, one per [`ShieldKind`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShieldCounts {
    pub normal: u32,
    pub skull: u32,
    pub heart: u32,
    pub ut: u32,
    pub special: u32,
}

impl ShieldCounts {
    pub const fn new(normal: u32, skull: u32, heart: u32, ut: u32, special: u32) -> Self {
        Self {
            normal,
            skull,
            heart,
            ut,
            special,
        }
    }

    pub const fn get(&self, kind: ShieldKind) -> u32 {
        match kind {
            ShieldKind::Normal => self.normal,
            ShieldKind::Skull => self.skull,
            ShieldKind::Heart => self.heart,
            ShieldKind::Ut => self.ut,
            ShieldKind::Special => self.special,
        }
    }

    /// Counts in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (ShieldKind, u32)> + '_ {
        ShieldKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Number of categories that produce an icon.
    pub fn present_kinds(&self) -> usize {
        self.iter().filter(|(_, count)| *count > 0).count()
    }
}

/// Card → Stat relation with the test difficulty expressed in shields.
///
/// Owns the icon set laid out by [`crate::skill_test_layout`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillTest {
    pub id: SkillTestId,
    pub scenario: ScenarioId,
    pub card: CardId,
    pub stat: StatId,
    pub shields: ShieldCounts,
}

/// Card → StateToken relation.
///
/// `unlocks_unlocked = true` means the card unlocks the token (icon on the
/// front); `false` means the card is unlocked by it (icon on the back).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardLink {
    pub id: CardLinkId,
    pub scenario: ScenarioId,
    pub card: CardId,
    pub state_token: StateTokenId,
    pub unlocks_unlocked: bool,
}

impl CardLink {
    pub const fn face(&self) -> Face {
        Face::from_front(self.unlocks_unlocked)
    }
}

/// Card reveals Location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationLink {
    pub id: LocationLinkId,
    pub scenario: ScenarioId,
    pub card: CardId,
    pub location: LocationId,
}

/// Granting card gives access to an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementLink {
    pub id: ElementLinkId,
    pub scenario: ScenarioId,
    pub element: ElementId,
    /// The granting card.
    pub card: CardId,
    pub gives_uses: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shield_icon_names_match_string_form() {
        for kind in ShieldKind::ALL {
            assert_eq!(kind.to_string(), kind.icon_short_name());
            assert_eq!(kind.as_ref().parse::<ShieldKind>(), Ok(kind));
        }
    }

    #[test]
    fn ut_count_is_independent_of_heart() {
        let counts = ShieldCounts::new(0, 0, 3, 1, 0);
        assert_eq!(counts.get(ShieldKind::Heart), 3);
        assert_eq!(counts.get(ShieldKind::Ut), 1);
        assert_eq!(counts.present_kinds(), 2);
    }

    #[test]
    fn card_link_face_follows_direction() {
        let unlocks = CardLink {
            unlocks_unlocked: true,
            ..CardLink::default()
        };
        assert_eq!(unlocks.face(), Face::Front);
        let unlocked = CardLink::default();
        assert_eq!(unlocked.face(), Face::Back);
    }
}
