//! Typed row identifiers.
//!
//! Every table uses an auto-increment `i64` identity. Wrapping each one in its
//! own type keeps a stat id from being passed where a card id is expected.
//! `0` means "not persisted yet".

use core::fmt;

macro_rules! define_id {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            #[cfg_attr(
                feature = "serde",
                derive(serde::Serialize, serde::Deserialize),
                serde(transparent)
            )]
            pub struct $name(pub i64);

            impl $name {
                /// Identity of a row that has not been inserted.
                pub const UNSET: Self = Self(0);

                #[inline]
                pub const fn is_set(self) -> bool {
                    self.0 != 0
                }
            }

            impl From<i64> for $name {
                fn from(value: i64) -> Self {
                    Self(value)
                }
            }

            impl From<$name> for i64 {
                fn from(id: $name) -> i64 {
                    id.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "#{}", self.0)
                }
            }
        )+
    };
}

define_id! {
    /// Top-level authoring unit; every other row belongs to one.
    ScenarioId;
    CardId;
    CardIconId;
    IconId;
    StatId;
    StateTokenId;
    SkillTestId;
    CardLinkId;
    LocationId;
    LocationCardId;
    LocationLinkId;
    ElementId;
    ElementLinkId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_is_zero() {
        assert!(!CardId::UNSET.is_set());
        assert!(CardId(7).is_set());
        assert_eq!(CardId::default(), CardId::UNSET);
    }

    #[test]
    fn display_uses_hash_prefix() {
        assert_eq!(LocationId(12).to_string(), "#12");
    }
}
