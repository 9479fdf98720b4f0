//! Common error infrastructure for scenario-core.
//!
//! Validation failures are plain data: they carry the offending values so the
//! API layer can build a user-facing message without re-deriving anything.

use core::fmt;

use crate::ids::{CardLinkId, SkillTestId};
use crate::model::ShieldKind;

/// Severity level of an error, used by callers to pick a response.
///
/// - **Validation**: invalid input, rejected without retry
/// - **NotFound**: a referenced row is absent
/// - **Conflict**: input is well-formed but clashes with existing rows
/// - **Internal**: stored data violates an invariant (corruption)
/// - **Storage**: the backing store failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    NotFound,
    Conflict,
    Internal,
    Storage,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
            Self::Storage => "storage",
        }
    }

    /// Returns true if the failure points at corrupted or unavailable data
    /// rather than at the caller's input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Storage)
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card axis checked by the bounds rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Shape and bounds violations detected before a row is persisted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing reference to {0} object")]
    MissingReference(&'static str),

    #[error("{axis} extent {extent} too big (max {max})")]
    OutOfBounds { axis: Axis, extent: u64, max: u32 },

    #[error("unknown annotation type {0}")]
    UnknownAnnotationType(u8),

    #[error("card icon references both skill test {skill_test} and card link {card_link}")]
    DualOrigin {
        skill_test: SkillTestId,
        card_link: CardLinkId,
    },

    #[error("too many {kind} shields: {count} (max {max})")]
    TooManyShields {
        kind: ShieldKind,
        count: u32,
        max: u32,
    },

    #[error("empty {0} name")]
    EmptyName(&'static str),

    #[error("invalid location letter: {0:?}")]
    InvalidLetter(String),

    #[error("missing element number")]
    MissingElementNumber,
}

impl ValidationError {
    pub const fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}
