//! Bounds and shape checks run before any row is inserted or updated.
//!
//! These are pure: existence of referenced rows is checked by the runtime,
//! which owns the store. Here a reference only has to be set.

use crate::config::LayoutConfig;
use crate::error::{Axis, ValidationError};
use crate::model::{AnnotationType, CardIcon, ShieldCounts, SkillTest};

/// Validates a card icon row.
///
/// Checks, in order: card reference, icon reference, horizontal extent,
/// vertical extent, annotation type, origin exclusivity. An extent equal to
/// the maximum fits.
pub fn validate_card_icon(icon: &CardIcon, layout: &LayoutConfig) -> Result<(), ValidationError> {
    if !icon.card.is_set() {
        return Err(ValidationError::MissingReference("card"));
    }
    if !icon.icon.is_set() {
        return Err(ValidationError::MissingReference("icon"));
    }
    check_extent(Axis::X, icon.x, icon.size_x, layout.max_x)?;
    check_extent(Axis::Y, icon.y, icon.size_y, layout.max_y)?;
    AnnotationType::try_from(icon.annotation_type)?;
    icon.origin()?;
    Ok(())
}

fn check_extent(axis: Axis, origin: u32, size: u32, max: u32) -> Result<(), ValidationError> {
    // Widened so huge coordinates cannot wrap past the check.
    let extent = u64::from(origin) + u64::from(size);
    if extent > u64::from(max) {
        return Err(ValidationError::OutOfBounds { axis, extent, max });
    }
    Ok(())
}

/// Validates every shield category against the configured maximum.
pub fn validate_shields(
    shields: &ShieldCounts,
    layout: &LayoutConfig,
) -> Result<(), ValidationError> {
    for (kind, count) in shields.iter() {
        if count > layout.max_shields {
            return Err(ValidationError::TooManyShields {
                kind,
                count,
                max: layout.max_shields,
            });
        }
    }
    Ok(())
}

/// Validates a skill test row.
pub fn validate_skill_test(
    skill_test: &SkillTest,
    layout: &LayoutConfig,
) -> Result<(), ValidationError> {
    if !skill_test.card.is_set() {
        return Err(ValidationError::MissingReference("card"));
    }
    if !skill_test.stat.is_set() {
        return Err(ValidationError::MissingReference("stat"));
    }
    validate_shields(&skill_test.shields, layout)
}

/// Trims a user-supplied name, rejecting empty results.
pub fn normalize_name(kind: &'static str, name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName(kind));
    }
    Ok(trimmed.to_string())
}

pub fn validate_element_number(number: i32) -> Result<(), ValidationError> {
    if number == 0 {
        return Err(ValidationError::MissingElementNumber);
    }
    Ok(())
}
