//! Deterministic icon layout for skill tests and card links.
//!
//! The layout functions only decide *what* goes where. Icon ids for the
//! shield categories come from a resolver supplied by the caller, so the
//! runtime can look them up in the store and surface its own not-found error.

use crate::config::LayoutConfig;
use crate::ids::{CardId, IconId};
use crate::model::{AnnotationType, CardIcon, Face, IconOrigin, ShieldCounts, ShieldKind};

/// One icon a relation should own, before it is bound to a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconPlacement {
    pub icon: IconId,
    pub face: Face,
    pub x: u32,
    pub y: u32,
    pub size_x: u32,
    pub size_y: u32,
    pub annotation: String,
    pub annotation_type: AnnotationType,
}

impl IconPlacement {
    fn sized(icon: IconId, face: Face, x: u32, layout: &LayoutConfig) -> Self {
        Self {
            icon,
            face,
            x,
            y: 0,
            size_x: layout.default_size_x,
            size_y: layout.default_size_y,
            annotation: String::new(),
            annotation_type: AnnotationType::None,
        }
    }

    /// Builds the card icon row owned by `origin`.
    pub fn to_card_icon(&self, card: CardId, origin: IconOrigin) -> CardIcon {
        let mut row = CardIcon {
            card,
            face: self.face,
            icon: self.icon,
            x: self.x,
            y: self.y,
            size_x: self.size_x,
            size_y: self.size_y,
            annotation: self.annotation.clone(),
            annotation_type: self.annotation_type.code(),
            ..CardIcon::default()
        };
        row.set_origin(Some(origin));
        row
    }

    /// Returns true if `row` is exactly this placement, ignoring identity and
    /// ownership.
    pub fn matches(&self, row: &CardIcon) -> bool {
        self.icon == row.icon
            && self.face == row.face
            && self.x == row.x
            && self.y == row.y
            && self.size_x == row.size_x
            && self.size_y == row.size_y
            && self.annotation == row.annotation
            && self.annotation_type.code() == row.annotation_type
    }
}

/// Lays out the icon set of a skill test on the front face.
///
/// Shield categories are emitted left to right in [`ShieldKind::ALL`] order,
/// skipping empty ones; a count above one is written as a circled numeral.
/// The stat icon closes the row. Every icon is one default width apart,
/// starting at the origin.
pub fn skill_test_layout<E>(
    shields: &ShieldCounts,
    stat_icon: IconId,
    layout: &LayoutConfig,
    mut shield_icon: impl FnMut(ShieldKind) -> Result<IconId, E>,
) -> Result<Vec<IconPlacement>, E> {
    let mut placements = Vec::with_capacity(shields.present_kinds() + 1);
    let mut offset_x = 0;

    for (kind, count) in shields.iter() {
        if count == 0 {
            continue;
        }
        let mut placement = IconPlacement::sized(shield_icon(kind)?, Face::Front, offset_x, layout);
        if count > 1 {
            placement.annotation = count.to_string();
            placement.annotation_type = AnnotationType::Circle;
        }
        placements.push(placement);
        offset_x += layout.default_size_x;
    }

    placements.push(IconPlacement::sized(stat_icon, Face::Front, offset_x, layout));
    Ok(placements)
}

/// Places the token icon of a card link at the origin of the front face when
/// the card unlocks the token, of the back face when it is unlocked by it.
pub fn card_link_placement(
    token_icon: IconId,
    unlocks_unlocked: bool,
    layout: &LayoutConfig,
) -> IconPlacement {
    IconPlacement::sized(token_icon, Face::from_front(unlocks_unlocked), 0, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SkillTestId;
    use core::convert::Infallible;

    const STAT_ICON: IconId = IconId(100);

    fn shield_icon(kind: ShieldKind) -> Result<IconId, Infallible> {
        Ok(IconId(match kind {
            ShieldKind::Normal => 1,
            ShieldKind::Skull => 2,
            ShieldKind::Heart => 3,
            ShieldKind::Ut => 4,
            ShieldKind::Special => 5,
        }))
    }

    fn layout_of(shields: ShieldCounts) -> Vec<IconPlacement> {
        match skill_test_layout(&shields, STAT_ICON, &LayoutConfig::default(), shield_icon) {
            Ok(placements) => placements,
            Err(never) => match never {},
        }
    }

    #[test]
    fn icon_count_is_present_categories_plus_stat() {
        let placements = layout_of(ShieldCounts::new(1, 0, 2, 0, 4));
        assert_eq!(placements.len(), 4);
        let xs: Vec<u32> = placements.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 20, 40, 60]);
        assert!(placements.iter().all(|p| p.y == 0 && p.face == Face::Front));
        assert!(placements.iter().all(|p| p.size_x == 20 && p.size_y == 20));
        assert_eq!(placements.last().map(|p| p.icon), Some(STAT_ICON));
    }

    #[test]
    fn no_shields_yields_only_the_stat_icon_at_origin() {
        let placements = layout_of(ShieldCounts::default());
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].icon, STAT_ICON);
        assert_eq!(placements[0].x, 0);
    }

    #[test]
    fn counts_above_one_are_circled_numerals() {
        let placements = layout_of(ShieldCounts::new(1, 12, 0, 0, 0));
        assert_eq!(placements[0].annotation, "");
        assert_eq!(placements[0].annotation_type, AnnotationType::None);
        assert_eq!(placements[1].annotation, "12");
        assert_eq!(placements[1].annotation_type, AnnotationType::Circle);
        assert_eq!(placements[2].annotation_type, AnnotationType::None);
    }

    #[test]
    fn ut_shields_use_their_own_count() {
        let placements = layout_of(ShieldCounts::new(0, 0, 0, 3, 0));
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].icon, IconId(4));
        assert_eq!(placements[0].annotation, "3");
    }

    #[test]
    fn resolver_errors_stop_the_layout() {
        let result = skill_test_layout(
            &ShieldCounts::new(1, 1, 0, 0, 0),
            STAT_ICON,
            &LayoutConfig::default(),
            |kind| match kind {
                ShieldKind::Skull => Err(kind),
                _ => Ok(IconId(1)),
            },
        );
        assert_eq!(result, Err(ShieldKind::Skull));
    }

    #[test]
    fn card_link_face_follows_direction() {
        let layout = LayoutConfig::default();
        let front = card_link_placement(IconId(9), true, &layout);
        assert_eq!((front.face, front.x, front.y), (Face::Front, 0, 0));
        let back = card_link_placement(IconId(9), false, &layout);
        assert_eq!(back.face, Face::Back);
    }

    #[test]
    fn placement_binds_to_card_and_origin() {
        let placement = layout_of(ShieldCounts::new(2, 0, 0, 0, 0)).remove(0);
        let row = placement.to_card_icon(CardId(3), IconOrigin::SkillTest(SkillTestId(8)));
        assert_eq!(row.card, CardId(3));
        assert_eq!(row.skill_test, Some(SkillTestId(8)));
        assert_eq!(row.card_link, None);
        assert_eq!(row.annotation_type, AnnotationType::Circle.code());
        assert!(placement.matches(&row));
    }
}
