//! Icon projection: materializes the card icon set a relation owns.

use scenario_core::validation::{validate_card_icon, validate_skill_test};
use scenario_core::{
    CardIcon, CardIconId, CardLink, Icon, IconOrigin, IconPlacement, LayoutConfig, SkillTest,
    card_link_placement, skill_test_layout,
};
use tracing::{debug, error};

use crate::error::{EngineError, Result};
use crate::repository::Tables;

/// Looks up a global icon by short name.
pub fn base_icon<'t>(tables: &'t Tables, short_name: &str) -> Result<&'t Icon> {
    tables
        .icons
        .select_one(|icon| icon.is_global() && icon.short_name == short_name)
        .ok_or_else(|| EngineError::not_found("base icon", short_name))
}

/// Applies the projection rules against a set of tables.
///
/// Every method expects to run inside one store transaction: relation row
/// and icon set are written together or not at all.
pub struct IconProjector<'a> {
    layout: &'a LayoutConfig,
}

impl<'a> IconProjector<'a> {
    pub fn new(layout: &'a LayoutConfig) -> Self {
        Self { layout }
    }

    /// Icon set a skill test should own.
    pub fn skill_test_placements(
        &self,
        tables: &Tables,
        skill_test: &SkillTest,
    ) -> Result<Vec<IconPlacement>> {
        validate_skill_test(skill_test, self.layout)?;
        let stat = tables
            .stats
            .get(skill_test.stat)
            .ok_or_else(|| EngineError::not_found("stat", skill_test.stat))?;
        let stat_icon = tables
            .icons
            .get(stat.icon)
            .filter(|icon| icon.is_visible_from(stat.scenario))
            .ok_or_else(|| EngineError::not_found("icon", stat.icon))?;

        skill_test_layout(&skill_test.shields, stat_icon.id, self.layout, |kind| {
            base_icon(tables, kind.icon_short_name()).map(|icon| icon.id)
        })
    }

    /// The single icon a card link should own.
    pub fn card_link_placement(&self, tables: &Tables, link: &CardLink) -> Result<IconPlacement> {
        let token = tables
            .state_tokens
            .get(link.state_token)
            .ok_or_else(|| EngineError::not_found("state token", link.state_token))?;
        let icon = tables
            .icons
            .get(token.icon)
            .ok_or_else(|| EngineError::not_found("icon", token.icon))?;
        Ok(card_link_placement(icon.id, link.unlocks_unlocked, self.layout))
    }

    /// Inserts the icon set of a freshly stored skill test.
    pub fn synthesize_skill_test_icons(
        &self,
        tables: &mut Tables,
        skill_test: &SkillTest,
    ) -> Result<Vec<CardIconId>> {
        let placements = self.skill_test_placements(tables, skill_test)?;
        let origin = IconOrigin::SkillTest(skill_test.id);

        let ids = placements
            .iter()
            .map(|placement| {
                self.insert_card_icon(tables, placement.to_card_icon(skill_test.card, origin))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            skill_test = %skill_test.id,
            card = %skill_test.card,
            icons = ids.len(),
            "projected skill test icons"
        );
        Ok(ids)
    }

    /// Replaces the whole icon set of an updated skill test.
    pub fn resynthesize_skill_test_icons(
        &self,
        tables: &mut Tables,
        skill_test: &SkillTest,
    ) -> Result<Vec<CardIconId>> {
        remove_icons(tables, IconOrigin::SkillTest(skill_test.id));
        self.synthesize_skill_test_icons(tables, skill_test)
    }

    /// Inserts the icon of a freshly stored card link.
    pub fn synthesize_card_link_icon(
        &self,
        tables: &mut Tables,
        link: &CardLink,
    ) -> Result<CardIconId> {
        let placement = self.card_link_placement(tables, link)?;
        let id = self.insert_card_icon(
            tables,
            placement.to_card_icon(link.card, IconOrigin::CardLink(link.id)),
        )?;

        debug!(
            card_link = %link.id,
            card = %link.card,
            face = ?link.face(),
            "projected card link icon"
        );
        Ok(id)
    }

    /// Replaces the icon of an updated card link.
    ///
    /// Exactly one icon must reference the link beforehand; any other count
    /// is reported as corruption and nothing is changed.
    pub fn resynthesize_card_link_icon(
        &self,
        tables: &mut Tables,
        link: &CardLink,
    ) -> Result<CardIconId> {
        let origin = IconOrigin::CardLink(link.id);
        let owned = tables.card_icons.count_where(|icon| icon.is_owned_by(origin));
        if owned != 1 {
            error!(card_link = %link.id, owned, "card link does not own exactly one icon");
            return Err(EngineError::InvariantViolation(format!(
                "card link {} owns {} icons, expected 1",
                link.id, owned
            )));
        }

        remove_icons(tables, origin);
        self.synthesize_card_link_icon(tables, link)
    }

    /// Validates a card icon row and checks that its card and icon exist.
    pub fn check_card_icon(&self, tables: &Tables, row: &CardIcon) -> Result<()> {
        validate_card_icon(row, self.layout)?;
        let card = tables
            .cards
            .get(row.card)
            .ok_or_else(|| EngineError::not_found("card", row.card))?;
        tables
            .icons
            .get(row.icon)
            .filter(|icon| icon.is_visible_from(card.scenario))
            .ok_or_else(|| EngineError::not_found("icon", row.icon))?;
        Ok(())
    }

    fn insert_card_icon(&self, tables: &mut Tables, row: CardIcon) -> Result<CardIconId> {
        self.check_card_icon(tables, &row)?;
        Ok(tables.card_icons.insert(row))
    }
}

/// Deletes every icon owned by `origin`. Returns the affected row count.
pub fn remove_icons(tables: &mut Tables, origin: IconOrigin) -> usize {
    tables
        .card_icons
        .delete_where(|icon| icon.is_owned_by(origin))
}
