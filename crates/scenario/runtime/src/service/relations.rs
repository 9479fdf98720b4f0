//! Skill tests and card links together with the icon sets they own.

use scenario_core::{
    CardId, CardLink, CardLinkId, IconOrigin, ScenarioId, ShieldCounts, SkillTest, SkillTestId,
    StatId, StateTokenId,
};
use tracing::info;

use super::{CardLinkFilter, ScenarioService, SkillTestFilter, require};
use crate::engine::remove_icons;
use crate::error::{EngineError, Result};
use crate::repository::{LinkStore, Tables};

impl<S: LinkStore> ScenarioService<S> {
    /// Stores a skill test and projects its icon set onto the card.
    pub fn create_skill_test(
        &self,
        card: CardId,
        stat: StatId,
        shields: ShieldCounts,
    ) -> Result<SkillTest> {
        let skill_test = self.store.transaction(|tables| {
            let scenario = scenario_of(tables, card, stat)?;
            let mut row = SkillTest {
                id: SkillTestId::UNSET,
                scenario,
                card,
                stat,
                shields,
            };
            row.id = tables.skill_tests.insert(row.clone());
            self.projector().synthesize_skill_test_icons(tables, &row)?;
            Ok::<_, EngineError>(row)
        })?;
        info!(
            skill_test = %skill_test.id,
            card = %card,
            stat = %stat,
            "created skill test"
        );
        Ok(skill_test)
    }

    /// Rewrites a skill test and replaces its whole icon set.
    ///
    /// The card a skill test belongs to is permanent; only the stat and the
    /// shield counts are taken from `skill_test`.
    pub fn update_skill_test(&self, skill_test: &SkillTest) -> Result<SkillTest> {
        let updated = self.store.transaction(|tables| {
            let stored = require(&tables.skill_tests, skill_test.id)?;
            let card = stored.card;
            let row = SkillTest {
                scenario: scenario_of(tables, card, skill_test.stat)?,
                card,
                ..skill_test.clone()
            };
            tables.skill_tests.update(&row);
            self.projector().resynthesize_skill_test_icons(tables, &row)?;
            Ok::<_, EngineError>(row)
        })?;
        info!(skill_test = %updated.id, card = %updated.card, "updated skill test");
        Ok(updated)
    }

    pub fn delete_skill_test(&self, id: SkillTestId) -> Result<()> {
        let icons = self.store.transaction(|tables| {
            require(&tables.skill_tests, id)?;
            let icons = remove_icons(tables, IconOrigin::SkillTest(id));
            tables.skill_tests.delete(id);
            Ok::<_, EngineError>(icons)
        })?;
        info!(skill_test = %id, icons, "deleted skill test");
        Ok(())
    }

    pub fn list_skill_tests(
        &self,
        scenario: ScenarioId,
        filter: SkillTestFilter,
    ) -> Result<Vec<SkillTest>> {
        self.store.read(|tables| {
            Ok(tables
                .skill_tests
                .select_many(|st| st.scenario == scenario && filter.matches(st))
                .into_iter()
                .cloned()
                .collect())
        })
    }

    /// Stores a card link and projects its token icon onto the card.
    pub fn create_card_link(
        &self,
        card: CardId,
        state_token: StateTokenId,
        unlocks_unlocked: bool,
    ) -> Result<CardLink> {
        let link = self.store.transaction(|tables| {
            let scenario = require(&tables.cards, card)?.scenario;
            let mut row = CardLink {
                id: CardLinkId::UNSET,
                scenario,
                card,
                state_token,
                unlocks_unlocked,
            };
            row.id = tables.card_links.insert(row.clone());
            self.projector().synthesize_card_link_icon(tables, &row)?;
            Ok::<_, EngineError>(row)
        })?;
        info!(
            card_link = %link.id,
            card = %card,
            state_token = %state_token,
            unlocks_unlocked,
            "created card link"
        );
        Ok(link)
    }

    /// Rewrites a card link and replaces its icon.
    ///
    /// The card and scenario are kept from the stored link. Fails with an
    /// invariant violation, changing nothing, if the link does not own
    /// exactly one icon.
    pub fn update_card_link(&self, link: &CardLink) -> Result<CardLink> {
        let updated = self.store.transaction(|tables| {
            let stored = require(&tables.card_links, link.id)?;
            let row = CardLink {
                scenario: stored.scenario,
                card: stored.card,
                ..link.clone()
            };
            tables.card_links.update(&row);
            self.projector().resynthesize_card_link_icon(tables, &row)?;
            Ok::<_, EngineError>(row)
        })?;
        info!(card_link = %updated.id, card = %updated.card, "updated card link");
        Ok(updated)
    }

    pub fn delete_card_link(&self, id: CardLinkId) -> Result<()> {
        let icons = self.store.transaction(|tables| {
            require(&tables.card_links, id)?;
            let icons = remove_icons(tables, IconOrigin::CardLink(id));
            tables.card_links.delete(id);
            Ok::<_, EngineError>(icons)
        })?;
        info!(card_link = %id, icons, "deleted card link");
        Ok(())
    }

    pub fn list_card_links(
        &self,
        scenario: ScenarioId,
        filter: CardLinkFilter,
    ) -> Result<Vec<CardLink>> {
        self.store.read(|tables| {
            Ok(tables
                .card_links
                .select_many(|cl| cl.scenario == scenario && filter.matches(cl))
                .into_iter()
                .cloned()
                .collect())
        })
    }
}

/// Scenario of `card`, checking that `stat` belongs to the same one.
fn scenario_of(tables: &Tables, card: CardId, stat: StatId) -> Result<ScenarioId> {
    let scenario = require(&tables.cards, card)?.scenario;
    if require(&tables.stats, stat)?.scenario != scenario {
        return Err(EngineError::not_found("stat", stat));
    }
    Ok(scenario)
}
