//! Scenarios, icon palette, stats and state tokens.

use scenario_core::validation::normalize_name;
use scenario_core::{Icon, IconId, Scenario, ScenarioId, Stat, StatId, StateToken, StateTokenId};
use tracing::info;

use super::{ScenarioService, require};
use crate::engine::base_icon;
use crate::error::{EngineError, Result};
use crate::repository::LinkStore;

impl<S: LinkStore> ScenarioService<S> {
    pub fn create_scenario(&self, name: &str) -> Result<Scenario> {
        let name = normalize_name("scenario", name)?;
        let scenario = self.store.transaction(|tables| {
            let id = tables.scenarios.insert(Scenario {
                id: ScenarioId::UNSET,
                name,
            });
            require(&tables.scenarios, id).cloned()
        })?;
        info!(scenario = %scenario.id, name = %scenario.name, "created scenario");
        Ok(scenario)
    }

    pub fn load_scenario(&self, id: ScenarioId) -> Result<Scenario> {
        self.store
            .read(|tables| require(&tables.scenarios, id).cloned())
    }

    pub fn list_scenarios(&self) -> Result<Vec<Scenario>> {
        self.store
            .read(|tables| Ok(tables.scenarios.iter().cloned().collect()))
    }

    /// Adds a palette entry; `scenario = None` makes it global.
    ///
    /// Global short names are unique since base icons are looked up by them.
    pub fn create_icon(
        &self,
        scenario: Option<ScenarioId>,
        short_name: &str,
        url: &str,
    ) -> Result<Icon> {
        let short_name = normalize_name("icon", short_name)?;
        let icon = self.store.transaction(|tables| {
            match scenario {
                Some(scenario) => {
                    require(&tables.scenarios, scenario)?;
                }
                None => {
                    if base_icon(tables, &short_name).is_ok() {
                        return Err(EngineError::Conflict(format!(
                            "global icon {:?} already exists",
                            short_name
                        )));
                    }
                }
            }
            let id = tables.icons.insert(Icon {
                id: IconId::UNSET,
                scenario,
                short_name,
                url: url.to_string(),
            });
            require(&tables.icons, id).cloned()
        })?;
        info!(
            icon = %icon.id,
            short_name = %icon.short_name,
            global = icon.is_global(),
            "created icon"
        );
        Ok(icon)
    }

    /// Loads an icon visible from `scenario`: global icons always are,
    /// scenario icons only from their own scenario.
    pub fn load_icon(&self, scenario: Option<ScenarioId>, id: IconId) -> Result<Icon> {
        self.store.read(|tables| {
            tables
                .icons
                .get(id)
                .filter(|icon| icon.is_global() || icon.scenario == scenario)
                .cloned()
                .ok_or_else(|| EngineError::not_found("icon", id))
        })
    }

    pub fn load_base_icon(&self, short_name: &str) -> Result<Icon> {
        self.store
            .read(|tables| base_icon(tables, short_name).cloned())
    }

    pub fn create_stat(
        &self,
        scenario: ScenarioId,
        icon: IconId,
        name: &str,
        description: &str,
    ) -> Result<Stat> {
        let name = normalize_name("stat", name)?;
        let stat = self.store.transaction(|tables| {
            require(&tables.scenarios, scenario)?;
            tables
                .icons
                .get(icon)
                .filter(|row| row.is_visible_from(scenario))
                .ok_or_else(|| EngineError::not_found("icon", icon))?;
            let id = tables.stats.insert(Stat {
                id: StatId::UNSET,
                scenario,
                name,
                description: description.to_string(),
                icon,
            });
            require(&tables.stats, id).cloned()
        })?;
        info!(stat = %stat.id, scenario = %scenario, name = %stat.name, "created stat");
        Ok(stat)
    }

    /// State tokens are shared by every scenario, so their icon must be global.
    pub fn create_state_token(&self, short_name: &str, icon: IconId) -> Result<StateToken> {
        let short_name = normalize_name("state token", short_name)?;
        let token = self.store.transaction(|tables| {
            tables
                .icons
                .get(icon)
                .filter(|row| row.is_global())
                .ok_or_else(|| EngineError::not_found("base icon", icon))?;
            let id = tables.state_tokens.insert(StateToken {
                id: StateTokenId::UNSET,
                short_name,
                icon,
            });
            require(&tables.state_tokens, id).cloned()
        })?;
        info!(
            state_token = %token.id,
            short_name = %token.short_name,
            "created state token"
        );
        Ok(token)
    }
}
