//! Typed tables with auto-increment identity.

use std::collections::BTreeMap;

use scenario_core::{
    Card, CardIcon, CardIconId, CardId, CardLink, CardLinkId, Element, ElementId, ElementLink,
    ElementLinkId, Icon, IconId, Location, LocationCard, LocationCardId, LocationId, LocationLink,
    LocationLinkId, Scenario, ScenarioId, SkillTest, SkillTestId, Stat, StatId, StateToken,
    StateTokenId,
};
use serde::{Deserialize, Serialize};

/// A row stored in a [`Table`].
pub trait Row: Clone {
    type Id: Copy + Eq + From<i64> + Into<i64>;

    /// Table name, used in logs and error messages.
    const TABLE: &'static str;

    fn id(&self) -> Self::Id;
    fn set_id(&mut self, id: Self::Id);
}

macro_rules! impl_row {
    ($($row:ty => $id:ty, $table:literal;)+) => {
        $(
            impl Row for $row {
                type Id = $id;
                const TABLE: &'static str = $table;

                fn id(&self) -> $id {
                    self.id
                }

                fn set_id(&mut self, id: $id) {
                    self.id = id;
                }
            }
        )+
    };
}

impl_row! {
    Scenario => ScenarioId, "scenario";
    Card => CardId, "card";
    CardIcon => CardIconId, "card_icon";
    Icon => IconId, "icon";
    Stat => StatId, "stat";
    StateToken => StateTokenId, "state_token";
    SkillTest => SkillTestId, "skill_test";
    CardLink => CardLinkId, "card_link";
    Location => LocationId, "location";
    LocationCard => LocationCardId, "location_card";
    LocationLink => LocationLinkId, "location_link";
    Element => ElementId, "element";
    ElementLink => ElementLinkId, "element_link";
}

/// Rows keyed by identity. Iteration and query results follow id order,
/// which is insertion order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Table<R> {
    next_id: i64,
    rows: BTreeMap<i64, R>,
}

fn key(id: impl Into<i64>) -> i64 {
    id.into()
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<R: Row> Table<R> {
    /// Inserts `row` under a fresh identity and returns it. Any id already
    /// set on the row is overwritten.
    pub fn insert(&mut self, mut row: R) -> R::Id {
        let id = R::Id::from(self.next_id);
        self.next_id += 1;
        row.set_id(id);
        self.rows.insert(key(id), row);
        id
    }

    /// Replaces the row with the same identity. Returns the affected row count.
    pub fn update(&mut self, row: &R) -> usize {
        match self.rows.get_mut(&key(row.id())) {
            Some(slot) => {
                *slot = row.clone();
                1
            }
            None => 0,
        }
    }

    /// Returns the affected row count.
    pub fn delete(&mut self, id: R::Id) -> usize {
        usize::from(self.rows.remove(&key(id)).is_some())
    }

    /// Deletes every row matching `pred`. Returns the affected row count.
    pub fn delete_where(&mut self, mut pred: impl FnMut(&R) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, row| !pred(row));
        before - self.rows.len()
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.rows.get(&key(id))
    }

    pub fn contains(&self, id: R::Id) -> bool {
        self.rows.contains_key(&key(id))
    }

    pub fn select_one(&self, mut pred: impl FnMut(&R) -> bool) -> Option<&R> {
        self.rows.values().find(|row| pred(row))
    }

    pub fn select_many(&self, mut pred: impl FnMut(&R) -> bool) -> Vec<&R> {
        self.rows.values().filter(|row| pred(row)).collect()
    }

    /// Identities of every row matching `pred`.
    pub fn select_ids(&self, mut pred: impl FnMut(&R) -> bool) -> Vec<R::Id> {
        self.rows
            .values()
            .filter(|row| pred(row))
            .map(Row::id)
            .collect()
    }

    pub fn count_where(&self, mut pred: impl FnMut(&R) -> bool) -> usize {
        self.rows.values().filter(|row| pred(row)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Checks keys against row identities and the identity counter.
    fn verify(&self) -> Result<(), String> {
        for (&key, row) in &self.rows {
            let id: i64 = row.id().into();
            if id != key {
                return Err(format!("{} row keyed {} carries id {}", R::TABLE, key, id));
            }
            if key <= 0 || key >= self.next_id {
                return Err(format!(
                    "{} id {} outside allocated range 1..{}",
                    R::TABLE,
                    key,
                    self.next_id
                ));
            }
        }
        Ok(())
    }
}

/// Every table of the link store.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tables {
    pub scenarios: Table<Scenario>,
    pub cards: Table<Card>,
    pub card_icons: Table<CardIcon>,
    pub icons: Table<Icon>,
    pub stats: Table<Stat>,
    pub state_tokens: Table<StateToken>,
    pub skill_tests: Table<SkillTest>,
    pub card_links: Table<CardLink>,
    pub locations: Table<Location>,
    pub location_cards: Table<LocationCard>,
    pub location_links: Table<LocationLink>,
    pub elements: Table<Element>,
    pub element_links: Table<ElementLink>,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Structural check run on snapshots loaded from outside the process.
    pub fn verify(&self) -> Result<(), String> {
        self.scenarios.verify()?;
        self.cards.verify()?;
        self.card_icons.verify()?;
        self.icons.verify()?;
        self.stats.verify()?;
        self.state_tokens.verify()?;
        self.skill_tests.verify()?;
        self.card_links.verify()?;
        self.locations.verify()?;
        self.location_cards.verify()?;
        self.location_links.verify()?;
        self.elements.verify()?;
        self.element_links.verify()?;
        Ok(())
    }

    /// Row count per table, in declaration order.
    pub fn row_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            (Scenario::TABLE, self.scenarios.len()),
            (Card::TABLE, self.cards.len()),
            (CardIcon::TABLE, self.card_icons.len()),
            (Icon::TABLE, self.icons.len()),
            (Stat::TABLE, self.stats.len()),
            (StateToken::TABLE, self.state_tokens.len()),
            (SkillTest::TABLE, self.skill_tests.len()),
            (CardLink::TABLE, self.card_links.len()),
            (Location::TABLE, self.locations.len()),
            (LocationCard::TABLE, self.location_cards.len()),
            (LocationLink::TABLE, self.location_links.len()),
            (Element::TABLE, self.elements.len()),
            (ElementLink::TABLE, self.element_links.len()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(name: &str) -> Scenario {
        Scenario {
            id: ScenarioId::UNSET,
            name: name.into(),
        }
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut table = Table::<Scenario>::default();
        let a = table.insert(scenario("a"));
        let b = table.insert(scenario("b"));
        assert_eq!((a, b), (ScenarioId(1), ScenarioId(2)));
        assert_eq!(table.get(b).map(|s| s.name.as_str()), Some("b"));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut table = Table::<Scenario>::default();
        let a = table.insert(scenario("a"));
        assert_eq!(table.delete(a), 1);
        assert_eq!(table.delete(a), 0);
        assert_eq!(table.insert(scenario("b")), ScenarioId(2));
    }

    #[test]
    fn update_reports_affected_rows() {
        let mut table = Table::<Scenario>::default();
        let id = table.insert(scenario("a"));
        let mut row = table.get(id).cloned().unwrap();
        row.name = "renamed".into();
        assert_eq!(table.update(&row), 1);
        row.id = ScenarioId(99);
        assert_eq!(table.update(&row), 0);
        assert_eq!(table.get(id).unwrap().name, "renamed");
    }

    #[test]
    fn select_follows_insertion_order() {
        let mut table = Table::<Scenario>::default();
        for name in ["c", "a", "b"] {
            table.insert(scenario(name));
        }
        let names: Vec<_> = table
            .select_many(|_| true)
            .into_iter()
            .map(|s| s.name.clone())
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert_eq!(table.delete_where(|s| s.name != "a"), 2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn verify_rejects_mismatched_keys() {
        let mut tables = Tables::new();
        tables.scenarios.insert(scenario("a"));
        assert_eq!(tables.verify(), Ok(()));
        tables.scenarios.rows.get_mut(&1).unwrap().id = ScenarioId(5);
        assert!(tables.verify().is_err());
    }
}
