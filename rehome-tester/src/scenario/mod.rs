//! Headless claim and sync scenarios run against the in-memory store.

pub mod catalog;

use anyhow::Result;
use rehome_core::{
    ChangeBus, Condition, DonatedItem, ItemStore, MarketConfig, MemoryBackend, MountedGrid,
    PersistedItemStore,
};
use std::rc::Rc;

pub type Store = PersistedItemStore<MemoryBackend, ChangeBus>;

/// Fresh store, change bus and config for one scenario run.
pub struct Fixture {
    pub backend: MemoryBackend,
    pub bus: ChangeBus,
    pub store: Rc<Store>,
    pub config: MarketConfig,
}

impl Fixture {
    #[must_use]
    pub fn new() -> Self {
        let config = MarketConfig::default_config();
        let backend = MemoryBackend::new();
        let bus = ChangeBus::new();
        let store = Rc::new(PersistedItemStore::with_config(
            backend.clone(),
            bus.clone(),
            &config,
        ));
        Self {
            backend,
            bus,
            store,
            config,
        }
    }

    pub fn mount(&self) -> MountedGrid<Store> {
        MountedGrid::mount(
            Rc::clone(&self.store),
            &self.bus,
            self.config.placeholders.clone(),
        )
    }

    pub fn donate(&self, id: &str, name: &str) {
        self.store.insert(DonatedItem {
            id: id.to_string(),
            item_name: name.to_string(),
            description: format!("{name}, donated for the scenario run"),
            category: "Household".to_string(),
            condition: Condition::Good,
            location: "Downtown".to_string(),
            image_base64: String::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
        });
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A named check against a fresh [`Fixture`].
#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    check: fn(&Fixture) -> Result<()>,
}

impl Scenario {
    pub const fn new(
        key: &'static str,
        description: &'static str,
        check: fn(&Fixture) -> Result<()>,
    ) -> Self {
        Self {
            key,
            description,
            check,
        }
    }

    /// Run once against a brand-new fixture.
    ///
    /// # Errors
    /// Returns the first expectation the run violated.
    pub fn run(&self) -> Result<()> {
        let fixture = Fixture::new();
        (self.check)(&fixture)
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario").field("key", &self.key).finish()
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog::all()
        .iter()
        .map(|scenario| (scenario.key, scenario.description))
        .collect()
}

pub fn get_scenario(key: &str) -> Option<Scenario> {
    catalog::all().into_iter().find(|scenario| scenario.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_scenario_passes() {
        for scenario in catalog::all() {
            if let Err(err) = scenario.run() {
                panic!("{} failed: {err:#}", scenario.key);
            }
        }
    }

    #[test]
    fn scenarios_are_found_by_key() {
        assert!(get_scenario("lamp-claim").is_some());
        assert!(get_scenario("nope").is_none());
        let keys: Vec<_> = list_scenarios().into_iter().map(|(key, _)| key).collect();
        let unique: std::collections::BTreeSet<_> = keys.iter().collect();
        assert_eq!(keys.len(), unique.len());
    }
}
