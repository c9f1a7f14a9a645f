//! Store and change feed handed to components through context
use crate::storage::{BrowserStorage, WindowChangeFeed};
use rehome_core::{ChangeFeed, ItemStore, MarketConfig, PersistedItemStore};
use std::rc::Rc;

/// Collaborators the item grid needs. Injected so components render against
/// fakes in tests and against `localStorage` in the browser.
#[derive(Clone)]
pub struct MarketServices {
    pub store: Rc<dyn ItemStore>,
    pub feed: Rc<dyn ChangeFeed>,
    pub config: Rc<MarketConfig>,
}

impl PartialEq for MarketServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
            && Rc::ptr_eq(&self.feed, &other.feed)
            && Rc::ptr_eq(&self.config, &other.config)
    }
}

impl MarketServices {
    pub fn new(
        store: Rc<dyn ItemStore>,
        feed: Rc<dyn ChangeFeed>,
        config: Rc<MarketConfig>,
    ) -> Self {
        Self {
            store,
            feed,
            config,
        }
    }

    /// Services backed by `localStorage` and window events.
    #[must_use]
    pub fn browser(config: MarketConfig) -> Self {
        let feed = WindowChangeFeed::from_config(&config);
        let store = PersistedItemStore::with_config(BrowserStorage, feed.clone(), &config);
        Self::new(Rc::new(store), Rc::new(feed), Rc::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rehome_core::{ChangeBus, MemoryBackend};

    #[test]
    fn equality_is_by_identity() {
        let bus = ChangeBus::new();
        let store: Rc<dyn ItemStore> = Rc::new(PersistedItemStore::new(
            MemoryBackend::new(),
            bus.clone(),
            "donatedItems",
        ));
        let feed: Rc<dyn ChangeFeed> = Rc::new(bus);
        let config = Rc::new(MarketConfig::default());
        let a = MarketServices::new(Rc::clone(&store), Rc::clone(&feed), Rc::clone(&config));
        let b = a.clone();
        assert!(a == b);
        let c = MarketServices::new(store, feed, Rc::new(MarketConfig::default()));
        assert!(a != c);
    }
}
