//! Browser implementations of the core storage and notification traits
use crate::dom;
use rehome_core::{
    ChangeFeed, ChangeNotifier, KeyValueBackend, Listener, MarketConfig, StoreError, Subscription,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;

/// `window.localStorage` as a [`KeyValueBackend`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn unavailable(err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Unavailable(dom::js_error_message(err))
}

impl KeyValueBackend for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = dom::local_storage().map_err(|e| unavailable(&e))?;
        storage.get_item(key).map_err(|e| unavailable(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = dom::local_storage().map_err(|e| unavailable(&e))?;
        // Quota errors land here.
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(dom::js_error_message(&e)))
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let storage = dom::local_storage().map_err(|e| unavailable(&e))?;
        storage.remove_item(key).map_err(|e| unavailable(&e))
    }
}

/// Change channel over window events.
///
/// Subscribers hear both the same-tab custom event and the platform `storage`
/// event other tabs trigger; the notifier fires the custom event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowChangeFeed {
    storage_key: String,
    change_event: String,
}

impl WindowChangeFeed {
    pub fn new(storage_key: impl Into<String>, change_event: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            change_event: change_event.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &MarketConfig) -> Self {
        Self::new(config.storage_key.clone(), config.change_event.clone())
    }
}

/// Whether a `storage` event with `changed_key` concerns `watched`.
/// A `None` key means the whole storage area was cleared.
#[must_use]
pub fn storage_event_matches(changed_key: Option<&str>, watched: &str) -> bool {
    changed_key.is_none_or(|key| key == watched)
}

impl ChangeFeed for WindowChangeFeed {
    fn subscribe(&self, listener: Listener) -> Subscription {
        let Some(win) = dom::window() else {
            return Subscription::detached();
        };
        let target: &web_sys::EventTarget = win.as_ref();

        let on_storage = {
            let listener = Rc::clone(&listener);
            let watched = self.storage_key.clone();
            dom::listen(target, "storage", move |event| {
                let changed = event
                    .dyn_ref::<web_sys::StorageEvent>()
                    .and_then(web_sys::StorageEvent::key);
                if storage_event_matches(changed.as_deref(), &watched) {
                    listener();
                }
            })
        };
        let on_custom = dom::listen(target, &self.change_event, move |_| listener());

        match (on_storage, on_custom) {
            (Ok(storage_guard), Ok(custom_guard)) => Subscription::new(move || {
                drop(storage_guard);
                drop(custom_guard);
            }),
            (storage, custom) => {
                for err in [storage.err(), custom.err()].into_iter().flatten() {
                    dom::console_error(&format!(
                        "change feed listener failed: {}",
                        dom::js_error_message(&err)
                    ));
                }
                Subscription::detached()
            }
        }
    }
}

impl ChangeNotifier for WindowChangeFeed {
    fn notify(&self) {
        let Some(win) = dom::window() else {
            return;
        };
        let dispatched = web_sys::CustomEvent::new(&self.change_event)
            .and_then(|event| win.dispatch_event(&event));
        if let Err(err) = dispatched {
            dom::console_error(&format!(
                "cannot dispatch '{}': {}",
                self.change_event,
                dom::js_error_message(&err)
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_events_filter_by_key() {
        assert!(storage_event_matches(Some("donatedItems"), "donatedItems"));
        assert!(storage_event_matches(None, "donatedItems"));
        assert!(!storage_event_matches(Some("rehome.locale"), "donatedItems"));
    }

    #[test]
    fn feed_takes_names_from_config() {
        let feed = WindowChangeFeed::from_config(&MarketConfig::default());
        assert_eq!(feed, WindowChangeFeed::new("donatedItems", "donationAdded"));
    }
}
