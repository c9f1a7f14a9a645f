//! Item store: the persisted donation list and its storage backends
use crate::codec::{decode_items, encode_items};
use crate::config::MarketConfig;
use crate::error::StoreError;
use crate::item::DonatedItem;
use crate::notify::ChangeNotifier;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// String key/value storage, e.g. browser `localStorage`.
pub trait KeyValueBackend {
    /// Read a key. `Ok(None)` when the key is unset.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Deleting an unset key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueBackend + ?Sized> KeyValueBackend for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}

/// In-process backend; clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.get() {
            Err(StoreError::Unavailable("memory backend disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Boundary contract the grid relies on. Every operation fails soft.
pub trait ItemStore {
    /// All persisted items, newest first. Empty if storage is absent or corrupt.
    fn list(&self) -> Vec<DonatedItem>;

    /// Delete the item with `id`. No-op if absent. Notifies after a write.
    fn remove(&self, id: &str);

    /// Prepend `item`, replacing any entry with the same id. Notifies after a write.
    fn insert(&self, item: DonatedItem);
}

impl<T: ItemStore + ?Sized> ItemStore for Rc<T> {
    fn list(&self) -> Vec<DonatedItem> {
        (**self).list()
    }

    fn remove(&self, id: &str) {
        (**self).remove(id);
    }

    fn insert(&self, item: DonatedItem) {
        (**self).insert(item);
    }
}

/// [`ItemStore`] persisting a JSON array under one key of a [`KeyValueBackend`].
pub struct PersistedItemStore<B, N> {
    backend: B,
    notifier: N,
    key: String,
}

impl<B, N> PersistedItemStore<B, N>
where
    B: KeyValueBackend,
    N: ChangeNotifier,
{
    pub fn new(backend: B, notifier: N, key: impl Into<String>) -> Self {
        Self {
            backend,
            notifier,
            key: key.into(),
        }
    }

    pub fn with_config(backend: B, notifier: N, config: &MarketConfig) -> Self {
        Self::new(backend, notifier, config.storage_key.clone())
    }

    /// Strict read, surfacing backend and codec failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or the stored text is corrupt.
    pub fn load(&self) -> Result<Vec<DonatedItem>, StoreError> {
        let raw = self.backend.get(&self.key)?;
        decode_items(raw.as_deref())
    }

    fn write(&self, items: &[DonatedItem]) -> Result<(), StoreError> {
        let text = encode_items(items)?;
        self.backend.set(&self.key, &text)
    }

    /// Drop every persisted item, as an external "clear storage" would.
    pub fn clear(&self) {
        match self.backend.delete(&self.key) {
            Ok(()) => self.notifier.notify(),
            Err(err) => log::warn!("clearing '{}' failed: {err}", self.key),
        }
    }
}

impl<B, N> ItemStore for PersistedItemStore<B, N>
where
    B: KeyValueBackend,
    N: ChangeNotifier,
{
    fn list(&self) -> Vec<DonatedItem> {
        self.load().unwrap_or_else(|err| {
            log::warn!("reading '{}' failed, showing no donations: {err}", self.key);
            Vec::new()
        })
    }

    fn remove(&self, id: &str) {
        let mut items = match self.load() {
            Ok(items) => items,
            Err(err) => {
                log::warn!("cannot remove '{id}', store unreadable: {err}");
                return;
            }
        };
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            log::debug!("remove '{id}': not present");
            return;
        }
        match self.write(&items) {
            Ok(()) => {
                log::info!("removed donation '{id}'");
                self.notifier.notify();
            }
            Err(err) => log::warn!("cannot remove '{id}': {err}"),
        }
    }

    fn insert(&self, item: DonatedItem) {
        let mut items = self.load().unwrap_or_else(|err| {
            log::warn!("replacing unreadable '{}': {err}", self.key);
            Vec::new()
        });
        items.retain(|existing| existing.id != item.id);
        let id = item.id.clone();
        items.insert(0, item);
        match self.write(&items) {
            Ok(()) => {
                log::info!("stored donation '{id}'");
                self.notifier.notify();
            }
            Err(err) => log::warn!("cannot store '{id}': {err}"),
        }
    }
}
