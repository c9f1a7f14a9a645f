//! Change notification: a narrow publish/subscribe capability
//!
//! Stores publish through [`ChangeNotifier`]; grids listen through [`ChangeFeed`].
//! The web crate backs both with window events, tests and the tester use
//! [`ChangeBus`].
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Payload-free change callback.
pub type Listener = Rc<dyn Fn()>;

/// Broadcasts "the store changed" to every subscriber.
pub trait ChangeNotifier {
    fn notify(&self);
}

/// Source of change notifications a grid can subscribe to.
pub trait ChangeFeed {
    /// Register `listener`. It stays registered until the returned guard drops.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

impl<T: ChangeNotifier + ?Sized> ChangeNotifier for Rc<T> {
    fn notify(&self) {
        (**self).notify();
    }
}

impl<T: ChangeFeed + ?Sized> ChangeFeed for Rc<T> {
    fn subscribe(&self, listener: Listener) -> Subscription {
        (**self).subscribe(listener)
    }
}

/// Unsubscribes when dropped.
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A guard with nothing to undo, for feeds that could not attach.
    pub fn detached() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.cancel.is_some())
            .finish()
    }
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// In-process change bus shared by every clone.
#[derive(Clone, Default)]
pub struct ChangeBus {
    inner: Rc<RefCell<BusInner>>,
}

impl ChangeBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ChangeNotifier for ChangeBus {
    fn notify(&self) {
        // Listeners may subscribe or unsubscribe while running.
        let snapshot: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        log::debug!("change bus notifying {} listener(s)", snapshot.len());
        for listener in snapshot {
            listener();
        }
    }
}

impl ChangeFeed for ChangeBus {
    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener));
            id
        };
        let weak: Weak<RefCell<BusInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}
