//! A mounted grid: state machine wired to a store and a change feed
use crate::grid::{GridAction, GridState};
use crate::item::{ClaimTarget, PlaceholderItem};
use crate::notify::{ChangeFeed, Subscription};
use crate::store::ItemStore;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Headless host for [`GridState`], doing what the web component does with hooks:
/// load on mount, resync on every notification, run claim effects, and
/// unsubscribe when dropped.
pub struct MountedGrid<S: ItemStore + 'static> {
    state: Rc<RefCell<GridState>>,
    store: Rc<S>,
    _subscription: Subscription,
}

impl<S: ItemStore + 'static> MountedGrid<S> {
    pub fn mount(store: Rc<S>, feed: &impl ChangeFeed, placeholders: Vec<PlaceholderItem>) -> Self {
        let state = Rc::new(RefCell::new(GridState::new(placeholders)));
        let initial = store.list();
        state.borrow_mut().apply(GridAction::Loaded(initial));

        let weak: Weak<RefCell<GridState>> = Rc::downgrade(&state);
        let resync_store = Rc::clone(&store);
        let subscription = feed.subscribe(Rc::new(move || {
            if let Some(state) = weak.upgrade() {
                let items = resync_store.list();
                state.borrow_mut().apply(GridAction::Resynced(items));
            }
        }));

        Self {
            state,
            store,
            _subscription: subscription,
        }
    }

    /// Apply `action` and run whatever effect it produces against the store.
    pub fn dispatch(&self, action: GridAction) {
        let effect = self.state.borrow_mut().apply(action);
        if let Some(effect) = effect {
            effect.run(&*self.store);
        }
    }

    pub fn resync(&self) {
        let items = self.store.list();
        self.dispatch(GridAction::Resynced(items));
    }

    /// Open the confirm dialog for the listing with `id`. False if no such listing.
    pub fn request_claim(&self, id: &str) -> bool {
        let target: Option<ClaimTarget> = self
            .state
            .borrow()
            .listings()
            .iter()
            .find(|listing| listing.id() == id)
            .map(|listing| listing.claim_target());
        match target {
            Some(target) => {
                self.dispatch(GridAction::RequestClaim(target));
                true
            }
            None => false,
        }
    }

    pub fn confirm_claim(&self) {
        self.dispatch(GridAction::ConfirmClaim);
    }

    pub fn cancel_claim(&self) {
        self.dispatch(GridAction::CancelClaim);
    }

    pub fn dismiss_success(&self) {
        self.dispatch(GridAction::DismissSuccess);
    }

    #[must_use]
    pub fn snapshot(&self) -> GridState {
        self.state.borrow().clone()
    }

    /// Names currently rendered, in display order.
    #[must_use]
    pub fn rendered_names(&self) -> Vec<String> {
        self.state
            .borrow()
            .listings()
            .iter()
            .map(|listing| listing.name().to_string())
            .collect()
    }
}
