use rehome_core::{GridAction, GridState, PlaceholderItem};
use std::rc::Rc;
use yew::prelude::*;

/// [`GridState`] behind a Yew reducer.
///
/// Reducing never runs store effects; the confirm handler runs them against
/// the injected store before dispatching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridModel(pub GridState);

impl GridModel {
    #[must_use]
    pub fn new(placeholders: Vec<PlaceholderItem>) -> Self {
        Self(GridState::new(placeholders))
    }
}

impl Reducible for GridModel {
    type Action = GridAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        // The confirm handler has already run the effect against the store.
        let _ = next.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}
