//! Item grid: donated listings from the store followed by the seed
//! placeholders, with the two-step claim flow.
//!
//! The container wires [`GridModel`] to the injected [`MarketServices`]; all
//! markup lives in [`ItemGridView`] so it renders under SSR without effects.

mod state;
mod view;

#[cfg(test)]
mod tests;

pub use state::GridModel;
pub use view::{ItemGridView, ItemGridViewProps};

use crate::a11y;
use crate::i18n;
use crate::services::MarketServices;
use rehome_core::{ClaimTarget, GridAction, MarketConfig};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

fn announce_claim(name: &str) {
    let mut args = BTreeMap::new();
    args.insert("name", name);
    a11y::set_status(&i18n::tr("claim.announce", Some(&args)));
}

#[function_component(ItemGrid)]
pub fn item_grid() -> Html {
    let services = use_context::<MarketServices>();
    let placeholders = services.as_ref().map_or_else(
        || MarketConfig::default_config().placeholders,
        |services| services.config.placeholders.clone(),
    );
    let grid = use_reducer(move || GridModel::new(placeholders));

    {
        let grid = grid.clone();
        let services = services.clone();
        use_effect_with((), move |()| {
            let subscription = match services {
                Some(services) => {
                    grid.dispatch(GridAction::Loaded(services.store.list()));
                    let store = Rc::clone(&services.store);
                    let dispatcher = grid.dispatcher();
                    Some(services.feed.subscribe(Rc::new(move || {
                        dispatcher.dispatch(GridAction::Resynced(store.list()));
                    })))
                }
                None => {
                    log::warn!("item grid mounted without market services; showing seed listings only");
                    grid.dispatch(GridAction::Loaded(Vec::new()));
                    None
                }
            };
            move || drop(subscription)
        });
    }

    let on_claim = {
        let grid = grid.clone();
        Callback::from(move |target: ClaimTarget| grid.dispatch(GridAction::RequestClaim(target)))
    };

    let on_confirm = {
        let grid = grid.clone();
        let services = services.clone();
        Callback::from(move |()| {
            if !grid.0.confirm_open {
                return;
            }
            if let (Some(effect), Some(services)) = (grid.0.confirm_effect(), services.as_ref()) {
                effect.run(&services.store);
            }
            announce_claim(grid.0.target_name());
            grid.dispatch(GridAction::ConfirmClaim);
        })
    };

    let on_cancel = {
        let grid = grid.clone();
        Callback::from(move |()| grid.dispatch(GridAction::CancelClaim))
    };

    let on_dismiss = {
        let grid = grid.clone();
        Callback::from(move |()| grid.dispatch(GridAction::DismissSuccess))
    };

    html! {
        <ItemGridView
            state={grid.0.clone()}
            {on_claim}
            {on_confirm}
            {on_cancel}
            {on_dismiss}
        />
    }
}
