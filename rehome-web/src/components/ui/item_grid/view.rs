use crate::components::ui::claim_dialogs::{ClaimConfirmDialog, ClaimSuccessDialog};
use crate::components::ui::item_card::{ItemCard, PlaceholderCard};
use crate::i18n::t;
use rehome_core::{ClaimTarget, GridState, Listing};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ItemGridViewProps {
    pub state: GridState,
    pub on_claim: Callback<ClaimTarget>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    pub on_dismiss: Callback<()>,
}

fn render_listing(listing: &Listing<'_>, on_claim: &Callback<ClaimTarget>) -> Html {
    let claim = {
        let target = listing.claim_target();
        let cb = on_claim.clone();
        Callback::from(move |()| cb.emit(target.clone()))
    };
    match listing {
        Listing::Donated { item, is_new } => html! {
            <ItemCard key={item.id.clone()} item={Rc::new((*item).clone())} is_new={*is_new} on_claim={claim} />
        },
        Listing::Placeholder(item) => html! {
            <PlaceholderCard key={item.id.clone()} item={Rc::new((*item).clone())} on_claim={claim} />
        },
    }
}

/// Pure rendering of a [`GridState`]: heading, loading indicator or cards, and
/// the claim dialogs.
#[function_component(ItemGridView)]
pub fn item_grid_view(props: &ItemGridViewProps) -> Html {
    let state = &props.state;
    let listings = state.listings();
    let target_name = AttrValue::from(state.target_name().to_string());

    let body = if state.loading {
        html! {
            <div class="item-grid__loading" role="status" aria-live="polite">
                <span class="spinner" aria-hidden="true"></span>
                <span class="sr-only">{ t("ui.loading") }</span>
            </div>
        }
    } else if listings.is_empty() {
        html! { <p class="item-grid__empty muted">{ t("grid.empty") }</p> }
    } else {
        html! {
            <div id="item-listing-grid" class="item-grid__cards">
                { for listings.iter().map(|listing| render_listing(listing, &props.on_claim)) }
            </div>
        }
    };

    html! {
        <section id="items" class="item-grid" aria-labelledby="items-title">
            <header class="item-grid__intro">
                <span class="badge badge--accent">{ t("grid.badge") }</span>
                <h2 id="items-title">{ t("grid.title") }</h2>
                <p class="muted">{ t("grid.lead") }</p>
            </header>
            { body }
            <p id="grid-status" class="sr-only" aria-live="polite"></p>
            <ClaimConfirmDialog
                open={state.confirm_open}
                item_name={target_name.clone()}
                on_confirm={props.on_confirm.clone()}
                on_cancel={props.on_cancel.clone()}
            />
            <ClaimSuccessDialog
                open={state.success_open}
                item_name={target_name}
                on_dismiss={props.on_dismiss.clone()}
            />
        </section>
    }
}
