use crate::i18n::{self, fmt_condition, fmt_relative_time};
use crate::paths::placeholder_image;
use rehome_core::{DonatedItem, PlaceholderItem, relative_time};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct ItemCardProps {
    pub item: Rc<DonatedItem>,
    #[prop_or_default]
    pub is_new: bool,
    pub on_claim: Callback<()>,
}

impl PartialEq for ItemCardProps {
    fn eq(&self, other: &Self) -> bool {
        (Rc::ptr_eq(&self.item, &other.item) || self.item == other.item)
            && self.is_new == other.is_new
            && self.on_claim == other.on_claim
    }
}

fn claim_label(name: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert("name", name);
    i18n::tr("card.claim_label", Some(&args))
}

fn claim_button(name: &str, on_claim: &Callback<()>) -> Html {
    let onclick = {
        let cb = on_claim.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <button type="button" class="item-card__claim" aria-label={claim_label(name)} {onclick}>
            <span aria-hidden="true">{"✋ "}</span>
            { i18n::t("card.claim") }
        </button>
    }
}

fn meta_row(class: &'static str, label_key: &str, value: String) -> Html {
    html! {
        <li class={classes!("item-card__meta", class)}>
            <span class="sr-only">{ i18n::t(label_key) }</span>
            <span>{ value }</span>
        </li>
    }
}

/// Card for a persisted donation.
#[function_component(ItemCard)]
pub fn item_card(props: &ItemCardProps) -> Html {
    let item = &props.item;
    let posted = relative_time::since(&item.created_at).map(fmt_relative_time);
    let class = classes!("item-card", props.is_new.then_some("item-card--new"));

    html! {
        <article class={class} data-item-id={item.id.clone()}>
            <div class="item-card__media">
                <img src={item.image_base64.clone()} alt={item.item_name.clone()} loading="lazy" />
                if props.is_new {
                    <span class="badge badge--new item-card__new">{ i18n::t("card.new") }</span>
                }
                <span class="badge item-card__condition">{ fmt_condition(item.condition) }</span>
            </div>
            <div class="item-card__body">
                <h3 class="item-card__title">{ item.item_name.clone() }</h3>
                <p class="item-card__desc muted">{ item.description.clone() }</p>
                <ul class="item-card__details">
                    { meta_row("item-card__meta--category", "card.category", item.category.clone()) }
                    { meta_row("item-card__meta--location", "card.location", item.location.clone()) }
                    { posted.map(|text| meta_row("item-card__meta--posted", "card.posted", text)).unwrap_or_default() }
                </ul>
                { claim_button(&item.item_name, &props.on_claim) }
            </div>
        </article>
    }
}

#[derive(Properties, Clone)]
pub struct PlaceholderCardProps {
    pub item: Rc<PlaceholderItem>,
    pub on_claim: Callback<()>,
}

impl PartialEq for PlaceholderCardProps {
    fn eq(&self, other: &Self) -> bool {
        (Rc::ptr_eq(&self.item, &other.item) || self.item == other.item)
            && self.on_claim == other.on_claim
    }
}

/// Card for a static seed listing.
#[function_component(PlaceholderCard)]
pub fn placeholder_card(props: &PlaceholderCardProps) -> Html {
    let item = &props.item;
    html! {
        <article class="item-card item-card--placeholder" data-item-id={item.id.clone()}>
            <div class="item-card__media">
                <img src={placeholder_image()} alt={item.name.clone()} />
                <span class="badge item-card__condition">{ fmt_condition(item.condition) }</span>
            </div>
            <div class="item-card__body">
                <h3 class="item-card__title">{ item.name.clone() }</h3>
                <p class="item-card__desc muted">{ i18n::t("card.placeholder_desc") }</p>
                <ul class="item-card__details">
                    { meta_row("item-card__meta--category", "card.category", item.category.clone()) }
                    { meta_row("item-card__meta--location", "card.location", item.location.clone()) }
                </ul>
                { claim_button(&item.name, &props.on_claim) }
            </div>
        </article>
    }
}
