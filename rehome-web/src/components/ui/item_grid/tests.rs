use super::*;
use futures::executor::block_on;
use rehome_core::{
    ChangeBus, ChangeFeed, Condition, DonatedItem, GridState, ItemStore, MemoryBackend,
    PersistedItemStore,
};
use yew::LocalServerRenderer;

fn lamp() -> DonatedItem {
    DonatedItem {
        id: "d1".into(),
        item_name: "Lamp".into(),
        description: "Brass reading lamp".into(),
        category: "Furniture".into(),
        condition: Condition::LikeNew,
        location: "Downtown".into(),
        image_base64: "data:image/png;base64,iVBORw0KGgo=".into(),
        created_at: "2024-06-01T09:30:00Z".into(),
    }
}

fn view_props(state: GridState) -> ItemGridViewProps {
    ItemGridViewProps {
        state,
        on_claim: Callback::noop(),
        on_confirm: Callback::noop(),
        on_cancel: Callback::noop(),
        on_dismiss: Callback::noop(),
    }
}

fn loaded(items: Vec<DonatedItem>) -> GridState {
    let mut state = GridState::new(MarketConfig::default_config().placeholders);
    state.apply(GridAction::Loaded(items));
    state
}

fn render_view(state: GridState) -> String {
    i18n::set_lang("en");
    block_on(LocalServerRenderer::<ItemGridView>::with_props(view_props(state)).render())
}

#[test]
fn loading_state_shows_spinner_and_no_cards() {
    let html = render_view(GridState::new(MarketConfig::default_config().placeholders));
    assert!(html.contains("item-grid__loading"));
    assert!(!html.contains("item-listing-grid"));
    assert!(!html.contains("Vintage Desk Lamp"));
    assert!(html.contains("Available Items"));
}

#[test]
fn loaded_grid_lists_donations_before_placeholders() {
    let html = render_view(loaded(vec![lamp()]));
    assert!(html.contains("item-listing-grid"));
    let lamp_at = html.find("Brass reading lamp").expect("donated card");
    let seed_at = html.find("Vintage Desk Lamp").expect("placeholder card");
    assert!(lamp_at < seed_at);
    assert_eq!(html.matches("item-card--new").count(), 1);
    assert!(html.contains("grid-status"));
}

#[test]
fn empty_grid_shows_empty_message() {
    let mut state = loaded(Vec::new());
    state.placeholder_items.clear();
    let html = render_view(state);
    assert!(html.contains("item-grid__empty"));
    assert!(!html.contains("item-listing-grid"));
}

#[test]
fn open_confirm_dialog_names_the_target() {
    let mut state = loaded(vec![lamp()]);
    let target = state.listings()[0].claim_target();
    state.apply(GridAction::RequestClaim(target));
    let html = render_view(state);
    assert!(html.contains("claim-confirm"));
    assert!(html.contains("Claim this item?"));
    assert!(!html.contains("claim-done"));
}

#[test]
fn success_dialog_follows_confirmation() {
    let mut state = loaded(vec![lamp()]);
    let target = state.listings()[0].claim_target();
    state.apply(GridAction::RequestClaim(target));
    state.apply(GridAction::ConfirmClaim);
    let html = render_view(state);
    assert!(html.contains("claim-done"));
    assert!(!html.contains("claim-confirm"));
    assert!(!html.contains("Brass reading lamp"));
}

#[test]
fn container_renders_loading_before_effects_run() {
    i18n::set_lang("en");
    let bus = ChangeBus::new();
    let store = PersistedItemStore::new(MemoryBackend::new(), bus.clone(), "donatedItems");
    store.insert(lamp());
    let services = MarketServices::new(
        Rc::new(store) as Rc<dyn ItemStore>,
        Rc::new(bus) as Rc<dyn ChangeFeed>,
        Rc::new(MarketConfig::default_config()),
    );

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <ContextProvider<MarketServices> context={props.services.clone()}>
                <ItemGrid />
            </ContextProvider<MarketServices>>
        }
    }

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        services: MarketServices,
    }

    let html = block_on(
        LocalServerRenderer::<Harness>::with_props(HarnessProps { services }).render(),
    );
    assert!(html.contains("item-grid__loading"));
    assert!(!html.contains("Brass reading lamp"));
}
