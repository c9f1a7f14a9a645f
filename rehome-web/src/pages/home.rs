use crate::components::ui::item_grid::ItemGrid;
use yew::prelude::*;

/// Landing page: the browsable grid of listings.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <main id="main" role="main" class="page page--home">
            <ItemGrid />
        </main>
    }
}
