use crate::components::{footer::Footer, header::Header};
use crate::pages::{home::HomePage, not_found::NotFound};
use crate::router::Route;
use crate::services::MarketServices;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

/// Page content for `route`.
pub fn render_route(route: &Route, on_go_home: &Callback<()>) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::NotFound => html! { <NotFound on_go_home={on_go_home.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub services: MarketServices,
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
    #[prop_or_default]
    pub children: Children,
}

/// Header, footer and the services context around the routed page.
#[function_component(AppShell)]
pub fn app_shell(props: &ShellProps) -> Html {
    html! {
        <ContextProvider<MarketServices> context={props.services.clone()}>
            <Header current_lang={props.current_lang.clone()} on_lang_change={props.on_lang_change.clone()} />
            // Keyed on the language so translated text re-renders after a switch.
            <div class="app-body" key={props.current_lang.clone()}>
                { for props.children.iter() }
            </div>
            <Footer />
        </ContextProvider<MarketServices>>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
fn app_inner() -> Html {
    let services = use_memo((), |()| {
        MarketServices::browser(rehome_core::MarketConfig::default_config())
    });
    let current_lang = use_state(crate::i18n::current_lang);
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    let on_lang_change = {
        let current_lang = current_lang.clone();
        Callback::from(move |code: String| current_lang.set(code))
    };
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    });

    html! {
        <AppShell
            services={(*services).clone()}
            current_lang={(*current_lang).clone()}
            {on_lang_change}
        >
            { render_route(&route, &on_go_home) }
        </AppShell>
    }
}
