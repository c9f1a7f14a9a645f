use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

/// Shown for any path the router does not know.
#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <main id="main" role="main" class="page page--not-found">
            <section class="panel not-found" aria-live="assertive">
                <h1>{ crate::i18n::t("not_found.title") }</h1>
                <p class="muted">{ crate::i18n::t("not_found.message") }</p>
                <button type="button" class="btn btn--primary" onclick={go_home}>
                    { crate::i18n::t("not_found.back") }
                </button>
            </section>
        </main>
    }
}
