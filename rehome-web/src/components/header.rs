use crate::i18n::{LocaleMeta, locales, set_lang, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
}

fn language_option(meta: &LocaleMeta, current: &str) -> Html {
    html! {
        <option value={meta.code} selected={meta.code == current}>{ meta.name }</option>
    }
}

/// Brand bar with the skip link and the language picker.
#[function_component(Header)]
pub fn header(props: &Props) -> Html {
    let on_pick = {
        let on_lang_change = props.on_lang_change.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlSelectElement>().ok())
            else {
                return;
            };
            let code = select.value();
            set_lang(&code);
            on_lang_change.emit(code);
        })
    };

    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only skip-link">{ t("ui.skip_to_content") }</a>
            <div class="site-header__bar">
                <a href="#items" class="site-header__brand">
                    <span aria-hidden="true">{"♻ "}</span>
                    { t("nav.title") }
                </a>
                <div class="site-header__lang">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" aria-label={t("nav.language")} onchange={on_pick}>
                        { for locales().iter().map(|meta| language_option(meta, &props.current_lang)) }
                    </select>
                </div>
            </div>
        </header>
    }
}
