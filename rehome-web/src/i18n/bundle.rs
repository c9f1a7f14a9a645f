use crate::i18n::locales::{is_rtl_lang, is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

const LOCALE_STORAGE_KEY: &str = "rehome.locale";

pub struct I18nBundle {
    pub lang: String,
    pub rtl: bool,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    Some(I18nBundle {
        lang: lang.to_string(),
        rtl: is_rtl_lang(lang),
        translations: load_translations(lang)?,
        fallback: load_translations("en")?,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: "en".to_string(),
        rtl: false,
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| "en".to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        "en".to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial)
            .or_else(|| build_bundle("en"))
            .unwrap_or_else(empty_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active language.
///
/// Unknown codes are ignored. In the browser this also updates the `<html>`
/// `lang`/`dir` attributes and remembers the choice in `localStorage`.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("ignoring unsupported locale '{lang}'");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
            with_bundle(|read| {
                let _ = el.set_attribute("lang", &read.lang);
                let _ = el.set_attribute("dir", if read.rtl { "rtl" } else { "ltr" });
            });
        }
        if let Ok(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(LOCALE_STORAGE_KEY, lang);
        }
    }
}

/// Two-letter code of the active locale.
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

/// Whether the active locale is written right-to-left.
#[must_use]
pub fn is_rtl() -> bool {
    with_bundle(|bundle| bundle.rtl)
}
