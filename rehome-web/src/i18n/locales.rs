use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
    },
    LocaleMeta {
        code: "es",
        name: "Español",
        rtl: false,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("es", include_str!("../../i18n/es.json")),
];

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_rtl_lang(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang && m.rtl)
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

/// Parsed translations for `lang`, falling back to English for unknown codes.
pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            Value::Object(map) if !map.contains_key("one") => {
                for (k, v) in map {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    leaf_keys(v, &key, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn every_locale_covers_the_english_keys() {
        let mut english = Vec::new();
        leaf_keys(&load_translations("en").unwrap(), "", &mut english);
        for meta in locales() {
            let mut keys = Vec::new();
            leaf_keys(&load_translations(meta.code).unwrap(), "", &mut keys);
            for key in &english {
                assert!(keys.contains(key), "{} is missing {key}", meta.code);
            }
        }
    }

    #[test]
    fn unknown_codes_are_unsupported() {
        assert!(is_supported("es"));
        assert!(!is_supported("xx"));
        assert!(!is_rtl_lang("en"));
    }
}
