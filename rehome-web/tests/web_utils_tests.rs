use rehome_core::relative_time::{RelativeTime, Span};
use rehome_core::{Condition, MarketConfig};
use rehome_web::i18n;
use rehome_web::paths;
use rehome_web::storage::{WindowChangeFeed, storage_event_matches};
use std::collections::BTreeMap;

#[test]
fn i18n_bundle_switches_and_interpolates() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert!(!i18n::is_rtl());

    let mut vars = BTreeMap::new();
    vars.insert("name", "Lamp");
    assert_eq!(i18n::tr("claim.announce", Some(&vars)), "Lamp claimed");
    assert_eq!(i18n::t("missing.key"), "missing.key");

    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "en");
}

#[test]
fn locales_metadata_lists_supported_languages() {
    let metas = i18n::locales();
    assert!(metas.iter().any(|m| m.code == "en"));
    assert!(metas.iter().any(|m| m.code == "es"));
    assert!(metas.iter().all(|m| !m.rtl));
}

#[test]
fn conditions_and_times_localize() {
    i18n::set_lang("en");
    assert_eq!(i18n::fmt_condition(Condition::LikeNew), "Like New");
    let hours = RelativeTime {
        span: Span::AboutHours(3),
        future: false,
    };
    assert_eq!(i18n::fmt_relative_time(hours), "about 3 hours ago");
    assert_eq!(i18n::fmt_relative_time(hours), hours.to_string());

    i18n::set_lang("es");
    assert_eq!(i18n::fmt_condition(Condition::LikeNew), "Como nuevo");
    assert_eq!(i18n::fmt_relative_time(hours), "hace alrededor de 3 horas");
    i18n::set_lang("en");
}

#[test]
fn placeholder_image_is_root_anchored() {
    assert!(paths::placeholder_image().ends_with("static/img/placeholder.svg"));
    assert!(paths::asset_path("/a.png").ends_with("/a.png"));
}

#[test]
fn change_feed_follows_config() {
    let config = MarketConfig::default_config();
    let feed = WindowChangeFeed::from_config(&config);
    assert_eq!(feed, WindowChangeFeed::new("donatedItems", "donationAdded"));
    assert!(storage_event_matches(Some("donatedItems"), &config.storage_key));
    assert!(storage_event_matches(None, &config.storage_key));
    assert!(!storage_event_matches(Some("rehome.locale"), &config.storage_key));
}
