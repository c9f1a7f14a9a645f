#![cfg(target_arch = "wasm32")]

use rehome_core::{
    ChangeFeed, ChangeNotifier, Condition, DonatedItem, ItemStore, KeyValueBackend,
    MarketConfig, PersistedItemStore,
};
use rehome_web::storage::{BrowserStorage, WindowChangeFeed};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn chair(id: &str) -> DonatedItem {
    DonatedItem {
        id: id.into(),
        item_name: "Chair".into(),
        description: String::new(),
        category: "Furniture".into(),
        condition: Condition::Good,
        location: "Uptown".into(),
        image_base64: String::new(),
        created_at: "2024-05-05T10:00:00Z".into(),
    }
}

#[wasm_bindgen_test]
fn local_storage_round_trips_and_notifies() {
    let config = MarketConfig::default_config();
    let feed = WindowChangeFeed::from_config(&config);
    let store = PersistedItemStore::with_config(BrowserStorage, feed.clone(), &config);
    store.clear();

    let hits = Rc::new(Cell::new(0));
    let sub = {
        let hits = Rc::clone(&hits);
        feed.subscribe(Rc::new(move || hits.set(hits.get() + 1)))
    };

    store.insert(chair("w1"));
    store.insert(chair("w2"));
    assert_eq!(store.list().len(), 2);
    assert_eq!(hits.get(), 2);

    store.remove("w1");
    assert_eq!(store.list()[0].id, "w2");
    assert_eq!(hits.get(), 3);

    drop(sub);
    feed.notify();
    assert_eq!(hits.get(), 3);
    store.clear();
}

#[wasm_bindgen_test]
fn malformed_storage_reads_as_empty() {
    let config = MarketConfig::default_config();
    BrowserStorage
        .set(&config.storage_key, "{oops")
        .expect("localStorage writable");
    let store = PersistedItemStore::with_config(
        BrowserStorage,
        WindowChangeFeed::from_config(&config),
        &config,
    );
    assert!(store.list().is_empty());
    store.clear();
}
