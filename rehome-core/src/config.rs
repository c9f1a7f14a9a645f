//! Marketplace configuration: storage key, change event and placeholder seed
use crate::item::{Condition, PlaceholderItem};
use serde::{Deserialize, Serialize};

const DEFAULT_MARKET_DATA: &str =
    include_str!("../../rehome-web/static/assets/data/market.json");

pub const DEFAULT_STORAGE_KEY: &str = "donatedItems";
pub const DEFAULT_CHANGE_EVENT: &str = "donationAdded";

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_change_event() -> String {
    DEFAULT_CHANGE_EVENT.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Local storage key holding the donated item array.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Name of the same-tab custom event fired after a store mutation.
    #[serde(default = "default_change_event")]
    pub change_event: String,
    #[serde(default = "builtin_placeholders")]
    pub placeholders: Vec<PlaceholderItem>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            change_event: default_change_event(),
            placeholders: builtin_placeholders(),
        }
    }
}

impl MarketConfig {
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_MARKET_DATA).unwrap_or_else(|err| {
            log::warn!("bundled market config unreadable, using built-in defaults: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }

    /// Parse a config document.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid config document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn builtin_placeholders() -> Vec<PlaceholderItem> {
    [
        ("Vintage Desk Lamp", "Furniture", Condition::Good, "Downtown"),
        ("Children's Books Set", "Books", Condition::LikeNew, "East Side"),
        ("Kitchen Mixer", "Kitchen", Condition::Fair, "Suburb Area"),
        ("Yoga Mat", "Sports", Condition::Good, "North District"),
        ("Winter Jacket (M)", "Clothing", Condition::LikeNew, "Central"),
        ("Board Games Bundle", "Toys", Condition::Good, "West End"),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (name, category, condition, location))| {
        PlaceholderItem::new(format!("placeholder-{idx}"), name, category, condition, location)
    })
    .collect()
}
