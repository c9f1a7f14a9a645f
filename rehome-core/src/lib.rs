//! Rehome marketplace core
//!
//! Platform-agnostic logic for the donation marketplace: listing records, the
//! item store contract and its JSON persistence, the change-notification bus,
//! and the claim state machine that drives the item grid. No UI or browser
//! dependencies live here; the web crate supplies a `localStorage` backend and
//! a window-event change feed.

pub mod codec;
pub mod config;
pub mod error;
pub mod grid;
pub mod item;
pub mod notify;
pub mod relative_time;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use codec::{decode_items, encode_items};
pub use config::MarketConfig;
pub use error::StoreError;
pub use grid::{GridAction, GridEffect, GridState};
pub use item::{ClaimKind, ClaimTarget, Condition, DonatedItem, Listing, PlaceholderItem};
pub use notify::{ChangeBus, ChangeFeed, ChangeNotifier, Listener, Subscription};
pub use relative_time::{RelativeTime, Span};
pub use session::MountedGrid;
pub use store::{ItemStore, KeyValueBackend, MemoryBackend, PersistedItemStore};
