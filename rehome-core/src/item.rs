//! Listing records: persisted donations, static placeholders and claim targets
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical condition reported by the donor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "New")]
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Fair")]
    Fair,
}

impl Condition {
    /// Display label, identical to the persisted form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::LikeNew => "Like New",
            Self::Good => "Good",
            Self::Fair => "Fair",
        }
    }

    /// Stable key used for translation lookups.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::LikeNew => "like_new",
            Self::Good => "good",
            Self::Fair => "fair",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single user-submitted donation as stored in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonatedItem {
    pub id: String,
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub condition: Condition,
    #[serde(default)]
    pub location: String,
    /// Image embedded as a data URL.
    #[serde(default)]
    pub image_base64: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Static seed listing shown next to real donations. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub condition: Condition,
    pub location: String,
}

impl PlaceholderItem {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        condition: Condition,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            condition,
            location: location.into(),
        }
    }
}

/// Which list a claim target lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimKind {
    Donated,
    Placeholder,
}

/// Item currently going through the confirm/success flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimTarget {
    pub kind: ClaimKind,
    pub id: String,
    pub name: String,
}

impl From<&DonatedItem> for ClaimTarget {
    fn from(item: &DonatedItem) -> Self {
        Self {
            kind: ClaimKind::Donated,
            id: item.id.clone(),
            name: item.item_name.clone(),
        }
    }
}

impl From<&PlaceholderItem> for ClaimTarget {
    fn from(item: &PlaceholderItem) -> Self {
        Self {
            kind: ClaimKind::Placeholder,
            id: item.id.clone(),
            name: item.name.clone(),
        }
    }
}

/// One rendered grid entry, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a> {
    Donated { item: &'a DonatedItem, is_new: bool },
    Placeholder(&'a PlaceholderItem),
}

impl Listing<'_> {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Donated { item, .. } => &item.id,
            Self::Placeholder(item) => &item.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Donated { item, .. } => &item.item_name,
            Self::Placeholder(item) => &item.name,
        }
    }

    #[must_use]
    pub fn claim_target(&self) -> ClaimTarget {
        match self {
            Self::Donated { item, .. } => ClaimTarget::from(*item),
            Self::Placeholder(item) => ClaimTarget::from(*item),
        }
    }
}
