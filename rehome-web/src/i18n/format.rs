use crate::i18n::render::{t, tr};
use rehome_core::{Condition, RelativeTime};
use std::collections::BTreeMap;

/// Localized label for an item condition.
#[must_use]
pub fn fmt_condition(condition: Condition) -> String {
    t(&format!("condition.{}", condition.key()))
}

/// "about 3 hours ago" in the active locale.
#[must_use]
pub fn fmt_relative_time(time: RelativeTime) -> String {
    let count = time.span.count().to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    let distance = tr(&format!("time.{}", time.span.key()), Some(&args));

    let mut outer = BTreeMap::new();
    outer.insert("distance", distance.as_str());
    tr(if time.future { "time.in" } else { "time.ago" }, Some(&outer))
}
