//! JSON form of the persisted item sequence
use crate::error::StoreError;
use crate::item::DonatedItem;

/// Serialize items in their stored order.
///
/// # Errors
///
/// Returns [`StoreError::Corrupt`] if serialization fails.
pub fn encode_items(items: &[DonatedItem]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(items)?)
}

/// Parse the stored text. A missing key decodes to an empty sequence.
///
/// # Errors
///
/// Returns [`StoreError::Corrupt`] when the text is not a JSON array of items.
pub fn decode_items(raw: Option<&str>) -> Result<Vec<DonatedItem>, StoreError> {
    match raw {
        None => Ok(Vec::new()),
        Some(text) if text.trim().is_empty() => Ok(Vec::new()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}
