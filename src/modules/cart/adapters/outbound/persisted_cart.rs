// Codec between the in-memory cart and its persisted JSON form.
//
// Purpose
// - Keep the stored shape compatible with carts saved by earlier app versions:
//   a JSON array of { id, title, image_url, price, quantity }.
//
// Responsibilities
// - Encode the full item list.
// - Decode, restoring the cart invariants: quantity at least 1, ids unique (first wins).
//   A stored `null` is an empty cart.

use crate::modules::cart::core::cart_item::CartItem;
use crate::modules::cart::errors::CartCodecError;
use std::collections::HashSet;

pub const CART_STORAGE_KEY: &str = "@GoMarketplaceCart";

pub fn encode(items: &[CartItem]) -> Result<String, CartCodecError> {
    Ok(serde_json::to_string(items)?)
}

pub fn decode(raw: &str) -> Result<Vec<CartItem>, CartCodecError> {
    let stored: Option<Vec<CartItem>> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for mut item in stored.unwrap_or_default() {
        if !seen.insert(item.id.clone()) {
            tracing::warn!(id = %item.id, "dropping duplicate persisted cart item");
            continue;
        }
        if item.quantity < 1 {
            tracing::warn!(id = %item.id, "persisted cart item had quantity 0, raising to 1");
            item.quantity = 1;
        }
        items.push(item);
    }
    Ok(items)
}
