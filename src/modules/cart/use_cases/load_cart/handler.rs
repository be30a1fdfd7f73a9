// Restores the persisted cart into a freshly mounted store.
//
// Responsibilities
// - Run at most once per store.
// - Read the cart key, decode it and install the items if nothing has mutated the cart yet.
// - Never write. Never fail startup: unreadable or malformed data leaves the cart empty.

use crate::modules::cart::adapters::outbound::persisted_cart::{CART_STORAGE_KEY, decode};
use crate::modules::cart::errors::CartError;
use crate::modules::cart::store::CartStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Restored { count: usize },
    Empty,
    Discarded,
    Superseded,
    AlreadyLoaded,
}

#[tracing::instrument(name = "load_cart", skip(store))]
pub async fn load_cart(store: &CartStore) -> LoadOutcome {
    if !store.begin_load() {
        return LoadOutcome::AlreadyLoaded;
    }

    let raw = match store.storage().get(CART_STORAGE_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::info!("no persisted cart, starting empty");
            return LoadOutcome::Empty;
        }
        Err(e) => {
            tracing::error!(error = %CartError::PersistenceRead(e), "starting with an empty cart");
            return LoadOutcome::Discarded;
        }
    };

    let items = match decode(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(error = %CartError::from(e), "starting with an empty cart");
            return LoadOutcome::Discarded;
        }
    };

    let count = items.len();
    if store.restore(items) {
        tracing::info!(count, "restored persisted cart");
        LoadOutcome::Restored { count }
    } else {
        tracing::info!(count, "cart changed before load finished, keeping in-memory items");
        LoadOutcome::Superseded
    }
}
