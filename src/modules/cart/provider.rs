//! Scoped access to the cart.
//!
//! A [`CartProvider`] owns the store for as long as it is mounted. Code that needs the cart
//! is handed a [`CartContext`] and calls [`CartContext::use_cart`], which fails with
//! [`CartError::ContextUnavailable`] outside a mounted provider.

use crate::modules::cart::adapters::outbound::persisted_cart::CART_STORAGE_KEY;
use crate::modules::cart::adapters::outbound::write_queue::PersistenceWriter;
use crate::modules::cart::errors::CartError;
use crate::modules::cart::store::CartStore;
use crate::modules::cart::use_cases::load_cart::handler::{LoadOutcome, load_cart};
use crate::shared::infrastructure::key_value_storage::KeyValueStorage;
use std::sync::{Arc, Weak};
use tokio::task::JoinHandle;

pub struct CartProvider {
    store: Arc<CartStore>,
}

impl CartProvider {
    /// Mounts the store and starts the initial load in the background.
    ///
    /// Consumers may see an empty cart until the load completes.
    pub fn mount(storage: Arc<dyn KeyValueStorage>) -> (Self, JoinHandle<LoadOutcome>) {
        let provider = Self::mount_unloaded(storage);
        let store = provider.store.clone();
        let load = tokio::spawn(async move { load_cart(&store).await });
        (provider, load)
    }

    /// Mounts the store and waits for the initial load.
    pub async fn mount_and_load(storage: Arc<dyn KeyValueStorage>) -> (Self, LoadOutcome) {
        let provider = Self::mount_unloaded(storage);
        let outcome = load_cart(&provider.store).await;
        (provider, outcome)
    }

    fn mount_unloaded(storage: Arc<dyn KeyValueStorage>) -> Self {
        let writer = PersistenceWriter::spawn(storage.clone(), CART_STORAGE_KEY);
        tracing::info!("cart provider mounted");
        Self {
            store: Arc::new(CartStore::new(storage, writer)),
        }
    }

    pub fn context(&self) -> CartContext {
        CartContext {
            store: Arc::downgrade(&self.store),
        }
    }

    /// Ends the scope: pending writes are flushed and every context stops resolving.
    pub async fn unmount(self) {
        self.store.unmount();
        self.store.flush().await;
        tracing::info!(
            revision = self.store.persisted_revision(),
            "cart provider unmounted"
        );
    }
}

impl Drop for CartProvider {
    // Closes the scope even when `unmount` was never awaited. Pending writes are not flushed.
    fn drop(&mut self) {
        self.store.unmount();
    }
}

#[derive(Clone, Default)]
pub struct CartContext {
    store: Weak<CartStore>,
}

impl CartContext {
    /// A context with no provider above it.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn use_cart(&self) -> Result<Arc<CartStore>, CartError> {
        self.store
            .upgrade()
            .filter(|store| store.is_mounted())
            .ok_or(CartError::ContextUnavailable)
    }
}
