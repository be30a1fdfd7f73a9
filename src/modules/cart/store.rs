//! The cart store: single source of truth for the cart's contents.
//!
//! Mutations are synchronous. Each one computes the next list with [`decide`], swaps it in,
//! hands the encoded list to the [`PersistenceWriter`] and then notifies observers. Readers get
//! an `Arc` snapshot that is never edited in place.

use crate::modules::cart::adapters::outbound::persisted_cart::encode;
use crate::modules::cart::adapters::outbound::write_queue::PersistenceWriter;
use crate::modules::cart::core::cart_item::{CartItem, ProductCandidate};
use crate::modules::cart::core::commands::CartCommand;
use crate::modules::cart::core::decide::{Decision, decide};
use crate::modules::cart::observers::{CartObserver, ObserverRegistry, SubscriptionId};
use crate::shared::infrastructure::key_value_storage::KeyValueStorage;
use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied { revision: u64 },
    Unchanged,
}

pub struct CartStore {
    items: ArcSwap<Vec<CartItem>>,
    // Serialises mutations and holds the revision of the latest one.
    revision: Mutex<u64>,
    load_started: AtomicBool,
    mounted: AtomicBool,
    observers: ObserverRegistry,
    storage: Arc<dyn KeyValueStorage>,
    writer: PersistenceWriter,
}

impl CartStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, writer: PersistenceWriter) -> Self {
        Self {
            items: ArcSwap::from_pointee(Vec::new()),
            revision: Mutex::new(0),
            load_started: AtomicBool::new(false),
            mounted: AtomicBool::new(true),
            observers: ObserverRegistry::new(),
            storage,
            writer,
        }
    }

    pub fn items(&self) -> Arc<Vec<CartItem>> {
        self.items.load_full()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_to_cart(&self, candidate: ProductCandidate) -> MutationOutcome {
        self.dispatch(CartCommand::AddToCart(candidate))
    }

    pub fn increment(&self, id: &str) -> MutationOutcome {
        self.dispatch(CartCommand::Increment(id.to_string()))
    }

    pub fn decrement(&self, id: &str) -> MutationOutcome {
        self.dispatch(CartCommand::Decrement(id.to_string()))
    }

    pub fn subscribe(&self, observer: Arc<dyn CartObserver>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Waits for every write submitted so far.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    pub fn persisted_revision(&self) -> u64 {
        self.writer.attempted_revision()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub(crate) fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub(crate) fn storage(&self) -> &Arc<dyn KeyValueStorage> {
        &self.storage
    }

    /// True for the first caller only.
    pub(crate) fn begin_load(&self) -> bool {
        !self.load_started.swap(true, Ordering::SeqCst)
    }

    /// Installs a loaded list unless a mutation already happened. Does not persist.
    pub(crate) fn restore(&self, items: Vec<CartItem>) -> bool {
        let next = Arc::new(items);
        {
            let revision = self.revision.lock().unwrap_or_else(PoisonError::into_inner);
            if *revision != 0 {
                return false;
            }
            self.items.store(next.clone());
        }
        self.observers.notify(0, &next);
        true
    }

    fn dispatch(&self, command: CartCommand) -> MutationOutcome {
        let name = command.name();
        let id = command.product_id().to_string();
        let (revision, next) = {
            let mut revision = self.revision.lock().unwrap_or_else(PoisonError::into_inner);
            let current = self.items.load();
            let next = match decide(&current, command) {
                Decision::Replace(next) => Arc::new(next),
                Decision::Unchanged => {
                    tracing::debug!(command = name, id = %id, "cart unchanged");
                    return MutationOutcome::Unchanged;
                }
            };
            *revision += 1;
            self.items.store(next.clone());
            match encode(&next) {
                Ok(payload) => self.writer.submit(*revision, payload),
                Err(e) => tracing::warn!(error = %e, "could not encode cart, skipping write"),
            }
            (*revision, next)
        };
        tracing::debug!(command = name, id = %id, revision, items = next.len(), "cart updated");
        self.observers.notify(revision, &next);
        MutationOutcome::Applied { revision }
    }
}
