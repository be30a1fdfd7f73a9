//! Change notification for cart consumers.
//!
//! Observers are called synchronously, right after the store swaps in a new item list,
//! with the same snapshot later readers will see and the revision that produced it.
//!
//! Delivery is serialised: one caller at a time runs the callbacks and drains a single
//! pending slot, so observers see revisions in increasing order. A snapshot older than one
//! already delivered or pending is dropped. A notify raised from inside a callback is queued
//! and delivered once the current round finishes.

use crate::modules::cart::core::cart_item::CartItem;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

type Snapshot = (u64, Arc<Vec<CartItem>>);

pub trait CartObserver: Send + Sync {
    fn on_cart_changed(&self, revision: u64, items: &Arc<Vec<CartItem>>);
}

impl<F> CartObserver for F
where
    F: Fn(u64, &Arc<Vec<CartItem>>) + Send + Sync,
{
    fn on_cart_changed(&self, revision: u64, items: &Arc<Vec<CartItem>>) {
        self(revision, items)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct ObserverRegistry {
    next_id: AtomicU64,
    delivered: AtomicU64,
    delivering: AtomicBool,
    pending: Mutex<Option<Snapshot>>,
    observers: RwLock<Vec<(SubscriptionId, Arc<dyn CartObserver>)>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: Arc<dyn CartObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, observer));
        id
    }

    /// Returns false when the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn delivered_revision(&self) -> u64 {
        self.delivered.load(Ordering::SeqCst)
    }

    pub fn notify(&self, revision: u64, items: &Arc<Vec<CartItem>>) {
        {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            let newer_than_pending = pending.as_ref().is_none_or(|(queued, _)| *queued < revision);
            if revision < self.delivered_revision() || !newer_than_pending {
                tracing::debug!(revision, "dropping stale cart notification");
                return;
            }
            *pending = Some((revision, items.clone()));
        }
        loop {
            if self
                .delivering
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
            {
                return;
            }
            while let Some((revision, items)) = self.take_pending() {
                if revision < self.delivered_revision() {
                    continue;
                }
                self.delivered.store(revision, Ordering::SeqCst);
                for observer in self.snapshot_observers() {
                    observer.on_cart_changed(revision, &items);
                }
            }
            self.delivering.store(false, Ordering::SeqCst);
            // Another thread may have queued after the drain but before the flag was released.
            if self
                .pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .is_none()
            {
                return;
            }
        }
    }

    fn take_pending(&self) -> Option<Snapshot> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    // Cloned so an observer may (un)subscribe from inside its callback.
    fn snapshot_observers(&self) -> Vec<Arc<dyn CartObserver>> {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect()
    }
}
