// In memory implementation of the KeyValueStorage port.
//
// Purpose
// - Support store and writer tests and local development without touching the disk.
//
// Responsibilities
// - Keep values in a map keyed by storage key.
// - Count calls so tests can assert how many writes a mutation produced.
// - Simulate an offline device and slow writes.

use crate::shared::infrastructure::key_value_storage::{KeyValueStorage, StorageError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStorage {
    values: RwLock<HashMap<String, String>>,
    is_offline: AtomicBool,
    delay_set_ms: AtomicU64,
    get_calls: AtomicUsize,
    set_calls: AtomicUsize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage
            .values
            .get_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_delay_set_ms(&self, ms: u64) {
        self.delay_set_ms.store(ms, Ordering::SeqCst);
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    pub async fn value(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }

    fn ensure_online(&self, operation: &str) -> Result<(), StorageError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StorageError::Offline(format!(
                "In memory storage offline during {operation}"
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_online("get")?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delay_set_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.ensure_online("set")?;
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.ensure_online("remove")?;
        self.values.write().await.remove(key);
        Ok(())
    }
}
