// Key-value storage port for on-device persistence.
//
// Purpose
// - Describe the only capability the cart needs from the device: string values stored under string keys.
//
// Boundaries
// - Values are opaque strings. Encoding is the caller's concern.
// - Adapters live next to this port (in memory, file system).

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage offline: {0}")]
    Offline(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub mod file_system;
pub mod in_memory;
