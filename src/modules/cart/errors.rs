use crate::shared::infrastructure::key_value_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartCodecError {
    #[error("malformed persisted cart: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("use_cart must be used within a CartProvider")]
    ContextUnavailable,

    #[error("failed to read persisted cart: {0}")]
    PersistenceRead(#[source] StorageError),

    #[error("failed to write persisted cart: {0}")]
    PersistenceWrite(#[source] StorageError),

    #[error(transparent)]
    Codec(#[from] CartCodecError),
}
