// Single-slot persistence writer for the cart.
//
// Purpose
// - Move storage writes off the mutation path while keeping the stored value in step with memory.
//
// Responsibilities
// - Hold only the newest submitted snapshot. Older snapshots not yet written are superseded.
// - Write snapshots from one background task, in revision order, so the last mutation always wins.
// - Log failed writes and carry on. In-memory state stays authoritative for the session.
//
// Lifecycle
// - The task ends once the writer is dropped and the last submitted snapshot has been attempted.

use crate::modules::cart::errors::CartError;
use crate::shared::infrastructure::key_value_storage::KeyValueStorage;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::Instrument;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingWrite {
    pub revision: u64,
    pub payload: String,
}

pub struct PersistenceWriter {
    pending: watch::Sender<PendingWrite>,
    attempted: watch::Receiver<u64>,
}

impl PersistenceWriter {
    pub fn spawn(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let (pending, pending_rx) = watch::channel(PendingWrite::default());
        let (attempted_tx, attempted) = watch::channel(0);
        let span = tracing::info_span!("cart_persistence_writer", key = %key);
        tokio::spawn(run(storage, key, pending_rx, attempted_tx).instrument(span));
        Self { pending, attempted }
    }

    /// Replaces whatever snapshot is waiting with this one.
    pub fn submit(&self, revision: u64, payload: String) {
        self.pending.send_replace(PendingWrite { revision, payload });
    }

    pub fn submitted_revision(&self) -> u64 {
        self.pending.borrow().revision
    }

    pub fn attempted_revision(&self) -> u64 {
        *self.attempted.borrow()
    }

    /// Waits until every snapshot submitted so far has been written or has failed.
    pub async fn flush(&self) {
        let target = self.submitted_revision();
        let mut attempted = self.attempted.clone();
        if attempted.wait_for(|revision| *revision >= target).await.is_err() {
            tracing::warn!(revision = target, "persistence writer stopped before flush completed");
        }
    }
}

async fn run(
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    mut pending: watch::Receiver<PendingWrite>,
    attempted: watch::Sender<u64>,
) {
    while pending.changed().await.is_ok() {
        let write = pending.borrow_and_update().clone();
        if write.revision <= *attempted.borrow() {
            continue;
        }
        match storage.set(&key, &write.payload).await {
            Ok(()) => tracing::debug!(revision = write.revision, "persisted cart"),
            Err(e) => tracing::warn!(
                revision = write.revision,
                error = %CartError::PersistenceWrite(e),
                "cart write failed, keeping in-memory state"
            ),
        }
        attempted.send_replace(write.revision);
    }
    tracing::debug!("persistence writer stopped");
}
