use crate::shared::infrastructure::key_value_storage::KeyValueStorage;
use crate::shared::infrastructure::key_value_storage::file_system::FileSystemStorage;
use crate::shared::infrastructure::key_value_storage::in_memory::InMemoryStorage;
use crate::shell::config::{CartConfig, StorageBackend};
use std::sync::Arc;

pub fn build_storage(config: &CartConfig) -> Arc<dyn KeyValueStorage> {
    match &config.storage {
        StorageBackend::File(dir) => {
            tracing::info!(dir = %dir.display(), "using file system cart storage");
            Arc::new(FileSystemStorage::new(dir.clone()))
        }
        StorageBackend::Memory => {
            tracing::info!("using in-memory cart storage, the cart will not survive a restart");
            Arc::new(InMemoryStorage::new())
        }
    }
}

#[cfg(test)]
mod shell_state_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_wire_file_storage_into_the_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = CartConfig {
            storage: StorageBackend::File(dir.path().to_path_buf()),
        };
        let storage = build_storage(&config);
        storage.set("@GoMarketplaceCart", "[]").await.unwrap();
        assert!(dir.path().join("%40GoMarketplaceCart").exists());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_wire_memory_storage() {
        let storage = build_storage(&CartConfig {
            storage: StorageBackend::Memory,
        });
        storage.set("key", "value").await.unwrap();
        assert_eq!(storage.get("key").await.unwrap(), Some("value".into()));
    }
}
