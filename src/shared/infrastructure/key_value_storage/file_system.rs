// File system implementation of the KeyValueStorage port.
//
// Purpose
// - Persist values on the device between application runs.
//
// Responsibilities
// - Store each key as one file inside the root directory.
// - Derive file names by percent-encoding every byte outside [A-Za-z0-9._-].
// - Replace values atomically: write a temp file, then rename it over the target.

use crate::shared::infrastructure::key_value_storage::{KeyValueStorage, StorageError};
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

const TEMP_SUFFIX: &str = ".tmp";

pub struct FileSystemStorage {
    root: PathBuf,
}

impl FileSystemStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(encode_key(key))
    }
}

pub fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-') {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}

#[async_trait::async_trait]
impl KeyValueStorage for FileSystemStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await?;
        let target = self.path_for(key);
        let mut temp = target.clone().into_os_string();
        temp.push(TEMP_SUFFIX);
        fs::write(&temp, value).await?;
        fs::rename(&temp, &target).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
