//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `CART_STORAGE_BACKEND` - `file` or `memory` (default: `file`)
//! - `CART_STORAGE_DIR` - directory holding the persisted cart (default: `.cart-storage`)
//! - `RUST_LOG` - log filter (default: `info`)

use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_STORAGE_DIR: &str = ".cart-storage";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    pub storage: StorageBackend,
}

impl CartConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = lookup("CART_STORAGE_BACKEND").unwrap_or_else(|| "file".to_string());
        let storage = match backend.trim().to_ascii_lowercase().as_str() {
            "file" => {
                let dir = lookup("CART_STORAGE_DIR")
                    .filter(|dir| !dir.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_string());
                StorageBackend::File(PathBuf::from(dir))
            }
            "memory" => StorageBackend::Memory,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "CART_STORAGE_BACKEND".to_string(),
                    format!("expected `file` or `memory`, got `{other}`"),
                ));
            }
        };
        Ok(Self { storage })
    }
}

#[cfg(test)]
mod cart_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[rstest]
    fn it_should_default_to_file_storage_in_the_default_dir() {
        let config = CartConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(
            config.storage,
            StorageBackend::File(PathBuf::from(DEFAULT_STORAGE_DIR))
        );
    }

    #[rstest]
    fn it_should_use_the_configured_dir() {
        let config = CartConfig::from_lookup(lookup(&[
            ("CART_STORAGE_BACKEND", "file"),
            ("CART_STORAGE_DIR", "/data/cart"),
        ]))
        .unwrap();
        assert_eq!(config.storage, StorageBackend::File("/data/cart".into()));
    }

    #[rstest]
    #[case("memory")]
    #[case(" Memory ")]
    fn it_should_select_memory_storage(#[case] value: &str) {
        let config = CartConfig::from_lookup(lookup(&[("CART_STORAGE_BACKEND", value)])).unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[rstest]
    fn it_should_reject_an_unknown_backend() {
        let result = CartConfig::from_lookup(lookup(&[("CART_STORAGE_BACKEND", "sqlite")]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidEnvVar(
                "CART_STORAGE_BACKEND".into(),
                "expected `file` or `memory`, got `sqlite`".into()
            ))
        );
    }
}
