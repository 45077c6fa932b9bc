//! Directory-backed store — one file per key, written with `tokio::fs`.
//!
//! The desktop host's durable facility. Keys are dot-separated identifiers;
//! anything outside `[A-Za-z0-9._-]` is mapped to `_` so a key can never
//! escape the store directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use super::KeyValueStore;
use crate::errors::EngineError;

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the store directory.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await.map_err(io_err)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(safe)
    }
}

fn io_err(err: std::io::Error) -> EngineError {
    EngineError::Storage(err.to_string())
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, EngineError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_err(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), EngineError> {
        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(io_err)
    }

    async fn remove(&self, key: &str) -> Result<(), EngineError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_err(err)),
        }
    }

    async fn contains(&self, key: &str) -> Result<bool, EngineError> {
        tokio::fs::try_exists(self.path_for(key))
            .await
            .map_err(io_err)
    }
}
