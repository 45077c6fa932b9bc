//! Durable local key-value storage.
//!
//! Persistence is an opaque facility that may fail at any call; the
//! in-memory aggregate stays authoritative regardless. Implementations sit
//! behind `Arc<dyn KeyValueStore>` and must be safe to call from spawned
//! tasks.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::errors::EngineError;

mod file;
pub use file::FileStore;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, EngineError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), EngineError>;

    async fn remove(&self, key: &str) -> Result<(), EngineError>;

    /// Presence check without reading the value.
    async fn contains(&self, key: &str) -> Result<bool, EngineError>;
}

/// Process-local store. Hosts that persist through their own mechanism (or
/// tests) use this; desktop hosts use [`FileStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, EngineError> {
        self.entries
            .lock()
            .map_err(|_| EngineError::Storage("memory store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, EngineError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), EngineError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), EngineError> {
        self.lock()?.remove(key);
        Ok(())
    }

    async fn contains(&self, key: &str) -> Result<bool, EngineError> {
        Ok(self.lock()?.contains_key(key))
    }
}
