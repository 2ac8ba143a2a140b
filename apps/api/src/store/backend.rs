use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Config, StorageKind};
use crate::store::file_backend::FileBackend;
use crate::store::redis_backend::RedisBackend;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create state directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("storage backend lock poisoned")]
    Poisoned,
}

/// Durable storage collaborator. Values are already-serialized strings;
/// typing and defaults are layered on top by `PersistentStore`.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Short name used in startup logs.
    fn name(&self) -> &'static str;
}

/// Process-local backend. Used when durable storage is unavailable and in tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Opens the configured backend. Any failure degrades to `MemoryBackend`
/// so the wizard keeps working with ephemeral state.
pub fn open_backend(config: &Config) -> Arc<dyn StorageBackend> {
    let opened: Result<Arc<dyn StorageBackend>, StorageError> = match config.storage_backend {
        StorageKind::Memory => Ok(Arc::new(MemoryBackend::new())),
        StorageKind::File => {
            FileBackend::open(PathBuf::from(&config.state_dir)).map(|b| Arc::new(b) as _)
        }
        StorageKind::Redis => match config.redis_url.as_deref() {
            Some(url) => RedisBackend::open(url).map(|b| Arc::new(b) as _),
            None => {
                warn!("STORAGE_BACKEND=redis but REDIS_URL is not set");
                Ok(Arc::new(MemoryBackend::new()) as _)
            }
        },
    };

    match opened {
        Ok(backend) => {
            info!("Storage backend initialized: {}", backend.name());
            backend
        }
        Err(e) => {
            warn!("Storage backend unavailable ({e}); falling back to in-memory state");
            Arc::new(MemoryBackend::new())
        }
    }
}
