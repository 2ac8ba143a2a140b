// Persistent key-value store for wizard state.
// Every slot lives under its own versioned key; a schema change bumps the
// version and the old key is abandoned, never migrated in place.

pub mod backend;
pub mod file_backend;
pub mod redis_backend;
pub mod slots;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

pub use backend::{open_backend, StorageBackend};
#[cfg(test)]
pub use backend::MemoryBackend;

const KEY_PREFIX: &str = "catalyst";

/// A named, versioned, typed unit of durable state with its own default.
pub struct Slot<T> {
    name: &'static str,
    version: u32,
    default: fn() -> T,
}

impl<T> Slot<T> {
    pub const fn new(name: &'static str, version: u32, default: fn() -> T) -> Self {
        Self {
            name,
            version,
            default,
        }
    }

    pub fn key(&self) -> String {
        format!("{KEY_PREFIX}:{}:v{}", self.name, self.version)
    }

    pub fn default_value(&self) -> T {
        (self.default)()
    }
}

/// Write-through cache over a `StorageBackend`.
///
/// Never fails outward: reads fall back to the caller's default and write
/// failures are logged. Updates apply to the last-known in-memory value,
/// not a fresh backend read.
pub struct PersistentStore {
    backend: Arc<dyn StorageBackend>,
    cache: HashMap<String, Value>,
}

impl PersistentStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            cache: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    #[cfg(test)]
    pub fn backend(&self) -> Arc<dyn StorageBackend> {
        Arc::clone(&self.backend)
    }

    pub fn read<T: DeserializeOwned>(&mut self, key: &str, default: T) -> T {
        let value = match self.cache.get(key) {
            Some(cached) => cached.clone(),
            None => match self.load(key) {
                Some(loaded) => {
                    self.cache.insert(key.to_string(), loaded.clone());
                    loaded
                }
                None => return default,
            },
        };

        match serde_json::from_value(value) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!("Slot {key} holds an incompatible value ({e}); using default");
                default
            }
        }
    }

    pub fn write<T: Serialize>(&mut self, key: &str, value: &T) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize slot {key}: {e}");
                return;
            }
        };
        let raw = json.to_string();
        self.cache.insert(key.to_string(), json);

        if let Err(e) = self.backend.set(key, &raw) {
            warn!("Failed to persist slot {key}: {e}; keeping in-memory value for this session");
        }
    }

    pub fn update<T, F>(&mut self, key: &str, default: T, f: F)
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(T) -> T,
    {
        let current = self.read(key, default);
        let next = f(current);
        self.write(key, &next);
    }

    pub fn get<T: DeserializeOwned>(&mut self, slot: &Slot<T>) -> T {
        self.read(&slot.key(), slot.default_value())
    }

    pub fn set<T: Serialize>(&mut self, slot: &Slot<T>, value: &T) {
        self.write(&slot.key(), value);
    }

    pub fn modify<T, F>(&mut self, slot: &Slot<T>, f: F)
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(T) -> T,
    {
        self.update(&slot.key(), slot.default_value(), f);
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Drops the in-memory cache; the next read of each slot goes to the backend.
    pub fn reload(&mut self) {
        debug!("Dropping {} cached slots", self.cache.len());
        self.cache.clear();
    }

    fn load(&self, key: &str) -> Option<Value> {
        match self.backend.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Slot {key} is not valid JSON ({e}); using default");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read slot {key}: {e}; using default");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::StorageError;
    use serde::ser::Error as _;
    use serde::Serializer;

    struct FailingBackend;

    impl StorageBackend for FailingBackend {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Poisoned)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot serialize"))
        }
    }

    const COUNTER: Slot<u32> = Slot::new("counter", 1, || 0);

    #[test]
    fn test_read_missing_returns_default() {
        let mut store = PersistentStore::in_memory();
        assert_eq!(store.read("absent", 7u32), 7);
        assert_eq!(store.get(&COUNTER), 0);
    }

    #[test]
    fn test_slot_key_is_versioned() {
        assert_eq!(COUNTER.key(), "catalyst:counter:v1");
    }

    #[test]
    fn test_write_is_visible_immediately_and_after_reload() {
        let mut store = PersistentStore::in_memory();
        store.set(&COUNTER, &3);
        assert_eq!(store.get(&COUNTER), 3);

        store.reload();
        assert_eq!(store.get(&COUNTER), 3);
    }

    #[test]
    fn test_update_applies_to_last_known_value() {
        let mut store = PersistentStore::in_memory();
        store.modify(&COUNTER, |n| n + 1);
        store.modify(&COUNTER, |n| n + 1);
        assert_eq!(store.get(&COUNTER), 2);
    }

    #[test]
    fn test_update_ignores_backend_changes_behind_the_cache() {
        let mut store = PersistentStore::in_memory();
        store.set(&COUNTER, &5);
        // Another writer touches the backend directly; the cache is not reconciled.
        store.backend().set(&COUNTER.key(), "100").unwrap();
        store.modify(&COUNTER, |n| n + 1);
        assert_eq!(store.get(&COUNTER), 6);
    }

    #[test]
    fn test_backend_write_failure_keeps_session_value() {
        let mut store = PersistentStore::new(Arc::new(FailingBackend));
        store.set(&COUNTER, &9);
        assert_eq!(store.get(&COUNTER), 9, "in-memory value is the session source of truth");

        store.reload();
        assert_eq!(store.get(&COUNTER), 0, "write never landed, default comes back");
    }

    #[test]
    fn test_serialization_failure_leaves_prior_value() {
        let mut store = PersistentStore::in_memory();
        store.write("thing", &"before");
        store.write("thing", &Unserializable);
        assert_eq!(store.read("thing", String::new()), "before");
    }

    #[test]
    fn test_corrupt_backend_value_reads_as_default() {
        let mut store = PersistentStore::in_memory();
        store.backend().set(&COUNTER.key(), "{not json").unwrap();
        assert_eq!(store.get(&COUNTER), 0);
    }

    #[test]
    fn test_type_mismatch_reads_as_default() {
        let mut store = PersistentStore::in_memory();
        store.write(&COUNTER.key(), &"not a number");
        assert_eq!(store.get(&COUNTER), 0);
    }
}
