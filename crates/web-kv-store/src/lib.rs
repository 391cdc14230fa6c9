//! Web KV Store
//!
//! Typed, failure-tolerant access to the browser's key-value storage.
//! Values are stored as JSON text. Reads never fail from the caller's
//! point of view: a missing key, disabled storage or hand-edited garbage
//! all yield the caller's fallback. Writes are best-effort.

mod backend;
mod error;

pub use backend::{FailingBackend, KeyValueBackend, LocalStorageBackend, MemoryBackend};
pub use error::{StorageError, StorageResult};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Outcome of a typed read
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    /// A well-formed value was stored under the key
    Stored(T),
    /// Nothing (or an empty string) is stored under the key
    Missing,
    /// The backend failed or the stored text did not decode
    Failed(StorageError),
}

impl<T> Loaded<T> {
    /// The stored value, or `fallback` for anything else
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Loaded::Stored(value) => value,
            Loaded::Missing | Loaded::Failed(_) => fallback,
        }
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, Loaded::Stored(_))
    }
}

/// Typed JSON facade over a [`KeyValueBackend`]
#[derive(Debug, Clone, Copy, Default)]
pub struct KvStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> KvStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read and decode `key`, reporting what happened
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Loaded<T> {
        match self.backend.read(key) {
            Ok(Some(raw)) if !raw.is_empty() => match serde_json::from_str(&raw) {
                Ok(value) => Loaded::Stored(value),
                Err(e) => Loaded::Failed(StorageError::Decode(e.to_string())),
            },
            Ok(_) => Loaded::Missing,
            Err(e) => Loaded::Failed(e),
        }
    }

    /// Read `key`, returning `fallback` unchanged if it is absent or unreadable
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.load(key) {
            Loaded::Failed(err) => {
                log::warn!("[KV] Falling back for '{}': {}", key, err);
                fallback
            }
            loaded => loaded.unwrap_or(fallback),
        }
    }

    /// Encode and store `value` under `key`
    pub fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.backend.write(key, &raw)
    }

    /// Best-effort [`try_set`](Self::try_set); failures are logged and dropped
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_set(key, value) {
            log::warn!("[KV] Dropped write to '{}': {}", key, err);
        }
    }

    /// Raw stored text, `None` when absent or unreadable
    pub fn raw(&self, key: &str) -> Option<String> {
        self.backend.read(key).ok().flatten()
    }
}
