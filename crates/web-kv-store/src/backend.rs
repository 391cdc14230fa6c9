//! Key-Value Backends
//!
//! Raw string storage the typed [`KvStore`](crate::KvStore) sits on.
//! Backends report every fault; swallowing them is the store's job.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{StorageError, StorageResult};

/// Synchronous string key-value storage
pub trait KeyValueBackend {
    /// Read the raw text under `key`, `None` when absent
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `raw` under `key`, replacing any previous value
    fn write(&self, key: &str, raw: &str) -> StorageResult<()>;
}

/// `window.localStorage`
///
/// Holds no handle: the storage object is looked up on every call, so a
/// browser that revokes access mid-session just starts failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage(&self) -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Read(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn write(&self, key: &str, raw: &str) -> StorageResult<()> {
        self.storage()?
            .set_item(key, raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory backend for tests and hosts without a browser
///
/// Clones share the same map, so a test can keep one handle and give the
/// other to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw entry, bypassing encoding
    pub fn with_entry(self, key: &str, raw: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), raw.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, raw: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), raw.to_string());
        Ok(())
    }
}

/// Backend that fails every call, like storage disabled in a private window
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingBackend;

impl KeyValueBackend for FailingBackend {
    fn read(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable)
    }

    fn write(&self, _key: &str, _raw: &str) -> StorageResult<()> {
        Err(StorageError::Write("quota exceeded".to_string()))
    }
}
