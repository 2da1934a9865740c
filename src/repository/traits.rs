//! Repository Layer - Core Traits
//!
//! Abstract string-keyed durable storage.
//! Implementations: browser LocalStorage, in-memory.

use crate::domain::PersistError;

/// Durable key-value slot storage (get/set/remove by string key)
///
/// Implementations are synchronous: every call completes before the UI
/// event that triggered it returns.
pub trait StorageBackend: Send + Sync {
    /// Read a slot; `Ok(None)` when the key has never been written
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Overwrite a slot
    fn set(&self, key: &str, value: &str) -> Result<(), PersistError>;

    /// Remove a slot; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), PersistError>;
}
