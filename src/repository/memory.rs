//! In-Memory Storage Backend
//!
//! Shared map behind a mutex. Clones share the same slots, so a "fresh"
//! repository built from a clone sees what the previous one saved, the way a
//! reloaded page sees LocalStorage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::StorageBackend;
use crate::domain::PersistError;

#[derive(Debug, Default)]
struct MemoryState {
    slots: HashMap<String, String>,
    /// Maximum total bytes across all keys and values
    quota_bytes: Option<usize>,
    unavailable: bool,
}

impl MemoryState {
    fn used_bytes_without(&self, key: &str) -> usize {
        self.slots
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that rejects writes pushing total usage past `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        let backend = Self::new();
        if let Ok(mut state) = backend.state.lock() {
            state.quota_bytes = Some(bytes);
        }
        backend
    }

    /// Simulate storage being disabled (private browsing, blocked cookies)
    pub fn set_available(&self, available: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.unavailable = !available;
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, PersistError> {
        let state = self
            .state
            .lock()
            .map_err(|e| PersistError::Backend(e.to_string()))?;
        if state.unavailable {
            return Err(PersistError::Unavailable("memory backend disabled".to_string()));
        }
        Ok(state)
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.lock()?.slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut state = self.lock()?;
        if let Some(quota) = state.quota_bytes {
            let needed = state.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(PersistError::QuotaExceeded(format!(
                    "{} bytes needed, {} allowed",
                    needed, quota
                )));
            }
        }
        state.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        self.lock()?.slots.remove(key);
        Ok(())
    }
}
