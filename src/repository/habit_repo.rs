//! Habit Repository
//!
//! Persistence adapter: the whole habit list lives in one slot as a JSON
//! array of `{id, name, completed}` objects. Every save overwrites the slot.

use crate::domain::{Habit, PersistError};

use super::traits::StorageBackend;

#[derive(Debug, Clone)]
pub struct HabitRepository<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> HabitRepository<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Storage slot this repository writes to
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Serialize the full sequence and overwrite the slot
    pub fn save(&self, habits: &[Habit]) -> Result<(), PersistError> {
        let json = serde_json::to_string(habits).map_err(|e| PersistError::Encode(e.to_string()))?;
        self.backend.set(&self.key, &json)?;
        log::debug!("Saved {} habits to '{}'", habits.len(), self.key);
        Ok(())
    }

    /// Read the slot; a missing slot is an empty list
    pub fn load(&self) -> Result<Vec<Habit>, PersistError> {
        let Some(json) = self.backend.get(&self.key)? else {
            log::debug!("No saved habits under '{}'", self.key);
            return Ok(Vec::new());
        };
        serde_json::from_str(&json).map_err(|e| PersistError::Corrupt(e.to_string()))
    }

    /// Remove the slot entirely
    pub fn clear(&self) -> Result<(), PersistError> {
        self.backend.remove(&self.key)
    }
}
