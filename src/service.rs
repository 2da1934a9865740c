//! Habit Service
//!
//! Owns the store and its repository and fixes the order of every user
//! action: mutate the store, then write it to storage. A failed write never
//! undoes the mutation; it is returned next to the result so the caller can
//! report it and still re-render.

use std::sync::Arc;

use crate::config::HabitConfig;
use crate::domain::{Clock, Habit, HabitId, PersistError, ValidationError};
use crate::habit_store::HabitStore;
use crate::repository::{HabitRepository, StorageBackend};
use crate::view::{self, HabitListView};

/// Outcome of a mutation together with the outcome of persisting it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed<T> {
    pub value: T,
    pub persisted: Result<(), PersistError>,
}

impl<T> Committed<T> {
    pub fn persist_error(&self) -> Option<&PersistError> {
        self.persisted.as_ref().err()
    }
}

#[derive(Debug, Clone)]
pub struct HabitService<B: StorageBackend> {
    store: HabitStore,
    repo: HabitRepository<B>,
    config: HabitConfig,
}

impl<B: StorageBackend> HabitService<B> {
    /// Build the service from whatever the repository holds
    ///
    /// Any load failure (including a corrupt payload) starts from an empty
    /// list; the error is handed back for reporting.
    pub fn hydrate(
        repo: HabitRepository<B>,
        config: HabitConfig,
        clock: Arc<dyn Clock>,
    ) -> (Self, Option<PersistError>) {
        let (habits, error) = match repo.load() {
            Ok(habits) => {
                log::info!("Loaded {} habits from '{}'", habits.len(), repo.key());
                (habits, None)
            }
            Err(e) => {
                if e.is_corrupt() {
                    log::error!("Discarding corrupt habits under '{}': {}", repo.key(), e);
                } else {
                    log::warn!("Could not load habits: {}", e);
                }
                (Vec::new(), Some(e))
            }
        };

        let store = HabitStore::from_habits(habits, clock).with_max_name_chars(config.max_name_chars);
        (Self { store, repo, config }, error)
    }

    pub fn add(&mut self, raw: &str) -> Result<Committed<Habit>, ValidationError> {
        let habit = self.store.add(raw)?;
        log::debug!("Added habit {} '{}'", habit.id, habit.name);
        Ok(self.commit(habit))
    }

    /// Flip a habit; an unknown id is a silent no-op and nothing is written
    pub fn toggle(&mut self, id: HabitId) -> Committed<bool> {
        match self.store.toggle(id) {
            Ok(()) => {
                log::debug!("Toggled habit {}", id);
                self.commit(true)
            }
            Err(e) => {
                log::debug!("Ignoring toggle: {}", e);
                Committed {
                    value: false,
                    persisted: Ok(()),
                }
            }
        }
    }

    /// Remove a habit; the list is written back even when nothing matched
    pub fn delete(&mut self, id: HabitId) -> Committed<bool> {
        let removed = self.store.delete(id);
        log::debug!("Deleted habit {} (removed: {})", id, removed);
        self.commit(removed)
    }

    pub fn habits(&self) -> &[Habit] {
        self.store.all()
    }

    pub fn store(&self) -> &HabitStore {
        &self.store
    }

    pub fn config(&self) -> &HabitConfig {
        &self.config
    }

    pub fn view(&self) -> HabitListView {
        view::render(self.store.all(), &self.config.empty_message)
    }

    fn commit<T>(&self, value: T) -> Committed<T> {
        let persisted = self.repo.save(self.store.all());
        if let Err(e) = &persisted {
            log::warn!("Failed to save habits: {}", e);
        }
        Committed { value, persisted }
    }
}
