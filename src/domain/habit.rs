//! Habit Entity
//!
//! A user-named, independently completable tracked item.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Habit identifier (millisecond-shaped, see `IdGenerator`)
pub type HabitId = u64;

/// A tracked habit
///
/// Serialized as `{"id": <int>, "name": <string>, "completed": <bool>}`,
/// the same shape the legacy page stored under the `habits` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier among held habits
    pub id: HabitId,
    /// Trimmed, non-empty display name
    pub name: String,
    /// Completion status
    pub completed: bool,
}

impl Habit {
    /// Create a new, not yet completed habit
    pub fn new(id: HabitId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl Entity for Habit {
    type Id = HabitId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
