//! Domain-level errors
//!
//! Three independent failure families plus an umbrella type:
//! - `ValidationError`: rejected user input, reported at the point of the action
//! - `NotFoundError`: a toggle target that no longer exists, absorbed by callers
//! - `PersistError`: durable storage failures, reported out-of-band

use thiserror::Error;

use super::habit::HabitId;

/// Rejected habit name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a habit name!")]
    Empty,
    #[error("Habit name is too long ({len} characters, at most {max} allowed)")]
    TooLong { max: usize, len: usize },
}

/// No habit with the requested id is held by the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No habit with id {id}")]
pub struct NotFoundError {
    pub id: HabitId,
}

/// Durable storage failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistError {
    #[error("Storage is unavailable: {0}")]
    Unavailable(String),
    #[error("Storage quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("Storage backend error: {0}")]
    Backend(String),
    #[error("Failed to encode habits: {0}")]
    Encode(String),
    #[error("Stored habits are corrupt: {0}")]
    Corrupt(String),
}

impl PersistError {
    /// Whether the stored payload itself is unreadable (as opposed to storage being unreachable)
    pub fn is_corrupt(&self) -> bool {
        matches!(self, PersistError::Corrupt(_))
    }
}

/// Any error produced by the habit core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HabitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}
