//! Domain Layer
//!
//! Habit entity, id generation and error taxonomy.
//! This layer has NO browser dependencies (serde and chrono only).

mod entity;
mod error;
mod habit;
mod id;

pub use entity::Entity;
pub use error::{HabitError, NotFoundError, PersistError, ValidationError};
pub use habit::{Habit, HabitId};
pub use id::{Clock, FixedClock, IdGenerator, SystemClock};
