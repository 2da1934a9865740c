//! Repository Layer
//!
//! Key-value storage backends and the habit persistence adapter.

mod traits;
mod memory;
mod local_storage;
mod habit_repo;

#[cfg(test)]
mod tests;

pub use traits::StorageBackend;
pub use memory::MemoryBackend;
pub use local_storage::LocalStorageBackend;
pub use habit_repo::HabitRepository;
