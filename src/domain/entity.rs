//! Domain Layer - Core Entity Trait
//!
//! Basic contract for anything the store keeps in a list and looks up by id.

/// Core trait for domain entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
