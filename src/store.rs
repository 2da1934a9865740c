//! Global Application State Store
//!
//! Uses Leptos reactive_stores. The habit service is the only field; every
//! mutation runs inside one write guard, so storage is written before the
//! guard drops and notifies the list to re-render.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::domain::{Habit, HabitId, ValidationError};
use crate::repository::LocalStorageBackend;
use crate::service::{Committed, HabitService};
use crate::view::HabitListView;

/// Global application state with field-level reactivity
#[derive(Debug, Store)]
pub struct AppState {
    /// Habit list and its LocalStorage persistence
    pub service: HabitService<LocalStorageBackend>,
}

impl AppState {
    pub fn new(service: HabitService<LocalStorageBackend>) -> Self {
        Self { service }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a habit from raw input text
pub fn store_add_habit(store: &AppStore, raw: &str) -> Result<Committed<Habit>, ValidationError> {
    store.service().write().add(raw)
}

/// Flip a habit's completion flag by ID
pub fn store_toggle_habit(store: &AppStore, id: HabitId) -> Committed<bool> {
    store.service().write().toggle(id)
}

/// Remove a habit by ID
pub fn store_delete_habit(store: &AppStore, id: HabitId) -> Committed<bool> {
    store.service().write().delete(id)
}

/// Current list projection (tracked)
pub fn store_view(store: &AppStore) -> HabitListView {
    store.service().with(|service| service.view())
}
