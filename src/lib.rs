//! Habit Tracker
//!
//! Browser habit list persisted to LocalStorage.
//!
//! Layers:
//! - domain: Habit entity, id generation, errors
//! - habit_store: in-memory ordered list and its mutations
//! - repository: key-value storage backends and the JSON persistence adapter
//! - service: mutate-then-save orchestration
//! - view: pure list projection
//! - app/components/store/context: Leptos shell

pub mod config;
pub mod domain;
pub mod habit_store;
pub mod logging;
pub mod repository;
pub mod service;
pub mod view;

mod app;
mod components;
mod context;
mod store;

pub use app::App;

use config::HabitConfig;

/// Browser entry point
#[cfg(target_arch = "wasm32")]
pub fn run() {
    use leptos::prelude::*;

    // Logger first, so config parse failures are visible
    logging::init_logging(log::LevelFilter::Info);
    let config = HabitConfig::load();
    logging::set_level(config.level_filter());
    log::info!("Habit tracker starting (storage key '{}')", config.storage_key);
    mount_to_body(move || view! { <App config=config /> });
}

/// Native builds have no page to mount
#[cfg(not(target_arch = "wasm32"))]
pub fn run() {
    logging::init_logging(log::LevelFilter::Info);
    let config = HabitConfig::load();
    logging::set_level(config.level_filter());
    log::error!("The habit tracker runs in a browser; build for wasm32-unknown-unknown (e.g. `trunk serve`)");
}
