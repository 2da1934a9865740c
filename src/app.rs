//! Habit Tracker App
//!
//! Root component: hydrates the habit service from LocalStorage, provides the
//! store and context, and lays out the page.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{HabitList, NewHabitForm, NoticeBar};
use crate::config::HabitConfig;
use crate::context::{AppContext, Notice};
use crate::domain::SystemClock;
use crate::repository::{HabitRepository, LocalStorageBackend};
use crate::service::HabitService;
use crate::store::AppState;

#[component]
pub fn App(config: HabitConfig) -> impl IntoView {
    let repo = HabitRepository::new(LocalStorageBackend::new(), config.storage_key.clone());
    let (service, load_error) = HabitService::hydrate(repo, config, Arc::new(SystemClock));

    provide_context(Store::new(AppState::new(service)));

    let ctx = AppContext::new(signal(None::<Notice>));
    provide_context(ctx);

    if let Some(e) = load_error {
        ctx.report(Notice::Persist(e));
    }

    view! {
        <div class="container">
            <h1>"My Habit Tracker"</h1>
            <NoticeBar />
            <NewHabitForm />
            <HabitList />
        </div>
    }
}
