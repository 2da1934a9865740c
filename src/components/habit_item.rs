//! Habit Item Component
//!
//! One row: completion checkbox, name, delete button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_delete_habit, store_toggle_habit, use_app_store};
use crate::view::HabitRow;

#[component]
pub fn HabitItem(row: HabitRow) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = row.id;
    let class = row.class();
    let completed = row.completed;
    let name = row.name;

    view! {
        <div class=class>
            <input
                type="checkbox"
                class="habit-checkbox"
                checked=completed
                on:change=move |_| ctx.report_persist(store_toggle_habit(&store, id).persisted)
            />
            // Leptos escapes text nodes, so names are never parsed as markup
            <span class="habit-name">{name}</span>
            <button
                class="delete-button"
                on:click=move |_| ctx.report_persist(store_delete_habit(&store, id).persisted)
            >
                "Delete"
            </button>
        </div>
    }
}
