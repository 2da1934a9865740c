//! New Habit Form Component
//!
//! Text input plus "Add Habit" button. Enter submits as well.

use leptos::prelude::*;

use crate::context::{use_app_context, Notice};
use crate::store::{store_add_habit, use_app_store};

#[component]
pub fn NewHabitForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let add_habit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        match store_add_habit(&store, &text) {
            Ok(committed) => {
                set_new_text.set(String::new());
                ctx.report_persist(committed.persisted);
            }
            Err(e) => ctx.report(Notice::Validation(e)),
        }
    };

    view! {
        <form class="input-section" on:submit=add_habit>
            <input
                type="text"
                id="habitInput"
                placeholder="Enter a new habit (e.g., Drink water)"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" id="addButton">"Add Habit"</button>
        </form>
    }
}
