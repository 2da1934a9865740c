//! Habit List Component
//!
//! Rebuilt from the list projection on every store change; shows the
//! placeholder when there are no habits.

use leptos::prelude::*;

use crate::components::HabitItem;
use crate::store::{store_view, use_app_store};
use crate::view::HabitListView;

#[component]
pub fn HabitList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="habitsList" class="habits-list">
            {move || match store_view(&store) {
                HabitListView::Empty { message } => view! {
                    <p class="empty-state">{message}</p>
                }.into_any(),
                HabitListView::List { rows, summary } => view! {
                    {rows.into_iter().map(|row| view! { <HabitItem row=row /> }).collect_view()}
                    <p class="habit-count">{summary}</p>
                }.into_any(),
            }}
        </div>
    }
}
