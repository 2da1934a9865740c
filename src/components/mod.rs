//! UI Components
//!
//! Leptos components for the habit page.

mod habit_item;
mod habit_list;
mod new_habit_form;
mod notice_bar;

pub use habit_item::HabitItem;
pub use habit_list::HabitList;
pub use new_habit_form::NewHabitForm;
pub use notice_bar::NoticeBar;
