//! View Projection
//!
//! Pure mapping from the habit sequence to what the list shows. Components
//! rebuild the whole list from this on every change.

use crate::domain::{Habit, HabitId};

/// One rendered habit row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitRow {
    pub id: HabitId,
    pub name: String,
    pub completed: bool,
}

impl HabitRow {
    pub fn class(&self) -> &'static str {
        if self.completed {
            "habit-item completed"
        } else {
            "habit-item"
        }
    }
}

/// Whole-list projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitListView {
    /// No habits: show the placeholder instead of a list
    Empty { message: String },
    List { rows: Vec<HabitRow>, summary: String },
}

impl HabitListView {
    pub fn is_empty(&self) -> bool {
        matches!(self, HabitListView::Empty { .. })
    }
}

pub fn render(habits: &[Habit], empty_message: &str) -> HabitListView {
    if habits.is_empty() {
        return HabitListView::Empty {
            message: empty_message.to_string(),
        };
    }

    let rows = habits
        .iter()
        .map(|habit| HabitRow {
            id: habit.id,
            name: habit.name.clone(),
            completed: habit.completed,
        })
        .collect();
    let completed = habits.iter().filter(|h| h.completed).count();

    HabitListView::List {
        rows,
        summary: summary(habits.len(), completed),
    }
}

fn summary(total: usize, completed: usize) -> String {
    let noun = if total == 1 { "habit" } else { "habits" };
    format!("{} {}, {} completed", total, noun, completed)
}
