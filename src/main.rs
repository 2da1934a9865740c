//! Habit Tracker Frontend Entry Point

fn main() {
    habit_tracker::run();
}
