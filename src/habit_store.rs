//! Habit Store
//!
//! In-memory ordered list of habits. New habits are appended; toggling never
//! reorders; deletion keeps the relative order of the rest. The store neither
//! persists nor renders; see `service::HabitService` for that ordering.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{Clock, Entity, Habit, HabitId, IdGenerator, NotFoundError, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct HabitStore {
    habits: Vec<Habit>,
    ids: IdGenerator,
    max_name_chars: Option<usize>,
}

impl HabitStore {
    /// Empty store using the wall clock for ids
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store with an explicit id clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            habits: Vec::new(),
            ids: IdGenerator::new(clock),
            max_name_chars: None,
        }
    }

    /// Store hydrated from previously saved habits
    ///
    /// The id generator is advanced past every loaded id.
    pub fn from_habits(habits: Vec<Habit>, clock: Arc<dyn Clock>) -> Self {
        let mut ids = IdGenerator::new(clock);
        for habit in &habits {
            ids.observe(habit.id());
        }
        Self {
            habits,
            ids,
            max_name_chars: None,
        }
    }

    /// Reject names longer than `max` characters
    pub fn with_max_name_chars(mut self, max: Option<usize>) -> Self {
        self.max_name_chars = max;
        self
    }

    /// Append a new habit named by the trimmed `raw` text
    pub fn add(&mut self, raw: &str) -> Result<Habit, ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty);
        }
        if let Some(max) = self.max_name_chars {
            let len = name.chars().count();
            if len > max {
                return Err(ValidationError::TooLong { max, len });
            }
        }

        let id = match self.ids.next_id() {
            Some(id) => id,
            None => self.smallest_unused_id(),
        };
        let habit = Habit::new(id, name);
        self.habits.push(habit.clone());
        Ok(habit)
    }

    /// Flip the completion flag of the habit with `id`
    pub fn toggle(&mut self, id: HabitId) -> Result<(), NotFoundError> {
        self.habits
            .iter_mut()
            .find(|habit| habit.id() == id)
            .map(Habit::toggle)
            .ok_or(NotFoundError { id })
    }

    /// Remove every habit with `id`; returns whether anything was removed
    pub fn delete(&mut self, id: HabitId) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id() != id);
        self.habits.len() != before
    }

    pub fn all(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id() == id)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.habits.iter().filter(|habit| habit.completed).count()
    }

    /// Lowest id not held by any habit; used once the generator is exhausted
    fn smallest_unused_id(&self) -> HabitId {
        let held: HashSet<HabitId> = self.habits.iter().map(Entity::id).collect();
        (0..).find(|id| !held.contains(id)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use proptest::prelude::*;

    fn store() -> HabitStore {
        HabitStore::with_clock(Arc::new(FixedClock(1_000)))
    }

    fn names(store: &HabitStore) -> Vec<&str> {
        store.all().iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut store = store();
        store.add("Read").unwrap();
        let added = store.add("  Drink water \n").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(added.name, "Drink water");
        assert!(!added.completed);
        assert_eq!(store.all().last(), Some(&added));
        assert_eq!(names(&store), vec!["Read", "Drink water"]);
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut store = store();
        assert_eq!(store.add(""), Err(ValidationError::Empty));
        assert_eq!(store.add("   "), Err(ValidationError::Empty));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_allows_duplicate_names() {
        let mut store = store();
        let a = store.add("Walk").unwrap();
        let b = store.add("Walk").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_respects_name_limit() {
        let mut store = store().with_max_name_chars(Some(4));
        assert!(store.add(" Walk ").is_ok());
        assert_eq!(store.add("Stretch"), Err(ValidationError::TooLong { max: 4, len: 7 }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut store = store();
        let a = store.add("A").unwrap();
        let b = store.add("B").unwrap();

        store.toggle(b.id).unwrap();
        assert!(!store.get(a.id).unwrap().completed);
        assert!(store.get(b.id).unwrap().completed);
        assert_eq!(names(&store), vec!["A", "B"]);

        store.toggle(b.id).unwrap();
        assert!(!store.get(b.id).unwrap().completed);
    }

    #[test]
    fn test_toggle_missing_leaves_store_unchanged() {
        let mut store = store();
        store.add("A").unwrap();
        let before = store.all().to_vec();

        assert_eq!(store.toggle(999), Err(NotFoundError { id: 999 }));
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let mut store = store();
        store.add("A").unwrap();
        let b = store.add("B").unwrap();
        store.add("C").unwrap();

        assert!(store.delete(b.id));
        assert_eq!(names(&store), vec!["A", "C"]);
        assert!(!store.delete(b.id));
        assert_eq!(names(&store), vec!["A", "C"]);
    }

    #[test]
    fn test_delete_removes_all_duplicates_of_id() {
        let habits = vec![Habit::new(1, "A"), Habit::new(2, "B"), Habit::new(1, "A again")];
        let mut store = HabitStore::from_habits(habits, Arc::new(FixedClock(0)));
        store.delete(1);
        assert_eq!(names(&store), vec!["B"]);
    }

    #[test]
    fn test_hydrated_ids_are_not_reused() {
        let habits = vec![Habit::new(5_000, "Old")];
        let mut store = HabitStore::from_habits(habits, Arc::new(FixedClock(1_000)));
        let added = store.add("New").unwrap();
        assert_eq!(added.id, 5_001);
    }

    #[test]
    fn test_max_loaded_id_is_not_reused() {
        let habits = vec![Habit::new(0, "Zero"), Habit::new(u64::MAX, "Old")];
        let mut store = HabitStore::from_habits(habits, Arc::new(FixedClock(1)));

        let first = store.add("New").unwrap();
        let second = store.add("Newer").unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_completed_count() {
        let mut store = store();
        let a = store.add("A").unwrap();
        store.add("B").unwrap();
        store.toggle(a.id).unwrap();
        assert_eq!(store.completed_count(), 1);
    }

    proptest! {
        #[test]
        fn prop_add_grows_by_one(prefix in "[ \t]{0,3}", body in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}", suffix in "[ \t]{0,3}") {
            let mut store = store();
            store.add("existing").unwrap();
            let raw = format!("{prefix}{body}{suffix}");

            let added = store.add(&raw).unwrap();
            prop_assert_eq!(store.len(), 2);
            prop_assert_eq!(added.name.as_str(), raw.trim());
            prop_assert!(!store.all()[1].completed);
        }

        #[test]
        fn prop_double_toggle_restores(count in 1usize..8, pick in 0usize..8) {
            let mut store = store();
            for i in 0..count {
                store.add(&format!("habit {i}")).unwrap();
            }
            let before = store.all().to_vec();
            let id = before[pick % count].id;

            store.toggle(id).unwrap();
            store.toggle(id).unwrap();
            prop_assert_eq!(store.all(), before.as_slice());
        }
    }
}
