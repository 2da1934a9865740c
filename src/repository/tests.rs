//! Repository Integration Tests
//!
//! HabitRepository against the in-memory backend.

#[cfg(test)]
mod tests {
    use crate::domain::{Habit, PersistError};
    use crate::repository::{HabitRepository, MemoryBackend, StorageBackend};
    use proptest::prelude::*;

    fn setup_test_repo() -> HabitRepository<MemoryBackend> {
        HabitRepository::new(MemoryBackend::new(), "habits")
    }

    fn sample() -> Vec<Habit> {
        vec![
            Habit::new(1, "Drink water"),
            Habit { id: 2, name: "Read".to_string(), completed: true },
            Habit::new(3, "Walk"),
        ]
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let repo = setup_test_repo();
        assert_eq!(repo.load().expect("Load failed"), Vec::new());
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let repo = setup_test_repo();
        repo.save(&sample()).expect("Save failed");
        assert_eq!(repo.load().expect("Load failed"), sample());
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let repo = setup_test_repo();
        repo.save(&sample()).unwrap();
        repo.save(&[Habit::new(9, "Only")]).unwrap();
        assert_eq!(repo.load().unwrap(), vec![Habit::new(9, "Only")]);
    }

    #[test]
    fn test_writes_legacy_compatible_json() {
        let repo = setup_test_repo();
        repo.save(&[Habit::new(1700000000000, "Stretch")]).unwrap();
        let raw = repo.backend().get("habits").unwrap().unwrap();
        assert_eq!(raw, r#"[{"id":1700000000000,"name":"Stretch","completed":false}]"#);
    }

    #[test]
    fn test_corrupt_payload_is_reported() {
        let repo = setup_test_repo();
        repo.backend().set("habits", "[{\"id\": 1, \"name\":").unwrap();
        assert!(matches!(repo.load(), Err(PersistError::Corrupt(_))));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let repo = setup_test_repo();
        repo.backend().set("habits", r#"{"habits": []}"#).unwrap();
        assert!(repo.load().unwrap_err().is_corrupt());
    }

    #[test]
    fn test_quota_exceeded_is_reported() {
        let repo = HabitRepository::new(MemoryBackend::with_quota(16), "habits");
        let err = repo.save(&sample()).unwrap_err();
        assert!(matches!(err, PersistError::QuotaExceeded(_)));
    }

    #[test]
    fn test_unavailable_storage_is_reported() {
        let repo = setup_test_repo();
        repo.backend().set_available(false);
        assert!(matches!(repo.save(&sample()), Err(PersistError::Unavailable(_))));
        assert!(matches!(repo.load(), Err(PersistError::Unavailable(_))));
    }

    #[test]
    fn test_clear_removes_slot() {
        let repo = setup_test_repo();
        repo.save(&sample()).unwrap();
        repo.clear().unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_separate_keys_do_not_interfere() {
        let backend = MemoryBackend::new();
        let a = HabitRepository::new(backend.clone(), "habits");
        let b = HabitRepository::new(backend, "habits.other");
        a.save(&sample()).unwrap();
        assert!(b.load().unwrap().is_empty());
    }

    fn arb_habit() -> impl Strategy<Value = Habit> {
        (any::<u64>(), "\\PC{1,24}", any::<bool>())
            .prop_map(|(id, name, completed)| Habit { id, name, completed })
    }

    proptest! {
        #[test]
        fn prop_load_after_save_is_identity(habits in prop::collection::vec(arb_habit(), 0..12)) {
            let repo = setup_test_repo();
            repo.save(&habits).unwrap();
            prop_assert_eq!(repo.load().unwrap(), habits);
        }
    }
}
