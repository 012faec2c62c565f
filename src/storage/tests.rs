//! Storage Module Tests
//!
//! Validates the in-memory store mechanics in isolation: fixture seeding,
//! basic put/get/remove operations and filtered listing.

#[cfg(test)]
mod tests {
    use crate::pets::types::{Pet, PetFilters, PetKind};
    use crate::storage::memory::{PetStore, MIMI_ID, REX_ID};
    use chrono::Utc;

    fn sample_pet(id: &str, name: &str, kind: PetKind, age: u32) -> Pet {
        let now = Utc::now();
        Pet {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            age,
            breed: None,
            owner_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    // ============================================================
    // SEEDING
    // ============================================================

    #[test]
    fn test_new_store_is_empty() {
        let store = PetStore::new();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_seed_inserts_exactly_two_fixtures() {
        let store = PetStore::new();
        store.seed();
        assert_eq!(store.count(), 2);

        let rex = store.get(REX_ID).expect("Rex should be seeded");
        assert_eq!(rex.name, "Rex");
        assert_eq!(rex.kind, PetKind::Dog);
        assert_eq!(rex.age, 5);
        assert_eq!(rex.breed.as_deref(), Some("Labrador"));
        assert_eq!(rex.owner_name.as_deref(), Some("João Silva"));
        assert_eq!(rex.created_at, rex.updated_at);

        let mimi = store.get(MIMI_ID).expect("Mimi should be seeded");
        assert_eq!(mimi.name, "Mimi");
        assert_eq!(mimi.kind, PetKind::Cat);
        assert_eq!(mimi.age, 3);
    }

    #[test]
    fn test_seed_is_idempotent_on_count() {
        let store = PetStore::new();
        store.seed();
        store.seed();
        assert_eq!(store.count(), 2, "Fixture ids are fixed, re-seeding replaces");
    }

    // ============================================================
    // BASIC OPERATIONS
    // ============================================================

    #[test]
    fn test_put_then_get_roundtrip() {
        let store = PetStore::new();
        let pet = sample_pet("pet-001", "Bolt", PetKind::Dog, 2);

        store.put(pet.clone());

        assert_eq!(store.get("pet-001"), Some(pet));
    }

    #[test]
    fn test_get_unknown_returns_none() {
        let store = PetStore::new();
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_put_overwrites_existing_record() {
        let store = PetStore::new();
        store.put(sample_pet("pet-001", "Original", PetKind::Dog, 2));
        store.put(sample_pet("pet-001", "Replaced", PetKind::Cat, 4));

        let stored = store.get("pet-001").unwrap();
        assert_eq!(stored.name, "Replaced");
        assert_eq!(stored.kind, PetKind::Cat);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_exists_tracks_presence() {
        let store = PetStore::new();
        assert!(!store.exists("pet-001"));
        store.put(sample_pet("pet-001", "Bolt", PetKind::Dog, 2));
        assert!(store.exists("pet-001"));
    }

    #[test]
    fn test_remove_reports_whether_a_record_was_removed() {
        let store = PetStore::new();
        store.put(sample_pet("pet-001", "Bolt", PetKind::Dog, 2));

        assert!(store.remove("pet-001"), "First removal should report true");
        assert!(!store.remove("pet-001"), "Second removal should report false");
        assert!(!store.exists("pet-001"));
    }

    #[test]
    fn test_count_tracks_mutations() {
        let store = PetStore::new();
        assert_eq!(store.count(), 0);

        store.put(sample_pet("a", "A", PetKind::Dog, 1));
        store.put(sample_pet("b", "B", PetKind::Cat, 2));
        assert_eq!(store.count(), 2);

        store.remove("a");
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_clear_empties_the_store() {
        let store = PetStore::new();
        store.seed();
        store.clear();
        assert_eq!(store.count(), 0);
        assert!(store.get(REX_ID).is_none());
    }

    // ============================================================
    // FILTERED LISTING
    // ============================================================

    #[test]
    fn test_list_without_filters_returns_everything() {
        let store = PetStore::new();
        store.put(sample_pet("a", "A", PetKind::Dog, 1));
        store.put(sample_pet("b", "B", PetKind::Cat, 2));
        store.put(sample_pet("c", "C", PetKind::Bird, 3));

        let all = store.list(&PetFilters::default());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_list_filters_by_kind() {
        let store = PetStore::new();
        store.put(sample_pet("a", "A", PetKind::Dog, 1));
        store.put(sample_pet("b", "B", PetKind::Dog, 2));
        store.put(sample_pet("c", "C", PetKind::Cat, 2));

        let dogs = store.list(&PetFilters {
            kind: Some(PetKind::Dog),
            age: None,
        });
        assert_eq!(dogs.len(), 2);
        assert!(dogs.iter().all(|p| p.kind == PetKind::Dog));
    }

    #[test]
    fn test_list_filters_by_age() {
        let store = PetStore::new();
        store.put(sample_pet("a", "A", PetKind::Dog, 1));
        store.put(sample_pet("b", "B", PetKind::Cat, 2));

        let aged_two = store.list(&PetFilters {
            kind: None,
            age: Some(2.0),
        });
        assert_eq!(aged_two.len(), 1);
        assert_eq!(aged_two[0].id, "b");
    }

    #[test]
    fn test_list_applies_both_filters_as_conjunction() {
        let store = PetStore::new();
        store.put(sample_pet("a", "A", PetKind::Dog, 5));
        store.put(sample_pet("b", "B", PetKind::Dog, 3));
        store.put(sample_pet("c", "C", PetKind::Cat, 5));

        let result = store.list(&PetFilters {
            kind: Some(PetKind::Dog),
            age: Some(5.0),
        });
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "a");
    }

    #[test]
    fn test_list_with_unmatched_conjunction_is_empty() {
        let store = PetStore::new();
        store.put(sample_pet("a", "A", PetKind::Dog, 5));

        let result = store.list(&PetFilters {
            kind: Some(PetKind::Cat),
            age: Some(5.0),
        });
        assert!(result.is_empty());
    }

    #[test]
    fn test_list_with_fractional_age_matches_nothing() {
        let store = PetStore::new();
        store.put(sample_pet("a", "A", PetKind::Dog, 5));

        let result = store.list(&PetFilters {
            kind: None,
            age: Some(5.5),
        });
        assert!(result.is_empty());
    }
}
