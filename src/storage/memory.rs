use chrono::Utc;
use dashmap::DashMap;

use crate::pets::types::{Pet, PetFilters, PetKind};

/// Fixture id for the seeded dog record ("Rex").
pub const REX_ID: &str = "550e8400-e29b-41d4-a716-446655440001";
/// Fixture id for the seeded cat record ("Mimi").
pub const MIMI_ID: &str = "550e8400-e29b-41d4-a716-446655440002";

/// The authoritative in-memory set of pets.
///
/// A thin wrapper over a concurrent map keyed by the pet id. Holds no
/// business logic and performs no validation; every mutation is a single
/// map operation, so a pet either fully exists or is absent. State lives
/// for the lifetime of the process, there is no persistence.
pub struct PetStore {
    pets: DashMap<String, Pet>,
}

impl PetStore {
    /// Creates an empty store. Fixture data is loaded separately via
    /// [`PetStore::seed`] so tests can start from a blank slate.
    pub fn new() -> Self {
        Self {
            pets: DashMap::new(),
        }
    }

    /// Inserts the two fixture pets with fixed literal ids, giving
    /// integration tests deterministic starting data.
    pub fn seed(&self) {
        let now = Utc::now();
        let fixtures = [
            Pet {
                id: REX_ID.to_string(),
                name: "Rex".to_string(),
                kind: PetKind::Dog,
                age: 5,
                breed: Some("Labrador".to_string()),
                owner_name: Some("João Silva".to_string()),
                created_at: now,
                updated_at: now,
            },
            Pet {
                id: MIMI_ID.to_string(),
                name: "Mimi".to_string(),
                kind: PetKind::Cat,
                age: 3,
                breed: Some("Persa".to_string()),
                owner_name: Some("Maria Santos".to_string()),
                created_at: now,
                updated_at: now,
            },
        ];

        for pet in fixtures {
            self.pets.insert(pet.id.clone(), pet);
        }
    }

    /// Inserts or replaces a pet by its id. Always succeeds.
    pub fn put(&self, pet: Pet) {
        self.pets.insert(pet.id.clone(), pet);
    }

    pub fn get(&self, id: &str) -> Option<Pet> {
        self.pets.get(id).map(|entry| entry.value().clone())
    }

    /// Returns every pet matching the filters. Both filters, when present,
    /// are applied as an AND conjunction with exact matching. Iteration
    /// order is not meaningful.
    pub fn list(&self, filters: &PetFilters) -> Vec<Pet> {
        self.pets
            .iter()
            .filter(|entry| filters.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn exists(&self, id: &str) -> bool {
        self.pets.contains_key(id)
    }

    /// Removes a pet. Returns whether a record was actually removed.
    pub fn remove(&self, id: &str) -> bool {
        self.pets.remove(id).is_some()
    }

    pub fn count(&self) -> usize {
        self.pets.len()
    }

    /// Empties the store. Test/reset convenience.
    pub fn clear(&self) {
        self.pets.clear();
    }
}

impl Default for PetStore {
    fn default() -> Self {
        Self::new()
    }
}
