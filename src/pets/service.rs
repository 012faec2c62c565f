use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use super::types::{CreatePetRequest, Pet, PetFilters, ServiceStats, UpdatePetRequest};
use super::validation::{self, ValidationError};
use crate::storage::memory::PetStore;

/// Domain failure of a service operation.
///
/// A tagged union so the transport layer can pattern-match on the kind
/// instead of inspecting runtime types: validation failures map to 400,
/// missing resources to 404.
#[derive(Debug, Error)]
pub enum PetError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Pet com ID '{id}' não foi encontrado")]
    NotFound { id: String },
}

impl PetError {
    fn not_found(id: &str) -> Self {
        PetError::NotFound { id: id.to_string() }
    }
}

/// Business rules for pet records: validation, id and timestamp generation,
/// partial-update merge semantics. The only component enforcing
/// cross-cutting rules; storage stays dumb.
pub struct PetService {
    store: Arc<PetStore>,
}

impl PetService {
    /// The store is injected so tests can run against isolated instances.
    pub fn new(store: Arc<PetStore>) -> Self {
        Self { store }
    }

    /// Validates the payload, generates a fresh UUID v4 id, trims the text
    /// fields and stamps both timestamps with the same instant.
    pub fn create(&self, input: &CreatePetRequest) -> Result<Pet, PetError> {
        let new_pet = validation::validate_create(input)?;
        let now = Utc::now();

        let pet = Pet {
            id: Uuid::new_v4().to_string(),
            name: new_pet.name.trim().to_string(),
            kind: new_pet.kind,
            age: new_pet.age,
            breed: new_pet.breed.map(|b| b.trim().to_string()),
            owner_name: new_pet.owner_name.map(|o| o.trim().to_string()),
            created_at: now,
            updated_at: now,
        };

        self.store.put(pet.clone());
        tracing::debug!("Created pet {} ({})", pet.id, pet.name);

        Ok(pet)
    }

    pub fn list(&self, filters: &PetFilters) -> Vec<Pet> {
        self.store.list(filters)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Pet, PetError> {
        self.store.get(id).ok_or_else(|| PetError::not_found(id))
    }

    /// Merges the present fields of the payload over the stored record and
    /// refreshes `updated_at`. Absent fields keep their prior values
    /// exactly, including prior optional-field absence. Existence is
    /// checked before the payload is validated.
    pub fn update(&self, id: &str, input: &UpdatePetRequest) -> Result<Pet, PetError> {
        let existing = self.store.get(id).ok_or_else(|| PetError::not_found(id))?;
        let patch = validation::validate_update(input)?;

        let updated = Pet {
            id: existing.id,
            name: patch
                .name
                .map_or(existing.name, |n| n.trim().to_string()),
            kind: patch.kind.unwrap_or(existing.kind),
            age: patch.age.unwrap_or(existing.age),
            breed: match patch.breed {
                Some(b) => Some(b.trim().to_string()),
                None => existing.breed,
            },
            owner_name: match patch.owner_name {
                Some(o) => Some(o.trim().to_string()),
                None => existing.owner_name,
            },
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.store.put(updated.clone());
        tracing::debug!("Updated pet {}", updated.id);

        Ok(updated)
    }

    /// Removes the pet permanently. There is no recovery path.
    pub fn delete(&self, id: &str) -> Result<(), PetError> {
        if !self.store.exists(id) {
            return Err(PetError::not_found(id));
        }
        self.store.remove(id);
        tracing::debug!("Deleted pet {}", id);
        Ok(())
    }

    /// Diagnostic convenience; not used by any other component.
    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            total: self.store.count(),
        }
    }
}
