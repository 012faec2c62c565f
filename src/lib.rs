//! QA Pet API Library
//!
//! This library crate defines the core modules of a small REST API for
//! managing pet records, built as a practice target for API/QA testing.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`pets`**: The domain layer. Contains the `Pet` entity, the boundary
//!   DTOs, the field-level validation rules, and the `PetService` holding
//!   the business rules (id/timestamp generation, partial-update merges).
//! - **`storage`**: The state layer. An in-memory key-value store
//!   (`PetStore`) holding the authoritative set of pets for the lifetime of
//!   the process, seedable with deterministic fixture records.
//! - **`api`**: The HTTP layer. Axum handlers, the router, the standardized
//!   error-to-response translation and the API documentation endpoints.

pub mod api;
pub mod pets;
pub mod storage;
