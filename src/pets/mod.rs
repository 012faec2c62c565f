//! Pet Domain Module
//!
//! Everything the API knows about pets lives here.
//!
//! ## Submodules
//! - **`types`**: The `Pet` entity, the permissive boundary DTOs and their
//!   validated counterparts, listing filters.
//! - **`validation`**: Pure shape/range checks on incoming payloads,
//!   short-circuiting on the first violation.
//! - **`service`**: `PetService`, the single owner of business rules
//!   (id/timestamp generation, trimming, partial-update merging).

pub mod service;
pub mod types;
pub mod validation;
