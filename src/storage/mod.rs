//! In-Memory Storage Module
//!
//! Holds the authoritative set of pet records for the lifetime of the
//! process.
//!
//! ## Core Concepts
//! - **Ownership**: the store is an explicitly constructed component passed
//!   by reference to the service at startup, never a hidden global, so
//!   isolated instances can coexist in tests.
//! - **Atomicity**: every mutation is a single map operation; a record
//!   either fully exists or is absent, even under the multi-threaded
//!   runtime.
//! - **Seeding**: fixture data is loaded through an explicit `seed()` step,
//!   decoupled from construction.

pub mod memory;

#[cfg(test)]
mod tests;
