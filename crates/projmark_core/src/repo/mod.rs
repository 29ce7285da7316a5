//! Repository layer over the project table.
//!
//! # Responsibility
//! - Define the data access contract used by services.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Repository APIs distinguish semantic errors (`NotFound`) from storage
//!   transport errors.

pub mod project_repo;
