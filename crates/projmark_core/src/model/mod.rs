//! Domain model for bookmarked projects.
//!
//! # Invariants
//! - Every stored project has an id, a name and a path.
//! - Ids are assigned by the store and never reused.

pub mod project;
