//! Review-scheduling domain model.
//!
//! # Responsibility
//! - Define the revision record handed between generator, store and agenda.
//! - Define the opaque user key that owns a review set.
//!
//! # Invariants
//! - A `RevisionRecord` is immutable once created.
//! - A `UserId` is never empty.

pub mod revision;
pub mod user;
