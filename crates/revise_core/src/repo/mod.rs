//! Persistence contracts and SQLite implementations for review sets.
//!
//! # Responsibility
//! - Define the per-user store contract consumed by the service layer.
//! - Isolate SQL details from scheduling and agenda logic.
//!
//! # Invariants
//! - Read paths reject malformed persisted rows instead of masking them.
//! - "No review set" and "empty review set" are both reported as `None`.

pub mod review_repo;
