//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate user checks, scheduling, persistence and agenda building.
//! - Keep the presentation layer decoupled from storage details.

pub mod review_service;
