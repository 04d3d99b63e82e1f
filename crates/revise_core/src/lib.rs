//! Core domain logic for Revise, a fixed-interval spaced-repetition planner.
//! This crate is the single source of truth for scheduling and agenda rules.

pub mod agenda;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;
pub mod users;

pub use agenda::{
    build_agenda, build_agenda_from_iso, format_review_date, ordinal_day, Agenda, AgendaError,
    AgendaLine, NO_AGENDA_MESSAGE,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::revision::{parse_iso_date, RevisionRecord, ISO_DATE_FORMAT};
pub use model::user::{UserId, UserIdError};
pub use repo::review_repo::{RepoError, RepoResult, ReviewStore, SqliteReviewStore};
pub use schedule::{
    generate_revisions, generate_revisions_at, ReviewInterval, ScheduleError, REVISION_SCHEDULE,
};
pub use service::review_service::{ReviewService, ReviewServiceError, ReviewServiceResult};
pub use users::{UserDirectory, DEFAULT_USER_IDS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
