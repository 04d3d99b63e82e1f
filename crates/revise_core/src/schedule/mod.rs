//! Revision-date generation.
//!
//! # Responsibility
//! - Turn one topic and start date into the fixed five-step review plan.
//!
//! # Invariants
//! - Output order always follows `REVISION_SCHEDULE`.
//! - Month steps clamp to the last valid day of the target month.
//! - Time-of-day and timezone never leak into generated dates.

mod interval;

pub use interval::{
    generate_revisions, generate_revisions_at, ReviewInterval, ScheduleError, ScheduleResult,
    REVISION_SCHEDULE,
};
