//! Fixed review intervals and the generator built on them.

use crate::model::revision::{has_iso_form, RevisionRecord};
use chrono::{DateTime, Days, Months, NaiveDate, TimeZone};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Offset of one review from the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewInterval {
    Days(u32),
    Months(u32),
}

/// Review plan applied to every new topic: 1 week, 1, 3, 6 and 12 months.
pub const REVISION_SCHEDULE: [ReviewInterval; 5] = [
    ReviewInterval::Days(7),
    ReviewInterval::Months(1),
    ReviewInterval::Months(3),
    ReviewInterval::Months(6),
    ReviewInterval::Months(12),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The start date plus an offset leaves the four-digit year range that
    /// review dates are stored and exchanged in.
    DateOutOfRange {
        start: NaiveDate,
        interval: ReviewInterval,
    },
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateOutOfRange { start, interval } => {
                write!(f, "{interval} after {start} is out of calendar range")
            }
        }
    }
}

impl Error for ScheduleError {}

impl Display for ReviewInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days(days) => write!(f, "+{days} days"),
            Self::Months(months) => write!(f, "+{months} months"),
        }
    }
}

impl ReviewInterval {
    /// Applies this offset with calendar arithmetic.
    ///
    /// Day steps roll over months and years. Month steps keep the
    /// day-of-month when the target month has it, otherwise land on the
    /// target month's last day (Jan 31 + 1 month = Feb 28/29).
    ///
    /// Returns `None` when the result has no `YYYY-MM-DD` form (year outside
    /// 0..=9999) or leaves chrono's calendar.
    pub fn apply(self, start: NaiveDate) -> Option<NaiveDate> {
        let date = match self {
            Self::Days(days) => start.checked_add_days(Days::new(u64::from(days))),
            Self::Months(months) => start.checked_add_months(Months::new(months)),
        }?;
        has_iso_form(date).then_some(date)
    }
}

/// Builds the five review records for `topic` starting from `start_date`.
///
/// `topic` is copied verbatim into every record; trimming is the caller's job.
///
/// # Errors
/// - `ScheduleError::DateOutOfRange` when a review would fall after year 9999
///   (or before year 0).
pub fn generate_revisions(
    topic: &str,
    start_date: NaiveDate,
) -> ScheduleResult<Vec<RevisionRecord>> {
    REVISION_SCHEDULE
        .iter()
        .map(|&interval| {
            interval
                .apply(start_date)
                .map(|date| RevisionRecord::new(topic, date))
                .ok_or(ScheduleError::DateOutOfRange {
                    start: start_date,
                    interval,
                })
        })
        .collect()
}

/// Same as [`generate_revisions`], taking a zoned timestamp.
///
/// The calendar date is read in the timestamp's own timezone, so a local
/// midnight start never slides to the previous day.
pub fn generate_revisions_at<Tz: TimeZone>(
    topic: &str,
    start: &DateTime<Tz>,
) -> ScheduleResult<Vec<RevisionRecord>> {
    generate_revisions(topic, start.date_naive())
}
