//! Upcoming-review agenda.
//!
//! # Responsibility
//! - Select reviews due today or later and order them by date.
//! - Render each review as a human-readable agenda line.
//!
//! # Invariants
//! - Past reviews never appear in an agenda.
//! - Reviews sharing a date keep their stored order.
//! - An agenda with nothing upcoming is `Agenda::Empty`, never an empty list.

mod format;

pub use format::{format_review_date, month_abbreviation, ordinal_day};

use crate::model::revision::{parse_iso_date, RevisionRecord};
use chrono::NaiveDate;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Text shown when a user has nothing scheduled from today onward.
pub const NO_AGENDA_MESSAGE: &str = "No agenda for this user.";

/// One rendered agenda entry together with the record it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaLine {
    pub record: RevisionRecord,
    /// `"<topic>, <ordinal-day> <Mon> <year>"`.
    pub text: String,
}

/// Result of agenda building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Agenda {
    /// Nothing is due today or later.
    Empty,
    /// Upcoming reviews, earliest first. Never empty.
    Items(Vec<AgendaLine>),
}

impl Agenda {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Rendered lines; empty slice for `Agenda::Empty`.
    pub fn lines(&self) -> &[AgendaLine] {
        match self {
            Self::Empty => &[],
            Self::Items(lines) => lines,
        }
    }
}

impl Display for Agenda {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str(NO_AGENDA_MESSAGE),
            Self::Items(lines) => {
                for (index, line) in lines.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    f.write_str(&line.text)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgendaError {
    InvalidDate(String),
}

impl Display for AgendaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => {
                write!(f, "invalid calendar date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for AgendaError {}

/// Builds the agenda of reviews due on or after `today`.
pub fn build_agenda(records: &[RevisionRecord], today: NaiveDate) -> Agenda {
    let mut upcoming: Vec<&RevisionRecord> = records
        .iter()
        .filter(|record| record.date() >= today)
        .collect();
    // `sort_by_key` is stable, so same-day reviews keep insertion order.
    upcoming.sort_by_key(|record| record.date());

    if upcoming.is_empty() {
        return Agenda::Empty;
    }

    Agenda::Items(
        upcoming
            .into_iter()
            .map(|record| AgendaLine {
                text: format_agenda_line(record),
                record: record.clone(),
            })
            .collect(),
    )
}

/// Same as [`build_agenda`], with `today` given as `YYYY-MM-DD`.
///
/// # Errors
/// - `AgendaError::InvalidDate` when `today` is not a calendar date.
pub fn build_agenda_from_iso(
    records: &[RevisionRecord],
    today: &str,
) -> Result<Agenda, AgendaError> {
    let today =
        parse_iso_date(today).ok_or_else(|| AgendaError::InvalidDate(today.to_string()))?;
    Ok(build_agenda(records, today))
}

fn format_agenda_line(record: &RevisionRecord) -> String {
    format!("{}, {}", record.topic(), format_review_date(record.date()))
}
