//! Revision record model.
//!
//! # Responsibility
//! - Carry one scheduled review: the topic and the calendar day it is due.
//!
//! # Invariants
//! - `date` has no time-of-day or timezone component.
//! - Fields are private and only set on construction; records are never
//!   mutated after they leave the generator.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// One scheduled review of a topic.
///
/// Serialized as `{"topic": "...", "date": "YYYY-MM-DD"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevisionRecord {
    topic: String,
    date: NaiveDate,
}

impl RevisionRecord {
    /// Creates a record. The topic is stored verbatim.
    pub fn new(topic: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            topic: topic.into(),
            date,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the due date as an ISO-8601 calendar date (`YYYY-MM-DD`).
    pub fn iso_date(&self) -> String {
        self.date.format(ISO_DATE_FORMAT).to_string()
    }
}

/// `strftime` pattern for the only serialized date form used by the crate.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Years that fit the four-digit `YYYY-MM-DD` form.
pub const ISO_YEAR_RANGE: RangeInclusive<i32> = 0..=9999;

/// Whether `date` renders as plain `YYYY-MM-DD` and parses back unchanged.
pub fn has_iso_form(date: NaiveDate) -> bool {
    ISO_YEAR_RANGE.contains(&date.year())
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}
