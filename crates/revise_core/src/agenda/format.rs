//! Human-readable date rendering for agenda lines.

use chrono::{Datelike, NaiveDate};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Renders a day-of-month with its English ordinal suffix (`1st`, `12th`, `23rd`).
///
/// 11, 12 and 13 take `th` before the last-digit rule is consulted.
pub fn ordinal_day(day: u32) -> String {
    let suffix = match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{day}{suffix}")
}

/// Three-letter English month name for a 1-based month number.
///
/// Independent of the process locale.
pub fn month_abbreviation(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_ABBREVIATIONS.get(index as usize))
        .copied()
        .unwrap_or("???")
}

/// Renders `date` as `<ordinal-day> <Mon> <year>`, e.g. `26th Jul 2025`.
pub fn format_review_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        ordinal_day(date.day()),
        month_abbreviation(date.month()),
        date.year()
    )
}
