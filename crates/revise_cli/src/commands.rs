//! Subcommand handlers.
//!
//! # Responsibility
//! - Turn one parsed subcommand into service calls and printed output.
//!
//! # Invariants
//! - Handlers write only to the given sink, so output is testable.
//! - `today` is supplied by the caller; handlers never read the clock.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Subcommand;
use revise_core::{format_review_date, parse_iso_date, Agenda, ReviewService, ReviewStore};
use std::io::Write;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List known users
    Users,
    /// Schedule reviews for a new topic
    Add {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        topic: String,
        /// Start date as YYYY-MM-DD; defaults to today
        #[arg(short, long, value_parser = parse_date_arg)]
        start: Option<NaiveDate>,
    },
    /// Show reviews due today or later
    Agenda {
        #[arg(short, long)]
        user: String,
        /// Reference date as YYYY-MM-DD; defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        today: Option<NaiveDate>,
        /// Print upcoming entries (record and rendered text) as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete every scheduled review of a user
    Clear {
        #[arg(short, long)]
        user: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

pub fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_iso_date(value).ok_or_else(|| format!("`{value}` is not a YYYY-MM-DD date"))
}

/// Executes `command` against `service`, writing user-facing text to `out`.
pub fn run<S: ReviewStore>(
    command: Command,
    service: &ReviewService<S>,
    today: NaiveDate,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Users => {
            for id in service.users().ids() {
                writeln!(out, "User {id}")?;
            }
        }
        Command::Add { user, topic, start } => {
            let records = service.add_topic(&user, &topic, start.unwrap_or(today))?;
            writeln!(out, "Scheduled {} reviews:", records.len())?;
            for record in &records {
                writeln!(
                    out,
                    "  {}  {}",
                    record.iso_date(),
                    format_review_date(record.date())
                )?;
            }
        }
        Command::Agenda {
            user,
            today: at,
            json,
        } => {
            let agenda = service.agenda(&user, at.unwrap_or(today))?;
            if json {
                serde_json::to_writer_pretty(&mut *out, agenda.lines())?;
                writeln!(out)?;
            } else {
                write_agenda(&agenda, out)?;
            }
        }
        Command::Clear { user, yes } => {
            if !yes {
                bail!("refusing to delete reviews of user `{user}` without --yes");
            }
            service.clear(&user)?;
            writeln!(out, "Cleared reviews of user {user}.")?;
        }
    }
    Ok(())
}

fn write_agenda(agenda: &Agenda, out: &mut impl Write) -> Result<()> {
    match agenda {
        Agenda::Empty => writeln!(out, "{agenda}")?,
        Agenda::Items(lines) => {
            for line in lines {
                writeln!(out, "- {}", line.text)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_date_arg, run, Command};
    use chrono::NaiveDate;
    use revise_core::db::open_db_in_memory;
    use revise_core::{ReviewService, SqliteReviewStore, UserDirectory};
    use rusqlite::Connection;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn service(conn: &Connection) -> ReviewService<SqliteReviewStore<'_>> {
        ReviewService::new(SqliteReviewStore::new(conn), UserDirectory::default())
    }

    fn run_to_string(
        command: Command,
        service: &ReviewService<SqliteReviewStore<'_>>,
        today: NaiveDate,
    ) -> String {
        let mut out = Vec::new();
        run(command, service, today, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn add(user: &str, topic: &str, start: Option<NaiveDate>) -> Command {
        Command::Add {
            user: user.to_string(),
            topic: topic.to_string(),
            start,
        }
    }

    fn agenda(user: &str, json: bool) -> Command {
        Command::Agenda {
            user: user.to_string(),
            today: None,
            json,
        }
    }

    #[test]
    fn date_arg_requires_iso_form() {
        assert!(parse_date_arg("2025-07-19").is_ok());
        assert!(parse_date_arg("19/07/2025").is_err());
    }

    #[test]
    fn users_lists_each_directory_entry() {
        let conn = open_db_in_memory().unwrap();
        let output = run_to_string(Command::Users, &service(&conn), ymd(2025, 7, 19));

        assert_eq!(output, "User 1\nUser 2\nUser 3\nUser 4\nUser 5\n");
    }

    #[test]
    fn add_without_start_schedules_from_today() {
        let conn = open_db_in_memory().unwrap();
        let output = run_to_string(
            add("1", "Functions in JS", None),
            &service(&conn),
            ymd(2025, 7, 19),
        );

        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Scheduled 5 reviews:"));
        assert_eq!(lines.next(), Some("  2025-07-26  26th Jul 2025"));
        assert_eq!(output.lines().count(), 6);
    }

    #[test]
    fn add_with_start_ignores_today() {
        let conn = open_db_in_memory().unwrap();
        let output = run_to_string(
            add("1", "Closures", Some(ymd(2025, 1, 31))),
            &service(&conn),
            ymd(2030, 1, 1),
        );

        assert!(output.contains("  2025-02-28  28th Feb 2025"));
    }

    #[test]
    fn agenda_prints_dashed_lines_or_no_agenda_message() {
        let conn = open_db_in_memory().unwrap();
        let service = service(&conn);
        let today = ymd(2025, 8, 19);

        assert_eq!(
            run_to_string(agenda("2", false), &service, today),
            "No agenda for this user.\n"
        );

        run_to_string(add("2", "Functions in JS", Some(ymd(2025, 7, 19))), &service, today);
        let output = run_to_string(agenda("2", false), &service, today);
        assert_eq!(
            output,
            "- Functions in JS, 19th Aug 2025\n\
             - Functions in JS, 19th Oct 2025\n\
             - Functions in JS, 19th Jan 2026\n\
             - Functions in JS, 19th Jul 2026\n"
        );
    }

    #[test]
    fn agenda_json_emits_record_and_text() {
        let conn = open_db_in_memory().unwrap();
        let service = service(&conn);
        let today = ymd(2026, 7, 1);
        run_to_string(add("3", "Traits", Some(ymd(2025, 7, 19))), &service, today);

        let output = run_to_string(agenda("3", true), &service, today);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "record": { "topic": "Traits", "date": "2026-07-19" },
                "text": "Traits, 19th Jul 2026"
            }])
        );
    }

    #[test]
    fn agenda_json_for_empty_set_is_empty_array() {
        let conn = open_db_in_memory().unwrap();
        let output = run_to_string(agenda("4", true), &service(&conn), ymd(2025, 1, 1));

        assert_eq!(output.trim(), "[]");
    }

    #[test]
    fn clear_requires_confirmation() {
        let conn = open_db_in_memory().unwrap();
        let service = service(&conn);
        let today = ymd(2025, 7, 19);
        run_to_string(add("5", "Lifetimes", None), &service, today);

        let mut out = Vec::new();
        let refused = Command::Clear {
            user: "5".to_string(),
            yes: false,
        };
        let err = run(refused, &service, today, &mut out).unwrap_err();
        assert!(err.to_string().contains("--yes"));
        assert!(out.is_empty());
        assert_eq!(service.reviews("5").unwrap().len(), 5);

        let confirmed = Command::Clear {
            user: "5".to_string(),
            yes: true,
        };
        let output = run_to_string(confirmed, &service, today);
        assert_eq!(output, "Cleared reviews of user 5.\n");
        assert!(service.reviews("5").unwrap().is_empty());
    }

    #[test]
    fn unknown_user_is_reported() {
        let conn = open_db_in_memory().unwrap();
        let mut out = Vec::new();

        let err = run(agenda("9", false), &service(&conn), ymd(2025, 1, 1), &mut out).unwrap_err();
        assert!(err.to_string().contains("unknown user"));
    }
}
