//! Review-set store contract and SQLite implementation.
//!
//! # Responsibility
//! - Append, read back and clear the review set of one user.
//!
//! # Invariants
//! - `get` returns records in the order they were `put`.
//! - A single `put` is atomic: all records land or none do.
//! - Stored dates are ISO `YYYY-MM-DD` text; other dates are refused on `put`.

use crate::model::revision::{has_iso_form, parse_iso_date, RevisionRecord};
use crate::model::user::UserId;
use chrono::NaiveDate;
use log::{debug, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for review-set persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Sqlite(rusqlite::Error),
    /// A record's date has no `YYYY-MM-DD` form and would not read back.
    UnstorableDate(NaiveDate),
    /// A stored row does not decode into a `RevisionRecord`.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnstorableDate(date) => {
                write!(f, "review date {date} cannot be stored as YYYY-MM-DD")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted revision data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnstorableDate(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Per-user review-set store.
pub trait ReviewStore {
    /// Appends `records` to the user's set, creating it on first write.
    fn put(&self, user: &UserId, records: &[RevisionRecord]) -> RepoResult<()>;
    /// Reads the user's set; `None` when nothing is stored.
    fn get(&self, user: &UserId) -> RepoResult<Option<Vec<RevisionRecord>>>;
    /// Removes the user's whole set. Clearing an absent set is a no-op.
    fn clear(&self, user: &UserId) -> RepoResult<()>;
}

/// SQLite-backed review store over the `revisions` table.
pub struct SqliteReviewStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReviewStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ReviewStore for SqliteReviewStore<'_> {
    fn put(&self, user: &UserId, records: &[RevisionRecord]) -> RepoResult<()> {
        if records.is_empty() {
            return Ok(());
        }
        if let Some(record) = records.iter().find(|record| !has_iso_form(record.date())) {
            return Err(RepoError::UnstorableDate(record.date()));
        }

        // `unchecked_transaction` because the store only holds `&Connection`.
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO revisions (user_id, topic, review_date) VALUES (?1, ?2, ?3);",
            )?;
            for record in records {
                stmt.execute(params![user.as_str(), record.topic(), record.iso_date()])?;
            }
        }
        tx.commit()?;

        info!(
            "event=revisions_put module=repo status=ok user_id={} count={}",
            user,
            records.len()
        );
        Ok(())
    }

    fn get(&self, user: &UserId) -> RepoResult<Option<Vec<RevisionRecord>>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT topic, review_date
             FROM revisions
             WHERE user_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([user.as_str()])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_revision_row(row)?);
        }

        debug!(
            "event=revisions_get module=repo status=ok user_id={} count={}",
            user,
            records.len()
        );
        if records.is_empty() {
            return Ok(None);
        }
        Ok(Some(records))
    }

    fn clear(&self, user: &UserId) -> RepoResult<()> {
        let removed = self
            .conn
            .execute("DELETE FROM revisions WHERE user_id = ?1;", [user.as_str()])?;

        info!(
            "event=revisions_clear module=repo status=ok user_id={} removed={}",
            user, removed
        );
        Ok(())
    }
}

fn parse_revision_row(row: &Row<'_>) -> RepoResult<RevisionRecord> {
    let topic: String = row.get("topic")?;
    let date_text: String = row.get("review_date")?;
    let date = parse_iso_date(&date_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid review date `{date_text}` in revisions.review_date"
        ))
    })?;
    Ok(RevisionRecord::new(topic, date))
}
