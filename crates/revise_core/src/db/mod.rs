//! Review database bootstrap.
//!
//! # Responsibility
//! - Open the SQLite file (or an in-memory database) holding review sets.
//! - Bring the `revisions` schema up to date before any store touches it.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - A connection is only handed out after every migration committed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while preparing the review database.
#[derive(Debug)]
pub enum DbError {
    /// The database could not be opened or created at `target`.
    Open {
        target: String,
        source: rusqlite::Error,
    },
    /// Connection pragmas could not be read or applied.
    Configure(rusqlite::Error),
    /// Migration `version` failed; the whole pending batch was rolled back.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The file was written by a build with a newer `revisions` schema.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { target, source } => {
                write!(f, "cannot open review database `{target}`: {source}")
            }
            Self::Configure(source) => write!(f, "cannot configure review database: {source}"),
            Self::Migration { version, source } => {
                write!(f, "review schema migration {version} failed: {source}")
            }
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "review database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Migration { source, .. } => Some(source),
            Self::Configure(source) => Some(source),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}
