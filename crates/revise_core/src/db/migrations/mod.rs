//! Versioned schema for the `revisions` table.
//!
//! Each entry is applied once, in order, and recorded in `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// `(version, sql)` pairs, strictly increasing by version.
const SCHEMA_STEPS: &[(u32, &str)] = &[(1, include_str!("0001_revisions.sql"))];

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |&(version, _)| version)
}

/// Reads the schema version stored in the database header.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(DbError::Configure)
}

/// Brings the schema to [`latest_version`] in one transaction.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` for databases from a newer build.
/// - `DbError::Migration` naming the step that failed; earlier steps of the
///   same batch are rolled back with it.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found = schema_version(conn)?;
    let latest = latest_version();
    if found > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: found,
            latest_supported: latest,
        });
    }

    let pending = &SCHEMA_STEPS[SCHEMA_STEPS.partition_point(|&(version, _)| version <= found)..];
    let Some(&(first, _)) = pending.first() else {
        return Ok(());
    };

    let tx = conn
        .transaction()
        .map_err(|source| DbError::Migration { version: first, source })?;
    for &(version, sql) in pending {
        tx.execute_batch(sql)
            .and_then(|()| tx.pragma_update(None, "user_version", version))
            .map_err(|source| DbError::Migration { version, source })?;
    }
    tx.commit()
        .map_err(|source| DbError::Migration { version: latest, source })?;

    info!("event=db_migrate module=db status=ok from_version={found} to_version={latest}");
    Ok(())
}
