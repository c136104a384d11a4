//! Seed import provenance
//!
//! Records import lifecycle events in the seed_events table so a database
//! can answer "which seed produced this data, and did it finish?"

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

fn emit(conn: &Connection, seed_digest: &str, event: &str, entity_id: Option<&str>) -> Result<()> {
    let now = chrono::Utc::now().timestamp();
    conn.execute(
        "INSERT INTO seed_events (seed_digest, event, entity_id, occurred_at)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![seed_digest, event, entity_id, now],
    )
    .map_err(from_rusqlite)?;
    Ok(())
}

/// Record that a seed import has started
pub fn emit_started(conn: &Connection, seed_digest: &str) -> Result<()> {
    emit(conn, seed_digest, "started", None)
}

/// Record that one seed entity was applied
pub fn emit_applied(conn: &Connection, seed_digest: &str, entity_id: &str) -> Result<()> {
    emit(conn, seed_digest, "applied", Some(entity_id))
}

/// Record that a seed import completed
pub fn emit_completed(conn: &Connection, seed_digest: &str) -> Result<()> {
    emit(conn, seed_digest, "completed", None)
}

/// Whether this seed digest has a completed import on record
pub fn already_imported(conn: &Connection, seed_digest: &str) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM seed_events WHERE seed_digest = ?1 AND event = 'completed'",
            [seed_digest],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)?;
    Ok(count > 0)
}
