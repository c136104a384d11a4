pub mod seed;
pub mod serve;
pub mod stats;

use std::path::Path;

use rusqlite::Connection;

/// Open the database at `path` with migrations applied
pub fn open_database(path: &Path) -> Result<Connection, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut conn = portal_store::db::open(path)?;
    portal_store::db::configure(&conn)?;
    portal_store::migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}
