//! Migration checksums
//!
//! The runner records the SHA-256 of each migration's SQL when it applies
//! it, and refuses to start when an embedded migration no longer matches
//! what the database recorded.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of a migration's SQL text
pub fn compute_checksum(sql: &str) -> String {
    hex::encode(Sha256::digest(sql.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::embedded::get_migrations;

    #[test]
    fn test_embedded_migrations_checksum_cleanly() {
        for migration in get_migrations() {
            let checksum = compute_checksum(migration.sql);
            assert_eq!(checksum.len(), 64, "migration {}", migration.id);
            // Recomputing yields the same fingerprint
            assert_eq!(checksum, compute_checksum(migration.sql));
        }
    }

    #[test]
    fn test_edited_sql_changes_the_checksum() {
        let migrations = get_migrations();
        let edited = format!("{}\n-- touched", migrations[0].sql);
        assert_ne!(compute_checksum(migrations[0].sql), compute_checksum(&edited));
    }
}
