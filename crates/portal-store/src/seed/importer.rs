//! Seed importer orchestration
//!
//! Imports a seed file into SQLite within one transaction, with provenance
//! events and an idempotency guard on the seed digest

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, seed_validation, Result};
use crate::repo::SqliteRepo;
use crate::seed::{compute_seed_digest, parse_seed_file, provenance};
use portal_core::model::{FaqEntry, FestivalEvent, Member, Role};
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

/// Import a seed file into the database
///
/// This is the main entry point for seed import. It:
/// 1. Parses and validates the seed YAML
/// 2. Computes the seed digest
/// 3. Skips the import if this digest already completed (idempotent)
/// 4. Writes members, FAQs and festivals within a transaction
/// 5. Emits provenance events
///
/// Returns the seed digest on success
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<String> {
    let seed = parse_seed_file(path)?;
    let seed_digest = compute_seed_digest(&seed);

    if provenance::already_imported(conn, &seed_digest)? {
        info!(seed_digest = %seed_digest, "seed already imported, skipping");
        return Ok(seed_digest);
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    provenance::emit_started(&tx, &seed_digest)?;

    for seed_member in &seed.members {
        // Role strings were validated at parse time
        let role: Role = seed_member
            .role
            .parse()
            .map_err(|_| seed_validation(&format!("Unknown role: {}", seed_member.role)))?;

        let mut member = Member::new(
            seed_member.id.clone(), // Use seed ID directly for stable identity
            seed_member.name.clone(),
            seed_member.email.clone(),
            role,
        );
        member.department = seed_member.department.clone();
        member.phone = seed_member.phone.clone();

        SqliteRepo::persist_member(&tx, &member)?;
        provenance::emit_applied(&tx, &seed_digest, &member.id)?;
    }

    for seed_faq in &seed.faqs {
        let mut faq = FaqEntry::new(
            seed_faq.id.clone(),
            seed_faq.question.clone(),
            seed_faq.answer.clone(),
            seed_faq.category.clone(),
        );
        faq.module = seed_faq.module.clone();
        // The matcher compares lowercase; normalize once at import
        faq.keywords = seed_faq.keywords.iter().map(|k| k.to_lowercase()).collect();

        SqliteRepo::persist_faq(&tx, &faq)?;
        provenance::emit_applied(&tx, &seed_digest, &faq.id)?;
    }

    for seed_festival in &seed.festivals {
        let mut event = FestivalEvent::new(
            seed_festival.id.clone(),
            seed_festival.name.clone(),
            seed_festival.date,
        );
        event.description = seed_festival.description.clone();
        event.category = seed_festival.category.clone();
        event.marketing_ideas = seed_festival.marketing_ideas.clone();

        SqliteRepo::persist_festival(&tx, &event)?;
        provenance::emit_applied(&tx, &seed_digest, &event.id)?;
    }

    provenance::emit_completed(&tx, &seed_digest)?;

    tx.commit().map_err(from_rusqlite)?;

    info!(
        seed_digest = %seed_digest,
        members = seed.members.len(),
        faqs = seed.faqs.len(),
        festivals = seed.festivals.len(),
        "seed import complete"
    );

    Ok(seed_digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations;
    use crate::repo::load_store;
    use std::path::PathBuf;

    fn setup_test_db() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    #[test]
    fn test_import_portal_seed() {
        let mut conn = setup_test_db();
        let path = fixtures_dir().join("seed_portal.yaml");

        let result = import_seed(&path, &mut conn);
        assert!(result.is_ok(), "Import should succeed: {:?}", result.err());

        let store = load_store(&conn).unwrap();
        assert_eq!(store.list_members().len(), 2);
        assert_eq!(store.list_faqs().len(), 2);
        assert_eq!(store.list_festivals().len(), 2);

        let diwali = store.get_festival("festival:diwali").unwrap();
        assert_eq!(diwali.category.as_deref(), Some("religious"));

        let member = store.get_member("member:asha").unwrap();
        assert!(member.is_admin());
        assert_eq!(member.department.as_deref(), Some("Management"));

        // Provenance events recorded
        let prov_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM seed_events", [], |row| row.get(0))
            .unwrap();
        assert!(
            prov_count >= 8,
            "Should have started, applied per entity, completed events"
        );
    }

    #[test]
    fn test_import_is_idempotent() {
        let mut conn = setup_test_db();
        let path = fixtures_dir().join("seed_portal.yaml");

        let digest1 = import_seed(&path, &mut conn).unwrap();
        let digest2 = import_seed(&path, &mut conn).unwrap();
        assert_eq!(digest1, digest2);

        let store = load_store(&conn).unwrap();
        assert_eq!(store.list_members().len(), 2, "Re-import should not duplicate");

        // Only one completed event
        let completed: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM seed_events WHERE event = 'completed'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(completed, 1);
    }

    #[test]
    fn test_import_failure_rolls_back() {
        let mut conn = setup_test_db();

        let invalid_yaml = r#"
schema_version: 0
portal:
  name: bad-seed
members:
  - id: member:dup
    name: "First"
    email: first@example.com
    role: member
  - id: member:dup
    name: "Second"
    email: second@example.com
    role: member
"#;
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("seed_invalid.yaml");
        std::fs::write(&path, invalid_yaml).unwrap();

        let result = import_seed(&path, &mut conn);
        assert!(result.is_err(), "Import should fail on duplicate IDs");

        let member_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM members", [], |row| row.get(0))
            .unwrap();
        assert_eq!(member_count, 0, "No members should be written");

        let prov_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM seed_events", [], |row| row.get(0))
            .unwrap();
        assert_eq!(prov_count, 0, "No provenance events should be written");
    }
}
