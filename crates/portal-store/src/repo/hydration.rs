//! Hydration layer - loads documents from SQLite into a Store
//!
//! Deserializes each collection's JSON bodies back into domain models.
//! A row whose body no longer deserializes is a hard error, not a skip;
//! silently dropping documents would corrupt analytics and invoices.

#![allow(clippy::result_large_err)]

use crate::errors::{corrupt_document, from_rusqlite, Result};
use portal_core::Store;
use rusqlite::Connection;
use serde::de::DeserializeOwned;

fn load_collection<T, F>(conn: &Connection, table: &str, mut insert: F) -> Result<()>
where
    T: DeserializeOwned,
    F: FnMut(T),
{
    let mut stmt = conn
        .prepare(&format!("SELECT id, body FROM {table} ORDER BY id"))
        .map_err(from_rusqlite)?;

    let rows: Vec<(String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    for (id, body) in rows {
        let doc: T = serde_json::from_str(&body)
            .map_err(|e| corrupt_document(table, &id, &e.to_string()))?;
        insert(doc);
    }

    Ok(())
}

/// Load the complete Store from the database
///
/// Rows are read in deterministic order (sorted by id); ordering guarantees
/// visible to callers come from the Store's own list methods.
pub fn load_store(conn: &Connection) -> Result<Store> {
    let mut store = Store::new();

    load_collection(conn, "members", |doc| store.insert_member(doc))?;
    load_collection(conn, "clients", |doc| store.insert_client(doc))?;
    load_collection(conn, "projects", |doc| store.insert_project(doc))?;
    load_collection(conn, "tasks", |doc| store.insert_task(doc))?;
    load_collection(conn, "invoices", |doc| store.insert_invoice(doc))?;
    load_collection(conn, "campaigns", |doc| store.insert_campaign(doc))?;
    load_collection(conn, "festivals", |doc| store.insert_festival(doc))?;
    load_collection(conn, "chatbot_faqs", |doc| store.insert_faq(doc))?;
    load_collection(conn, "chat_history", |doc| store.insert_chat_record(doc))?;
    load_collection(conn, "notifications", |doc| store.insert_notification(doc))?;
    load_collection(conn, "salaries", |doc| store.insert_salary(doc))?;

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations;
    use crate::repo::SqliteRepo;
    use portal_core::model::{Client, Member, Role};

    fn setup_test_db() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_load_store_empty() {
        let conn = setup_test_db();
        let store = load_store(&conn).unwrap();
        assert!(store.list_members().is_empty());
        assert!(store.list_clients().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let mut conn = setup_test_db();

        let mut store = Store::new();
        store.insert_member(Member::new(
            "member-1".to_string(),
            "Asha Rao".to_string(),
            "asha@example.com".to_string(),
            Role::Teamlead,
        ));
        store.insert_client(Client::new(
            "client-1".to_string(),
            "Meera Traders".to_string(),
            "accounts@meeratraders.in".to_string(),
        ));
        SqliteRepo::persist_store(&mut conn, &store).unwrap();

        let loaded = load_store(&conn).unwrap();
        let member = loaded.get_member("member-1").unwrap();
        assert_eq!(member.name, "Asha Rao");
        assert_eq!(member.role, Role::Teamlead);
        let client = loaded.get_client("client-1").unwrap();
        assert_eq!(client.company, None);
    }

    #[test]
    fn test_corrupt_body_is_an_error() {
        let conn = setup_test_db();
        conn.execute(
            "INSERT INTO clients (id, body, created_at) VALUES ('client-x', 'not json', 0)",
            [],
        )
        .unwrap();

        let result = load_store(&conn);
        assert!(result.is_err());
    }
}
