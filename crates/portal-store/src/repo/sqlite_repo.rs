//! SQLite repository implementation
//!
//! Persists portal documents from the in-memory Store to SQLite. Each
//! document is written as serialized JSON in the `body` column; the
//! in-memory model remains the source of truth for structure.

#![allow(clippy::result_large_err)]

use crate::errors::{corrupt_document, from_rusqlite, Result};
use portal_core::model::{
    Campaign, ChatRecord, Client, FaqEntry, FestivalEvent, Invoice, Member, Notification, Project,
    SalaryRecord, Task,
};
use portal_core::Store;
use rusqlite::Connection;
use serde::Serialize;

/// Tables that carry an `updated_at` column
const DOCUMENT_TABLES: &[&str] = &[
    "members",
    "clients",
    "projects",
    "tasks",
    "invoices",
    "campaigns",
    "festivals",
    "chatbot_faqs",
];

/// Append-only tables scoped to a member
const MEMBER_SCOPED_TABLES: &[&str] = &["chat_history", "notifications", "salaries"];

fn to_body<T: Serialize>(collection: &str, id: &str, value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| corrupt_document(collection, id, &e.to_string()))
}

/// SQLite repository for portal documents
pub struct SqliteRepo;

impl SqliteRepo {
    fn upsert_doc(
        conn: &Connection,
        table: &str,
        id: &str,
        body: &str,
        created_at: i64,
        updated_at: Option<i64>,
    ) -> Result<()> {
        let sql = format!(
            "INSERT INTO {table} (id, body, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at"
        );
        conn.execute(&sql, rusqlite::params![id, body, created_at, updated_at])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    fn upsert_member_scoped(
        conn: &Connection,
        table: &str,
        id: &str,
        member_id: &str,
        body: &str,
        created_at: i64,
    ) -> Result<()> {
        let sql = format!(
            "INSERT INTO {table} (id, member_id, body, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                member_id = excluded.member_id,
                body = excluded.body"
        );
        conn.execute(&sql, rusqlite::params![id, member_id, body, created_at])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Persist a Member to the database
    pub fn persist_member(conn: &Connection, member: &Member) -> Result<()> {
        let body = to_body("members", &member.id, member)?;
        Self::upsert_doc(
            conn,
            "members",
            &member.id,
            &body,
            member.created_at.timestamp(),
            Some(member.updated_at.timestamp()),
        )
    }

    /// Persist a Client to the database
    pub fn persist_client(conn: &Connection, client: &Client) -> Result<()> {
        let body = to_body("clients", &client.id, client)?;
        Self::upsert_doc(
            conn,
            "clients",
            &client.id,
            &body,
            client.created_at.timestamp(),
            Some(client.updated_at.timestamp()),
        )
    }

    /// Persist a Project to the database
    pub fn persist_project(conn: &Connection, project: &Project) -> Result<()> {
        let body = to_body("projects", &project.id, project)?;
        Self::upsert_doc(
            conn,
            "projects",
            &project.id,
            &body,
            project.created_at.timestamp(),
            Some(project.updated_at.timestamp()),
        )
    }

    /// Persist a Task to the database
    pub fn persist_task(conn: &Connection, task: &Task) -> Result<()> {
        let body = to_body("tasks", &task.id, task)?;
        Self::upsert_doc(
            conn,
            "tasks",
            &task.id,
            &body,
            task.created_at.timestamp(),
            Some(task.updated_at.timestamp()),
        )
    }

    /// Persist an Invoice to the database
    pub fn persist_invoice(conn: &Connection, invoice: &Invoice) -> Result<()> {
        let body = to_body("invoices", &invoice.id, invoice)?;
        Self::upsert_doc(
            conn,
            "invoices",
            &invoice.id,
            &body,
            invoice.created_at.timestamp(),
            Some(invoice.updated_at.timestamp()),
        )
    }

    /// Persist a Campaign to the database
    pub fn persist_campaign(conn: &Connection, campaign: &Campaign) -> Result<()> {
        let body = to_body("campaigns", &campaign.id, campaign)?;
        Self::upsert_doc(
            conn,
            "campaigns",
            &campaign.id,
            &body,
            campaign.created_at.timestamp(),
            Some(campaign.updated_at.timestamp()),
        )
    }

    /// Persist a FestivalEvent to the database
    pub fn persist_festival(conn: &Connection, event: &FestivalEvent) -> Result<()> {
        let body = to_body("festivals", &event.id, event)?;
        Self::upsert_doc(
            conn,
            "festivals",
            &event.id,
            &body,
            event.created_at.timestamp(),
            Some(event.updated_at.timestamp()),
        )
    }

    /// Persist a FaqEntry to the database
    pub fn persist_faq(conn: &Connection, faq: &FaqEntry) -> Result<()> {
        let body = to_body("chatbot_faqs", &faq.id, faq)?;
        Self::upsert_doc(
            conn,
            "chatbot_faqs",
            &faq.id,
            &body,
            faq.created_at.timestamp(),
            Some(faq.updated_at.timestamp()),
        )
    }

    /// Persist a ChatRecord to the database
    pub fn persist_chat_record(conn: &Connection, record: &ChatRecord) -> Result<()> {
        let body = to_body("chat_history", &record.id, record)?;
        Self::upsert_member_scoped(
            conn,
            "chat_history",
            &record.id,
            &record.member_id,
            &body,
            record.created_at.timestamp(),
        )
    }

    /// Persist a Notification to the database
    pub fn persist_notification(conn: &Connection, notification: &Notification) -> Result<()> {
        let body = to_body("notifications", &notification.id, notification)?;
        Self::upsert_member_scoped(
            conn,
            "notifications",
            &notification.id,
            &notification.member_id,
            &body,
            notification.created_at.timestamp(),
        )
    }

    /// Persist a SalaryRecord to the database
    pub fn persist_salary(conn: &Connection, record: &SalaryRecord) -> Result<()> {
        let body = to_body("salaries", &record.id, record)?;
        Self::upsert_member_scoped(
            conn,
            "salaries",
            &record.id,
            &record.member_id,
            &body,
            record.created_at.timestamp(),
        )
    }

    /// Persist the complete Store in one transaction
    ///
    /// Deletes and rewrites every collection table so that documents removed
    /// from the Store are also removed from the database. The portal's data
    /// volumes (an internal team) make the full rewrite cheap enough that
    /// per-document change tracking isn't worth the bookkeeping.
    pub fn persist_store(conn: &mut Connection, store: &Store) -> Result<()> {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        for table in DOCUMENT_TABLES.iter().chain(MEMBER_SCOPED_TABLES) {
            tx.execute(&format!("DELETE FROM {table}"), [])
                .map_err(from_rusqlite)?;
        }

        for member in store.list_members() {
            Self::persist_member(&tx, member)?;
        }
        for client in store.list_clients() {
            Self::persist_client(&tx, client)?;
        }
        for project in store.list_projects() {
            Self::persist_project(&tx, project)?;
        }
        for task in store.list_tasks() {
            Self::persist_task(&tx, task)?;
        }
        for invoice in store.list_invoices() {
            Self::persist_invoice(&tx, invoice)?;
        }
        for campaign in store.list_campaigns() {
            Self::persist_campaign(&tx, campaign)?;
        }
        for event in store.list_festivals() {
            Self::persist_festival(&tx, event)?;
        }
        for faq in store.list_faqs() {
            Self::persist_faq(&tx, faq)?;
        }
        for record in store.list_chat_records() {
            Self::persist_chat_record(&tx, record)?;
        }
        for notification in store.list_notifications() {
            Self::persist_notification(&tx, notification)?;
        }
        for record in store.list_salaries() {
            Self::persist_salary(&tx, record)?;
        }

        tx.commit().map_err(from_rusqlite)?;
        Ok(())
    }

    /// Row count per collection table, in schema order
    pub fn collection_counts(conn: &Connection) -> Result<Vec<(&'static str, i64)>> {
        let mut counts = Vec::new();
        for table in DOCUMENT_TABLES.iter().chain(MEMBER_SCOPED_TABLES) {
            let count: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })
                .map_err(from_rusqlite)?;
            counts.push((*table, count));
        }
        Ok(counts)
    }
}
