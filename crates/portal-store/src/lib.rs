//! Portal Store - SQLite persistence for the portal document store
//!
//! Provides:
//! - SQLite schema with a migrations framework
//! - Repository layer persisting the in-memory Store as JSON documents
//! - Hydration layer loading documents back into a Store
//! - Seed parser and importer for bootstrap data (members, FAQs, festivals)

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::{load_store, SqliteRepo};
