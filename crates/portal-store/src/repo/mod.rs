//! Repository layer
//!
//! Bridges the in-memory Store to SQLite persistence

mod hydration;
mod sqlite_repo;

pub use hydration::load_store;
pub use sqlite_repo::SqliteRepo;
