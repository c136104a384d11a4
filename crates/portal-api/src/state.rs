//! Shared application state
//!
//! The in-memory Store is the read path; SQLite is the durability side.
//! Every mutation runs against a clone of the current state, persists the
//! result, and only then swaps it in. A failed operation or a failed
//! persist leaves both the in-memory state and the database untouched.

use std::sync::Arc;
use std::time::Instant;

use portal_core::{apply, log_op_end, log_op_error, log_op_start, Command, Store};
use portal_store::SqliteRepo;
use rusqlite::Connection;
use tokio::sync::{Mutex, RwLock};

use crate::error::ApiError;

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<Store>>,
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(store: Store, conn: Connection) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run a read-only closure against the current state
    pub async fn read<T>(&self, f: impl FnOnce(&Store) -> T) -> T {
        let guard = self.store.read().await;
        f(&guard)
    }

    /// Run a mutation as clone-run-persist-swap
    ///
    /// The closure mutates a clone and returns whatever the handler needs
    /// (usually a created ID or document). State is swapped only after the
    /// clone has been persisted.
    pub async fn mutate<T>(
        &self,
        op: &str,
        f: impl FnOnce(&mut Store) -> portal_core::Result<T>,
    ) -> Result<T, ApiError> {
        log_op_start!(op);
        let start = Instant::now();
        let mut guard = self.store.write().await;

        let mut next = guard.clone();
        let out = match f(&mut next) {
            Ok(out) => out,
            Err(err) => {
                log_op_error!(op, err.clone(), duration_ms = elapsed_ms(start));
                return Err(err.into());
            }
        };

        let mut conn = self.conn.lock().await;
        if let Err(err) = SqliteRepo::persist_store(&mut conn, &next) {
            log_op_error!(op, err.clone(), duration_ms = elapsed_ms(start));
            return Err(err.into());
        }
        *guard = next;

        log_op_end!(op, duration_ms = elapsed_ms(start));
        Ok(out)
    }

    /// Dispatch a command through the atomic apply boundary
    pub async fn dispatch(&self, op: &str, cmd: Command) -> Result<(), ApiError> {
        log_op_start!(op);
        let start = Instant::now();
        let mut guard = self.store.write().await;

        let next = match apply(&guard, cmd) {
            Ok(next) => next,
            Err(err) => {
                log_op_error!(op, err.clone(), duration_ms = elapsed_ms(start));
                return Err(err.into());
            }
        };

        let mut conn = self.conn.lock().await;
        if let Err(err) = SqliteRepo::persist_store(&mut conn, &next) {
            log_op_error!(op, err.clone(), duration_ms = elapsed_ms(start));
            return Err(err.into());
        }
        *guard = next;

        log_op_end!(op, duration_ms = elapsed_ms(start));
        Ok(())
    }
}
