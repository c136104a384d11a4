//! Route handlers, one module per portal surface

pub mod analytics;
pub mod chatbot;
pub mod invoices;
pub mod notifications;
pub mod projects;
pub mod tasks;
pub mod users;

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
