//! Portal API - thin REST layer over the portal kernel
//!
//! Exposes CRUD routes for users, tasks, invoices and projects, the
//! provisioning endpoint, notifications, analytics and the chatbot.
//! Identity arrives in `x-user-id` / `x-user-role` headers set by the
//! external IdP proxy; this layer only enforces role gates.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{build_router, serve};
pub use state::AppState;
