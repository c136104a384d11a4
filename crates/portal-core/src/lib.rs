//! Portal Core - Canonical in-memory document kernel
//!
//! This crate provides the foundational data structures and operations for
//! the internal business portal, including:
//! - Typed document models for every collection (members, clients, projects,
//!   tasks, invoices, campaigns, festivals, notifications, FAQs, chat
//!   history, salaries)
//! - Full CRUD semantics per collection plus filters and search
//! - The atomic `apply()` functional boundary, including batched project
//!   provisioning (client + project + invoice + tasks in one write)
//! - In-memory analytics queries (dashboard, revenue, tasks, team rollups)
//! - Scripted FAQ chatbot matching
//! - Error taxonomy and structured logging facility

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use errors::{ErrorKind, OpError, PortalError, Result};
pub use model::{
    Campaign, Client, FaqEntry, Invoice, Member, Metadata, Notification, Project, SalaryRecord,
    Task,
};
pub use ops::Store;
