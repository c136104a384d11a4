//! CRUD operations over the in-memory store
//!
//! Each collection gets a module of free functions taking `&mut Store`.
//! Creation functions return the new document's ID.

pub mod campaign_ops;
pub mod chatbot_ops;
pub mod client_ops;
pub mod invoice_ops;
pub mod member_ops;
pub mod notification_ops;
pub mod project_ops;
pub mod provisioning;
pub mod salary_ops;
pub mod store;
pub mod task_ops;

pub use store::Store;
