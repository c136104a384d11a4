//! Read-only reductions over the store

pub mod analytics;
pub mod chatbot;
pub mod team;

pub use analytics::{dashboard_analytics, revenue_summary, task_stats};
pub use chatbot::answer_query;
pub use team::{department_stats, member_stats};
