//! Typed document models for every portal collection

pub mod campaign;
pub mod chatbot;
pub mod client;
pub mod festival;
pub mod invoice;
pub mod member;
pub mod metadata;
pub mod notification;
pub mod project;
pub mod salary;
pub mod task;

pub use campaign::{Campaign, CampaignMetrics, CampaignStatus};
pub use chatbot::{ChatRecord, FaqEntry};
pub use client::Client;
pub use festival::FestivalEvent;
pub use invoice::{Invoice, InvoiceItem, PaymentStatus};
pub use member::{Member, Role};
pub use metadata::Metadata;
pub use notification::{Notification, NotificationKind};
pub use project::{Project, ProjectStatus};
pub use salary::SalaryRecord;
pub use task::{Task, TaskPriority, TaskStatus};
