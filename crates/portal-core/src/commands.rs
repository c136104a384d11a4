//! Command enum for the functional-boundary apply function

use serde::Deserialize;

use crate::model::NotificationKind;
use crate::ops::campaign_ops::{CampaignDraft, CampaignUpdate, FestivalDraft};
use crate::ops::chatbot_ops::FaqDraft;
use crate::ops::client_ops::{ClientDraft, ClientUpdate};
use crate::ops::invoice_ops::{InvoiceDraft, InvoiceUpdate};
use crate::ops::member_ops::{MemberDraft, MemberUpdate};
use crate::ops::project_ops::{ProjectDraft, ProjectUpdate};
use crate::ops::provisioning::NewProjectInput;
use crate::ops::salary_ops::SalaryDraft;
use crate::ops::task_ops::{TaskDraft, TaskUpdate};

/// Every mutation the portal supports, as data
///
/// Commands are applied through `apply()`, which guarantees all-or-nothing
/// semantics per command. Deserializable so outer layers can accept a
/// command payload directly.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Command {
    // ===== Members =====
    MemberCreate { draft: MemberDraft },
    MemberUpdate { member_id: String, update: MemberUpdate },
    MemberDelete { member_id: String },

    // ===== Clients =====
    ClientCreate { draft: ClientDraft },
    ClientUpdate { client_id: String, update: ClientUpdate },
    ClientDelete { client_id: String },

    // ===== Projects =====
    ProjectCreate { draft: ProjectDraft },
    ProjectUpdate { project_id: String, update: ProjectUpdate },
    ProjectDelete { project_id: String },

    // ===== Tasks =====
    TaskCreate { draft: TaskDraft },
    TaskUpdate { task_id: String, update: TaskUpdate },
    TaskDelete { task_id: String },
    TaskAssign {
        task_id: String,
        member_id: String,
        assigned_by: Option<String>,
    },

    // ===== Invoices =====
    InvoiceCreate { draft: InvoiceDraft },
    InvoiceUpdate { invoice_id: String, update: InvoiceUpdate },
    InvoiceDelete { invoice_id: String },
    InvoiceMarkPaid { invoice_id: String },
    InvoiceMarkOverdue { invoice_id: String },

    // ===== Marketing =====
    CampaignCreate { draft: CampaignDraft },
    CampaignUpdate { campaign_id: String, update: CampaignUpdate },
    CampaignDelete { campaign_id: String },
    FestivalAdd { draft: FestivalDraft },
    FestivalRemove { festival_id: String },

    // ===== Chatbot =====
    FaqAdd { draft: FaqDraft },
    FaqDelete { faq_id: String },

    // ===== Notifications =====
    NotificationSend {
        member_id: String,
        title: String,
        message: String,
        #[serde(rename = "type")]
        kind: NotificationKind,
    },
    NotificationMarkRead { notification_id: String },
    NotificationMarkAllRead { member_id: String },

    // ===== Salaries =====
    SalaryRecord { draft: SalaryDraft },

    // ===== Provisioning =====
    /// The one multi-collection batch: client + project + optional invoice
    /// + kickoff tasks + assignee notifications, atomically
    ProvisionProject { input: NewProjectInput },
}
