//! Atomic project provisioning
//!
//! The New Project form captures a client, a project, an optional payment
//! and a set of assignees in one submission. Provisioning turns that into a
//! single batch: client + project + invoice (when a payment amount is given)
//! + one kickoff task per assignee + a notification to each assignee.
//! Everything is validated up front and inserted only after every document
//! has been built, so a failing batch leaves the store untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::client_ops::{validate_email, validate_name};
use super::store::Store;
use crate::errors::{PortalError, Result};
use crate::model::{
    Client, Invoice, InvoiceItem, Metadata, Notification, NotificationKind, Project, Task,
};

/// Everything the New Project form submits
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectInput {
    // Client section
    pub client_name: String,
    pub client_email: String,
    #[serde(default)]
    pub client_company: Option<String>,
    #[serde(default)]
    pub client_phone: Option<String>,

    // Project section
    pub project_name: String,
    #[serde(default)]
    pub project_description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub due_date: NaiveDate,

    // Team section
    #[serde(default)]
    pub assigned_members: Vec<String>,

    // Payment section; no amount means no invoice
    #[serde(default)]
    pub payment_amount: Option<f64>,
    #[serde(default)]
    pub tax_rate: f64,

    #[serde(default)]
    pub created_by: Option<String>,
}

/// IDs of every document a provisioning batch created
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionReceipt {
    pub client_id: String,
    pub project_id: String,
    /// Absent when no payment amount was given
    pub invoice_id: Option<String>,
    /// One kickoff task per assigned member, same order as the input
    pub task_ids: Vec<String>,
}

/// Provision a new project atomically
///
/// Validates the whole input first (including that every assigned member
/// exists), builds every document, then inserts them all. An error at any
/// point leaves the store unchanged.
///
/// # Returns
/// A receipt with the IDs of everything created
///
/// # Errors
/// * `InvalidName` / `InvalidEmail` - If the client or project section fails
///   validation
/// * `InvalidAmount` - If the payment amount or tax rate is negative or
///   non-finite
/// * `UnknownAssignee` - If an assigned member ID doesn't resolve
pub fn provision_project(store: &mut Store, input: NewProjectInput) -> Result<ProvisionReceipt> {
    // Phase 1: validate everything before touching the store
    validate_name(&input.client_name)?;
    validate_email(&input.client_email)?;
    validate_name(&input.project_name)?;

    if let Some(amount) = input.payment_amount {
        if !amount.is_finite() || amount < 0.0 {
            return Err(PortalError::InvalidAmount {
                reason: "payment amount must be a non-negative finite number".to_string(),
            });
        }
    }
    if !input.tax_rate.is_finite() || input.tax_rate < 0.0 {
        return Err(PortalError::InvalidAmount {
            reason: "tax rate must be a non-negative finite number".to_string(),
        });
    }

    for member_id in &input.assigned_members {
        if !store.member_exists(member_id) {
            return Err(PortalError::UnknownAssignee {
                member_id: member_id.clone(),
            });
        }
    }

    // Phase 2: build every document
    let client_id = Uuid::now_v7().to_string();
    let mut client = Client::new(
        client_id.clone(),
        input.client_name,
        input.client_email,
    );
    client.company = input.client_company;
    client.phone = input.client_phone;

    let project_id = Uuid::now_v7().to_string();
    let mut project = Project::new(
        project_id.clone(),
        input.project_name.clone(),
        client_id.clone(),
    );
    project.description = input.project_description;
    project.start_date = input.start_date;
    project.due_date = Some(input.due_date);
    project.assigned_members = input.assigned_members.clone();
    project.created_by = input.created_by.clone();

    // A zero amount means the client hasn't committed to a payment yet;
    // no invoice is raised in that case either.
    let invoice = match input.payment_amount {
        Some(amount) if amount > 0.0 => {
            let invoice_id = Uuid::now_v7().to_string();
            let invoice_number = format!("INV-{:04}", store.invoice_count() + 1);
            let mut invoice = Invoice::new(invoice_id, invoice_number);
            invoice.client_id = Some(client_id.clone());
            invoice.client_name = Some(client.name.clone());
            invoice.client_email = Some(client.email.clone());
            invoice.client_company = client.company.clone();
            invoice.project_id = Some(project_id.clone());
            invoice.items = vec![InvoiceItem::new(
                format!("Project fee - {}", input.project_name),
                1.0,
                amount,
            )];
            invoice.tax_rate = input.tax_rate;
            invoice.due_date = Some(input.due_date);
            invoice.recompute_totals();
            Some(invoice)
        }
        _ => None,
    };

    let mut tasks = Vec::with_capacity(input.assigned_members.len());
    let mut notifications = Vec::with_capacity(input.assigned_members.len());
    for member_id in &input.assigned_members {
        let task_id = Uuid::now_v7().to_string();
        let mut task = Task::new(task_id, format!("Kickoff: {}", input.project_name));
        task.project_id = Some(project_id.clone());
        task.assigned_to = Some(member_id.clone());
        task.assigned_by = input.created_by.clone();
        task.due_date = Some(input.due_date);
        task.metadata = Metadata::new();
        tasks.push(task);

        notifications.push(Notification::new(
            Uuid::now_v7().to_string(),
            member_id.clone(),
            "New project assigned".to_string(),
            format!("You were added to '{}'", input.project_name),
            NotificationKind::Project,
        ));
    }

    // Phase 3: commit. Nothing below can fail.
    let receipt = ProvisionReceipt {
        client_id,
        project_id,
        invoice_id: invoice.as_ref().map(|i| i.id.clone()),
        task_ids: tasks.iter().map(|t| t.id.clone()).collect(),
    };

    store.insert_client(client);
    store.insert_project(project);
    if let Some(invoice) = invoice {
        store.insert_invoice(invoice);
    }
    for task in tasks {
        store.insert_task(task);
    }
    for notification in notifications {
        store.insert_notification(notification);
    }

    Ok(receipt)
}
