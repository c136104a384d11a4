//! Functional-boundary apply function
//!
//! This module provides the `apply()` function, the canonical entry point
//! for atomic state mutations in the functional-boundary style.
//!
//! ## Atomicity Contract
//!
//! The `apply()` function guarantees:
//! - **All-or-nothing**: Either the entire command succeeds and returns a valid
//!   new state, or it fails and the caller's state remains valid
//! - **No panics**: Invalid input returns typed errors
//! - **Deterministic validation**: The provisioning batch is verified against
//!   its receipt before the new state is returned
//!
//! ## Example
//!
//! ```
//! use portal_core::{apply, Command, Store};
//! use portal_core::ops::client_ops::ClientDraft;
//!
//! let state = Store::new();
//! let cmd = Command::ClientCreate {
//!     draft: ClientDraft {
//!         name: "Meera Traders".to_string(),
//!         email: "accounts@meera.in".to_string(),
//!         ..Default::default()
//!     },
//! };
//!
//! let new_state = apply(&state, cmd).unwrap();
//! assert_eq!(new_state.list_clients().len(), 1);
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::ops::{
    campaign_ops, chatbot_ops, client_ops, invoice_ops, member_ops, notification_ops,
    project_ops, provisioning, salary_ops, task_ops, Store,
};
use crate::rules::validation;

/// Apply a command to a store, returning a new store state
///
/// The current state is cloned and the command executed against the clone,
/// so the caller's state is never touched. On success the mutated clone is
/// returned; on error it is dropped.
///
/// # Errors
///
/// Returns an error if the command cannot be applied due to validation
/// failures or missing documents. See `PortalError` for the full taxonomy.
pub fn apply(state: &Store, cmd: Command) -> Result<Store> {
    let mut next = state.clone();

    match cmd {
        Command::MemberCreate { draft } => {
            member_ops::create_member(&mut next, draft)?;
        }
        Command::MemberUpdate { member_id, update } => {
            member_ops::update_member(&mut next, &member_id, update)?;
        }
        Command::MemberDelete { member_id } => {
            member_ops::delete_member(&mut next, &member_id)?;
        }

        Command::ClientCreate { draft } => {
            client_ops::create_client(&mut next, draft)?;
        }
        Command::ClientUpdate { client_id, update } => {
            client_ops::update_client(&mut next, &client_id, update)?;
        }
        Command::ClientDelete { client_id } => {
            client_ops::delete_client(&mut next, &client_id)?;
        }

        Command::ProjectCreate { draft } => {
            project_ops::create_project(&mut next, draft)?;
        }
        Command::ProjectUpdate { project_id, update } => {
            project_ops::update_project(&mut next, &project_id, update)?;
        }
        Command::ProjectDelete { project_id } => {
            project_ops::delete_project(&mut next, &project_id)?;
        }

        Command::TaskCreate { draft } => {
            task_ops::create_task(&mut next, draft)?;
        }
        Command::TaskUpdate { task_id, update } => {
            task_ops::update_task(&mut next, &task_id, update)?;
        }
        Command::TaskDelete { task_id } => {
            task_ops::delete_task(&mut next, &task_id)?;
        }
        Command::TaskAssign {
            task_id,
            member_id,
            assigned_by,
        } => {
            task_ops::assign_task(&mut next, &task_id, &member_id, assigned_by)?;
        }

        Command::InvoiceCreate { draft } => {
            invoice_ops::generate_invoice(&mut next, draft)?;
        }
        Command::InvoiceUpdate { invoice_id, update } => {
            invoice_ops::update_invoice(&mut next, &invoice_id, update)?;
        }
        Command::InvoiceDelete { invoice_id } => {
            invoice_ops::delete_invoice(&mut next, &invoice_id)?;
        }
        Command::InvoiceMarkPaid { invoice_id } => {
            invoice_ops::mark_invoice_paid(&mut next, &invoice_id)?;
        }
        Command::InvoiceMarkOverdue { invoice_id } => {
            invoice_ops::mark_invoice_overdue(&mut next, &invoice_id)?;
        }

        Command::CampaignCreate { draft } => {
            campaign_ops::create_campaign(&mut next, draft)?;
        }
        Command::CampaignUpdate { campaign_id, update } => {
            campaign_ops::update_campaign(&mut next, &campaign_id, update)?;
        }
        Command::CampaignDelete { campaign_id } => {
            campaign_ops::delete_campaign(&mut next, &campaign_id)?;
        }
        Command::FestivalAdd { draft } => {
            campaign_ops::add_festival_event(&mut next, draft)?;
        }
        Command::FestivalRemove { festival_id } => {
            campaign_ops::remove_festival_event(&mut next, &festival_id)?;
        }

        Command::FaqAdd { draft } => {
            chatbot_ops::create_faq(&mut next, draft)?;
        }
        Command::FaqDelete { faq_id } => {
            chatbot_ops::delete_faq(&mut next, &faq_id)?;
        }

        Command::NotificationSend {
            member_id,
            title,
            message,
            kind,
        } => {
            notification_ops::send_notification(&mut next, &member_id, title, message, kind)?;
        }
        Command::NotificationMarkRead { notification_id } => {
            notification_ops::mark_notification_read(&mut next, &notification_id)?;
        }
        Command::NotificationMarkAllRead { member_id } => {
            notification_ops::mark_all_read(&mut next, &member_id);
        }

        Command::SalaryRecord { draft } => {
            salary_ops::record_salary(&mut next, draft)?;
        }

        Command::ProvisionProject { input } => {
            let receipt = provisioning::provision_project(&mut next, input)?;
            validation::validate_receipt(&next, &receipt)?;
        }
    }

    Ok(next)
}
