//! Post-commit integrity checks for the provisioning batch
//!
//! Plain document writes carry no referential guarantees; the provisioning
//! batch is the exception. After a batch commits, these checks confirm the
//! receipt's documents all landed and reference each other correctly.

use crate::errors::{PortalError, Result};
use crate::ops::provisioning::ProvisionReceipt;
use crate::ops::Store;

/// Verify a provisioning receipt against the store
///
/// Confirms every ID on the receipt resolves and that the created documents
/// point at each other: project -> client, invoice -> client and project,
/// each task -> project.
///
/// # Errors
/// * `BatchAtomicityBreach` - If any document is missing or mis-linked
pub fn validate_receipt(store: &Store, receipt: &ProvisionReceipt) -> Result<()> {
    let breach = |message: String| PortalError::BatchAtomicityBreach { message };

    store
        .get_client(&receipt.client_id)
        .map_err(|_| breach(format!("client {} missing", receipt.client_id)))?;

    let project = store
        .get_project(&receipt.project_id)
        .map_err(|_| breach(format!("project {} missing", receipt.project_id)))?;
    if project.client_id != receipt.client_id {
        return Err(breach(format!(
            "project {} references client {} instead of {}",
            receipt.project_id, project.client_id, receipt.client_id
        )));
    }

    if let Some(ref invoice_id) = receipt.invoice_id {
        let invoice = store
            .get_invoice(invoice_id)
            .map_err(|_| breach(format!("invoice {} missing", invoice_id)))?;
        if invoice.client_id.as_deref() != Some(receipt.client_id.as_str()) {
            return Err(breach(format!("invoice {} not linked to client", invoice_id)));
        }
        if invoice.project_id.as_deref() != Some(receipt.project_id.as_str()) {
            return Err(breach(format!(
                "invoice {} not linked to project",
                invoice_id
            )));
        }
    }

    for task_id in &receipt.task_ids {
        let task = store
            .get_task(task_id)
            .map_err(|_| breach(format!("task {} missing", task_id)))?;
        if task.project_id.as_deref() != Some(receipt.project_id.as_str()) {
            return Err(breach(format!("task {} not linked to project", task_id)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Member, Role};
    use crate::ops::provisioning::{provision_project, NewProjectInput};
    use chrono::NaiveDate;

    fn provisioned_store() -> (Store, ProvisionReceipt) {
        let mut store = Store::new();
        store.insert_member(Member::new(
            "member-1".to_string(),
            "Asha Rao".to_string(),
            "asha@example.com".to_string(),
            Role::Member,
        ));

        let receipt = provision_project(
            &mut store,
            NewProjectInput {
                client_name: "Meera Traders".to_string(),
                client_email: "accounts@meera.in".to_string(),
                client_company: None,
                client_phone: None,
                project_name: "Diwali Launch".to_string(),
                project_description: None,
                start_date: None,
                due_date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
                assigned_members: vec!["member-1".to_string()],
                payment_amount: Some(10_000.0),
                tax_rate: 0.0,
                created_by: None,
            },
        )
        .unwrap();

        (store, receipt)
    }

    #[test]
    fn test_valid_receipt_passes() {
        let (store, receipt) = provisioned_store();
        validate_receipt(&store, &receipt).unwrap();
    }

    #[test]
    fn test_missing_task_is_a_breach() {
        let (mut store, receipt) = provisioned_store();
        store.remove_task(&receipt.task_ids[0]).unwrap();

        assert!(matches!(
            validate_receipt(&store, &receipt),
            Err(PortalError::BatchAtomicityBreach { .. })
        ));
    }

    #[test]
    fn test_mislinked_project_is_a_breach() {
        let (mut store, receipt) = provisioned_store();
        store
            .get_project_mut(&receipt.project_id)
            .unwrap()
            .client_id = "someone-else".to_string();

        assert!(matches!(
            validate_receipt(&store, &receipt),
            Err(PortalError::BatchAtomicityBreach { .. })
        ));
    }
}
