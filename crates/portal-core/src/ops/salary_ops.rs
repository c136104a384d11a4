use serde::Deserialize;
use uuid::Uuid;

use super::store::Store;
use crate::errors::{PortalError, Result};
use crate::model::SalaryRecord;
use portal_core_types::Sensitive;

/// Fields for recording a salary payment
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryDraft {
    pub member_id: String,
    /// Pay month in "YYYY-MM" form
    pub month: String,
    pub base_amount: f64,
    #[serde(default)]
    pub task_hours: f64,
    /// Payout total; defaults to the base amount when absent
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn validate_figure(value: f64, what: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PortalError::InvalidAmount {
            reason: format!("{} must be a non-negative finite number", what),
        });
    }
    Ok(())
}

/// Record a salary payment for a member
///
/// # Returns
/// The ID of the new record
///
/// # Errors
/// * `MemberNotFound` - If the member doesn't exist
/// * `InvalidAmount` - If any figure is negative or non-finite
pub fn record_salary(store: &mut Store, draft: SalaryDraft) -> Result<String> {
    store.get_member(&draft.member_id)?;
    validate_figure(draft.base_amount, "base amount")?;
    validate_figure(draft.task_hours, "task hours")?;
    if let Some(total) = draft.total {
        validate_figure(total, "total")?;
    }

    let salary_id = Uuid::now_v7().to_string();
    let mut record = SalaryRecord::new(
        salary_id.clone(),
        draft.member_id,
        draft.month,
        draft.base_amount,
    );
    record.task_hours = draft.task_hours;
    if let Some(total) = draft.total {
        record.total = Sensitive::new(total);
    }
    record.notes = draft.notes;

    store.insert_salary(record);
    Ok(salary_id)
}

/// Salary history for a member, newest first
pub fn salary_history<'a>(store: &'a Store, member_id: &str) -> Vec<&'a SalaryRecord> {
    store.salaries_for(member_id)
}
