use chrono::{DateTime, Utc};
use portal_core_types::Sensitive;
use serde::{Deserialize, Serialize};

/// Monthly salary record for a member
///
/// The figures are wrapped in `Sensitive` so they never leak through Debug
/// or Display formatting in logs. Serde still carries the real values for
/// persistence and admin-facing API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    /// Unique identifier (UUID v7)
    pub id: String,

    pub member_id: String,

    /// Pay month in "YYYY-MM" form
    pub month: String,

    pub base_amount: Sensitive<f64>,

    /// Task hours logged for the month
    pub task_hours: f64,

    /// Payout total; equals the base amount unless adjusted
    pub total: Sensitive<f64>,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl SalaryRecord {
    /// Create a record with the total defaulting to the base amount
    pub fn new(id: String, member_id: String, month: String, base_amount: f64) -> Self {
        Self {
            id,
            member_id,
            month,
            base_amount: Sensitive::new(base_amount),
            task_hours: 0.0,
            total: Sensitive::new(base_amount),
            notes: None,
            created_at: Utc::now(),
        }
    }
}
