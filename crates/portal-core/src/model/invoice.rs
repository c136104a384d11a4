use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::metadata::Metadata;
use crate::errors::PortalError;

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Overdue => "overdue",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "overdue" => Ok(PaymentStatus::Overdue),
            other => Err(PortalError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Single invoice line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
}

impl InvoiceItem {
    pub fn new(description: String, quantity: f64, rate: f64) -> Self {
        Self {
            description,
            quantity,
            rate,
        }
    }

    /// Line amount (quantity x rate)
    pub fn amount(&self) -> f64 {
        self.quantity * self.rate
    }
}

/// Invoice document
///
/// Older documents carry a single flat `amount` instead of line items and a
/// computed `total`. Readers must go through `effective_total()` which
/// handles both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Human-facing invoice number, e.g. "INV-0042"
    pub invoice_number: String,

    pub client_id: Option<String>,

    /// Client details denormalized at generation time, so the invoice still
    /// renders after the client record changes or disappears
    pub client_name: Option<String>,

    pub client_email: Option<String>,

    pub client_company: Option<String>,

    pub project_id: Option<String>,

    pub items: Vec<InvoiceItem>,

    /// Sum of line amounts
    pub subtotal: f64,

    /// Tax rate in percent
    pub tax_rate: f64,

    /// subtotal x tax_rate / 100
    pub tax_amount: f64,

    /// subtotal + tax_amount
    pub total: f64,

    /// Legacy flat amount carried by pre-line-item documents
    pub amount: Option<f64>,

    pub payment_status: PaymentStatus,

    pub due_date: Option<NaiveDate>,

    /// Set when the invoice is marked paid
    pub paid_at: Option<DateTime<Utc>>,

    pub notes: Option<String>,

    /// Extensible metadata storage
    pub metadata: Metadata,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Create a new pending Invoice with no line items
    pub fn new(id: String, invoice_number: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            invoice_number,
            client_id: None,
            client_name: None,
            client_email: None,
            client_company: None,
            project_id: None,
            items: Vec::new(),
            subtotal: 0.0,
            tax_rate: 0.0,
            tax_amount: 0.0,
            total: 0.0,
            amount: None,
            payment_status: PaymentStatus::Pending,
            due_date: None,
            paid_at: None,
            notes: None,
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The amount this invoice is worth, regardless of document shape
    ///
    /// Computed `total` wins; legacy documents fall back to the flat
    /// `amount` field; absent both the invoice is worth zero.
    pub fn effective_total(&self) -> f64 {
        if self.total != 0.0 {
            self.total
        } else {
            self.amount.unwrap_or(0.0)
        }
    }

    /// Recompute subtotal, tax amount and total from line items
    pub fn recompute_totals(&mut self) {
        self.subtotal = self.items.iter().map(InvoiceItem::amount).sum();
        self.tax_amount = self.subtotal * self.tax_rate / 100.0;
        self.total = self.subtotal + self.tax_amount;
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}
