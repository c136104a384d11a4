use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::store::Store;
use crate::errors::{PortalError, Result};
use crate::model::{Invoice, InvoiceItem, Metadata, PaymentStatus};

/// Fields for generating an invoice
///
/// Either `items` (line-item form) or a flat legacy `amount` must be
/// supplied. The human-facing invoice number is derived from the collection
/// size unless the caller provides one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub client_company: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Partial update for an invoice; `None` fields are left unchanged
///
/// Changing items or the tax rate recomputes the totals. Payment status is
/// deliberately absent; it moves through `mark_invoice_paid` and
/// `mark_invoice_overdue` only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceUpdate {
    #[serde(default)]
    pub items: Option<Vec<InvoiceItem>>,
    #[serde(default)]
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// Filter for invoice listings; `None` fields match everything
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFilter {
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

fn validate_amount(value: f64, what: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PortalError::InvalidAmount {
            reason: format!("{} must be a non-negative finite number", what),
        });
    }
    Ok(())
}

fn validate_items(items: &[InvoiceItem]) -> Result<()> {
    for item in items {
        validate_amount(item.quantity, "item quantity")?;
        validate_amount(item.rate, "item rate")?;
    }
    Ok(())
}

fn next_invoice_number(store: &Store) -> String {
    format!("INV-{:04}", store.invoice_count() + 1)
}

/// Generate a new pending invoice
///
/// Totals are computed from line items; legacy flat-amount drafts carry the
/// amount through unchanged.
///
/// # Returns
/// The ID of the newly created invoice
///
/// # Errors
/// * `EmptyInvoiceItems` - If neither items nor a flat amount is supplied
/// * `InvalidAmount` - If any quantity, rate, tax rate or amount is negative
///   or non-finite
pub fn generate_invoice(store: &mut Store, draft: InvoiceDraft) -> Result<String> {
    if draft.items.is_empty() && draft.amount.is_none() {
        return Err(PortalError::EmptyInvoiceItems);
    }
    validate_items(&draft.items)?;
    validate_amount(draft.tax_rate, "tax rate")?;
    if let Some(amount) = draft.amount {
        validate_amount(amount, "amount")?;
    }

    let invoice_id = Uuid::now_v7().to_string();
    let invoice_number = draft
        .invoice_number
        .unwrap_or_else(|| next_invoice_number(store));

    let mut invoice = Invoice::new(invoice_id.clone(), invoice_number);
    invoice.client_id = draft.client_id;
    invoice.client_name = draft.client_name;
    invoice.client_email = draft.client_email;
    invoice.client_company = draft.client_company;
    invoice.project_id = draft.project_id;
    invoice.items = draft.items;
    invoice.tax_rate = draft.tax_rate;
    invoice.amount = draft.amount;
    invoice.due_date = draft.due_date;
    invoice.notes = draft.notes;
    invoice.metadata = draft.metadata;
    invoice.recompute_totals();

    store.insert_invoice(invoice);
    Ok(invoice_id)
}

/// Read an invoice by ID
///
/// # Errors
/// * `InvoiceNotFound` - If the invoice doesn't exist
pub fn read_invoice<'a>(store: &'a Store, id: &str) -> Result<&'a Invoice> {
    store.get_invoice(id)
}

/// Update an invoice with a partial payload, recomputing totals when line
/// items or the tax rate change
///
/// # Errors
/// * `InvoiceNotFound` - If the invoice doesn't exist
/// * `InvalidAmount` - If a provided figure fails validation
pub fn update_invoice(store: &mut Store, id: &str, update: InvoiceUpdate) -> Result<()> {
    if let Some(ref items) = update.items {
        validate_items(items)?;
    }
    if let Some(tax_rate) = update.tax_rate {
        validate_amount(tax_rate, "tax rate")?;
    }

    let invoice = store.get_invoice_mut(id)?;

    let mut recompute = false;
    if let Some(items) = update.items {
        invoice.items = items;
        recompute = true;
    }
    if let Some(tax_rate) = update.tax_rate {
        invoice.tax_rate = tax_rate;
        recompute = true;
    }
    if let Some(due_date) = update.due_date {
        invoice.due_date = Some(due_date);
    }
    if let Some(notes) = update.notes {
        invoice.notes = Some(notes);
    }
    if let Some(metadata) = update.metadata {
        invoice.metadata.merge(metadata);
    }
    if recompute {
        invoice.recompute_totals();
    }
    invoice.updated_at = Utc::now();

    Ok(())
}

/// Delete an invoice (hard delete)
///
/// # Errors
/// * `InvoiceNotFound` - If the invoice doesn't exist
pub fn delete_invoice(store: &mut Store, id: &str) -> Result<()> {
    store.remove_invoice(id)?;
    Ok(())
}

/// Mark an invoice paid, stamping `paid_at`
///
/// Valid from `pending` or `overdue` only.
///
/// # Errors
/// * `InvoiceNotFound` - If the invoice doesn't exist
/// * `InvalidStatusTransition` - If the invoice is already paid
pub fn mark_invoice_paid(store: &mut Store, id: &str) -> Result<()> {
    let invoice = store.get_invoice_mut(id)?;

    if invoice.is_paid() {
        return Err(PortalError::InvalidStatusTransition {
            entity_id: id.to_string(),
            from: PaymentStatus::Paid.to_string(),
            to: PaymentStatus::Paid.to_string(),
        });
    }

    invoice.payment_status = PaymentStatus::Paid;
    invoice.paid_at = Some(Utc::now());
    invoice.updated_at = Utc::now();
    Ok(())
}

/// Flag a pending invoice as overdue
///
/// # Errors
/// * `InvoiceNotFound` - If the invoice doesn't exist
/// * `InvalidStatusTransition` - If the invoice is not pending
pub fn mark_invoice_overdue(store: &mut Store, id: &str) -> Result<()> {
    let invoice = store.get_invoice_mut(id)?;

    if invoice.payment_status != PaymentStatus::Pending {
        return Err(PortalError::InvalidStatusTransition {
            entity_id: id.to_string(),
            from: invoice.payment_status.to_string(),
            to: PaymentStatus::Overdue.to_string(),
        });
    }

    invoice.payment_status = PaymentStatus::Overdue;
    invoice.updated_at = Utc::now();
    Ok(())
}

/// List invoices matching a filter, newest first
pub fn filter_invoices<'a>(store: &'a Store, filter: &InvoiceFilter) -> Vec<&'a Invoice> {
    store
        .list_invoices()
        .into_iter()
        .filter(|i| filter.payment_status.is_none_or(|s| i.payment_status == s))
        .filter(|i| {
            filter
                .client_id
                .as_deref()
                .is_none_or(|c| i.client_id.as_deref() == Some(c))
        })
        .filter(|i| {
            filter
                .project_id
                .as_deref()
                .is_none_or(|p| i.project_id.as_deref() == Some(p))
        })
        .collect()
}
