//! Handlers for the finance surface

use axum::extract::{Path, Query, State};
use axum::Json;
use portal_core::model::Invoice;
use portal_core::ops::invoice_ops::{
    filter_invoices, generate_invoice, update_invoice, InvoiceDraft, InvoiceFilter, InvoiceUpdate,
};
use portal_core::Command;
use serde_json::{json, Value};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_invoices(
    State(state): State<AppState>,
    _identity: Identity,
    Query(filter): Query<InvoiceFilter>,
) -> Result<Json<Value>, ApiError> {
    let invoices: Vec<Invoice> = state
        .read(|store| filter_invoices(store, &filter).into_iter().cloned().collect())
        .await;
    Ok(Json(json!({"success": true, "invoices": invoices})))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let invoice: Invoice = state.read(|store| store.get_invoice(&id).cloned()).await?;
    Ok(Json(json!({"success": true, "invoice": invoice})))
}

pub async fn create_invoice(
    State(state): State<AppState>,
    identity: Identity,
    Json(draft): Json<InvoiceDraft>,
) -> Result<Json<Value>, ApiError> {
    identity.require_manage("create invoice")?;

    let invoice = state
        .mutate("generate_invoice", move |store| {
            let id = generate_invoice(store, draft)?;
            Ok(store.get_invoice(&id)?.clone())
        })
        .await?;
    Ok(Json(json!({"success": true, "invoice": invoice})))
}

pub async fn update_invoice_handler(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
    Json(update): Json<InvoiceUpdate>,
) -> Result<Json<Value>, ApiError> {
    identity.require_manage("update invoice")?;

    let invoice = state
        .mutate("update_invoice", move |store| {
            update_invoice(store, &id, update)?;
            Ok(store.get_invoice(&id)?.clone())
        })
        .await?;
    Ok(Json(json!({"success": true, "invoice": invoice})))
}

pub async fn delete_invoice_handler(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    identity.require_admin("delete invoice")?;

    state
        .dispatch("delete_invoice", Command::InvoiceDelete { invoice_id: id })
        .await?;
    Ok(Json(json!({"success": true})))
}

pub async fn mark_invoice_paid_handler(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    identity.require_manage("mark invoice paid")?;

    state
        .dispatch(
            "mark_invoice_paid",
            Command::InvoiceMarkPaid {
                invoice_id: id.clone(),
            },
        )
        .await?;

    let invoice: Invoice = state.read(|store| store.get_invoice(&id).cloned()).await?;
    Ok(Json(json!({"success": true, "invoice": invoice})))
}
