//! Handlers for the project surface
//!
//! POST here is the provisioning endpoint: one request creates the client,
//! the project, an optional invoice and a kickoff task per assigned member
//! as a single all-or-nothing batch.

use axum::extract::{Path, State};
use axum::Json;
use portal_core::model::Project;
use portal_core::ops::provisioning::{provision_project, NewProjectInput};
use portal_core::rules::validation::validate_receipt;
use serde_json::{json, Value};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_projects(
    State(state): State<AppState>,
    _identity: Identity,
) -> Result<Json<Value>, ApiError> {
    let projects: Vec<Project> = state
        .read(|store| store.list_projects().into_iter().cloned().collect())
        .await;
    Ok(Json(json!({"success": true, "projects": projects})))
}

pub async fn get_project(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let project: Project = state.read(|store| store.get_project(&id).cloned()).await?;
    Ok(Json(json!({"success": true, "project": project})))
}

pub async fn provision_project_handler(
    State(state): State<AppState>,
    identity: Identity,
    Json(mut input): Json<NewProjectInput>,
) -> Result<Json<Value>, ApiError> {
    identity.require_manage("provision project")?;

    if input.created_by.is_none() {
        input.created_by = Some(identity.member_id.clone());
    }

    let receipt = state
        .mutate("provision_project", move |store| {
            let receipt = provision_project(store, input)?;
            validate_receipt(store, &receipt)?;
            Ok(receipt)
        })
        .await?;

    let project: Project = state
        .read(|store| store.get_project(&receipt.project_id).cloned())
        .await?;
    Ok(Json(json!({"success": true, "receipt": receipt, "project": project})))
}
