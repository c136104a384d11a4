//! Handlers for the dashboard analytics surface

use axum::extract::{Path, State};
use axum::Json;
use portal_core::queries::{
    dashboard_analytics, department_stats, member_stats, revenue_summary, task_stats,
};
use serde_json::{json, Value};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn dashboard(
    State(state): State<AppState>,
    _identity: Identity,
) -> Result<Json<Value>, ApiError> {
    let analytics = state.read(dashboard_analytics).await;
    Ok(Json(json!({"success": true, "analytics": analytics})))
}

pub async fn revenue(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Value>, ApiError> {
    identity.require_manage("read revenue summary")?;

    let summary = state.read(revenue_summary).await;
    Ok(Json(json!({"success": true, "revenue": summary})))
}

pub async fn tasks(
    State(state): State<AppState>,
    _identity: Identity,
) -> Result<Json<Value>, ApiError> {
    let stats = state.read(task_stats).await;
    Ok(Json(json!({"success": true, "taskStats": stats})))
}

/// KPI rollup for one member; self-service, or any member for managers
pub async fn member(
    State(state): State<AppState>,
    identity: Identity,
    Path(member_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if identity.member_id != member_id {
        identity.require_manage("read another member's stats")?;
    }

    let stats = state
        .read(|store| member_stats(store, &member_id))
        .await?;
    Ok(Json(json!({"success": true, "memberStats": stats})))
}

pub async fn department(
    State(state): State<AppState>,
    _identity: Identity,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let stats = state.read(|store| department_stats(store, &name)).await;
    Ok(Json(json!({"success": true, "departmentStats": stats})))
}
