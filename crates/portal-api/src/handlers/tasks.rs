//! Handlers for the task management surface

use axum::extract::{Path, Query, State};
use axum::Json;
use portal_core::model::Task;
use portal_core::ops::task_ops::{
    create_task, filter_tasks, update_task, TaskDraft, TaskFilter, TaskUpdate,
};
use portal_core::Command;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_tasks(
    State(state): State<AppState>,
    _identity: Identity,
    Query(filter): Query<TaskFilter>,
) -> Result<Json<Value>, ApiError> {
    let tasks: Vec<Task> = state
        .read(|store| filter_tasks(store, &filter).into_iter().cloned().collect())
        .await;
    Ok(Json(json!({"success": true, "tasks": tasks})))
}

pub async fn get_task(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let task: Task = state.read(|store| store.get_task(&id).cloned()).await?;
    Ok(Json(json!({"success": true, "task": task})))
}

pub async fn create_task_handler(
    State(state): State<AppState>,
    identity: Identity,
    Json(mut draft): Json<TaskDraft>,
) -> Result<Json<Value>, ApiError> {
    if draft.assigned_by.is_none() {
        draft.assigned_by = Some(identity.member_id.clone());
    }

    let task = state
        .mutate("create_task", move |store| {
            let id = create_task(store, draft)?;
            Ok(store.get_task(&id)?.clone())
        })
        .await?;
    Ok(Json(json!({"success": true, "task": task})))
}

pub async fn update_task_handler(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<String>,
    Json(update): Json<TaskUpdate>,
) -> Result<Json<Value>, ApiError> {
    let task = state
        .mutate("update_task", move |store| {
            update_task(store, &id, update)?;
            Ok(store.get_task(&id)?.clone())
        })
        .await?;
    Ok(Json(json!({"success": true, "task": task})))
}

pub async fn delete_task_handler(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    identity.require_manage("delete task")?;

    state
        .dispatch("delete_task", Command::TaskDelete { task_id: id })
        .await?;
    Ok(Json(json!({"success": true})))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignBody {
    pub member_id: String,
}

pub async fn assign_task_handler(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
    Json(body): Json<AssignBody>,
) -> Result<Json<Value>, ApiError> {
    identity.require_manage("assign task")?;

    state
        .dispatch(
            "assign_task",
            Command::TaskAssign {
                task_id: id.clone(),
                member_id: body.member_id,
                assigned_by: Some(identity.member_id),
            },
        )
        .await?;

    let task: Task = state.read(|store| store.get_task(&id).cloned()).await?;
    Ok(Json(json!({"success": true, "task": task})))
}
