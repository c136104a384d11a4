//! Handlers for the `users` surface (team members)

use axum::extract::{Path, State};
use axum::Json;
use portal_core::model::Member;
use portal_core::ops::member_ops::{update_member, MemberUpdate};
use serde_json::{json, Value};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_users(
    State(state): State<AppState>,
    _identity: Identity,
) -> Result<Json<Value>, ApiError> {
    let users: Vec<Member> = state
        .read(|store| store.list_members().into_iter().cloned().collect())
        .await;
    Ok(Json(json!({"success": true, "users": users})))
}

pub async fn get_user(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let user: Member = state
        .read(|store| store.get_member(&id).cloned())
        .await?;
    Ok(Json(json!({"success": true, "user": user})))
}

pub async fn update_user(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
    Json(update): Json<MemberUpdate>,
) -> Result<Json<Value>, ApiError> {
    identity.require_admin("update user")?;

    let user = state
        .mutate("update_member", move |store| {
            update_member(store, &id, update)?;
            Ok(store.get_member(&id)?.clone())
        })
        .await?;
    Ok(Json(json!({"success": true, "user": user})))
}
