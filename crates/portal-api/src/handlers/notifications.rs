//! Handlers for the notification surface

use axum::extract::{Path, State};
use axum::Json;
use portal_core::model::{Notification, NotificationKind};
use portal_core::ops::notification_ops::{recent_notifications, unread_count};
use portal_core::Command;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBody {
    pub member_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: Option<NotificationKind>,
}

pub async fn send_notification_handler(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<SendBody>,
) -> Result<Json<Value>, ApiError> {
    identity.require_manage("send notification")?;

    state
        .dispatch(
            "send_notification",
            Command::NotificationSend {
                member_id: body.member_id,
                title: body.title,
                message: body.message,
                kind: body.kind.unwrap_or(NotificationKind::System),
            },
        )
        .await?;
    Ok(Json(json!({"success": true})))
}

/// Recent notifications for one member (newest first, capped)
///
/// A member can read their own feed; reading someone else's requires a
/// managing role.
pub async fn list_for_member(
    State(state): State<AppState>,
    identity: Identity,
    Path(member_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if identity.member_id != member_id {
        identity.require_manage("read another member's notifications")?;
    }

    let (notifications, unread): (Vec<Notification>, usize) = state
        .read(|store| {
            let list = recent_notifications(store, &member_id)
                .into_iter()
                .cloned()
                .collect();
            (list, unread_count(store, &member_id))
        })
        .await;
    Ok(Json(
        json!({"success": true, "notifications": notifications, "unreadCount": unread}),
    ))
}

pub async fn mark_read(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .dispatch(
            "mark_notification_read",
            Command::NotificationMarkRead {
                notification_id: id,
            },
        )
        .await?;
    Ok(Json(json!({"success": true})))
}

pub async fn mark_all_read(
    State(state): State<AppState>,
    identity: Identity,
    Path(member_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if identity.member_id != member_id {
        identity.require_manage("mark another member's notifications read")?;
    }

    state
        .dispatch(
            "mark_all_notifications_read",
            Command::NotificationMarkAllRead { member_id },
        )
        .await?;
    Ok(Json(json!({"success": true})))
}
