use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::PortalError;

/// Category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Task,
    Invoice,
    Project,
    System,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Task => "task",
            NotificationKind::Invoice => "invoice",
            NotificationKind::Project => "project",
            NotificationKind::System => "system",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(NotificationKind::Task),
            "invoice" => Ok(NotificationKind::Invoice),
            "project" => Ok(NotificationKind::Project),
            "system" => Ok(NotificationKind::System),
            other => Err(PortalError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// In-app notification addressed to a single member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Recipient member ID
    pub member_id: String,

    pub title: String,

    pub message: String,

    #[serde(rename = "type")]
    pub kind: NotificationKind,

    pub read: bool,

    /// Set when the notification is marked read
    pub read_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        id: String,
        member_id: String,
        title: String,
        message: String,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id,
            member_id,
            title,
            message,
            kind,
            read: false,
            read_at: None,
            created_at: Utc::now(),
        }
    }

    /// Mark the notification read, stamping `read_at`. Idempotent.
    pub fn mark_read(&mut self) {
        if !self.read {
            self.read = true;
            self.read_at = Some(Utc::now());
        }
    }
}
