use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::metadata::Metadata;
use crate::errors::PortalError;

/// Workflow status of a task
///
/// Serialized in kebab case to match the wire values the portal has always
/// used (`pending`, `in-progress`, `completed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(PortalError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

impl FromStr for TaskPriority {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            other => Err(PortalError::InvalidPriority {
                priority: other.to_string(),
            }),
        }
    }
}

/// Task document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier (UUID v7)
    pub id: String,

    pub title: String,

    pub description: Option<String>,

    pub status: TaskStatus,

    pub priority: TaskPriority,

    /// Owning project ID, if the task belongs to a project
    pub project_id: Option<String>,

    /// Member ID of the assignee
    pub assigned_to: Option<String>,

    /// Member ID of whoever made the assignment
    pub assigned_by: Option<String>,

    /// Department label the task is filed under, e.g. "Design"
    pub department: Option<String>,

    pub due_date: Option<NaiveDate>,

    pub estimated_hours: Option<f64>,

    /// Free-form labels for filtering in the UI
    pub tags: Vec<String>,

    /// Set when status moves to completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Extensible metadata storage
    pub metadata: Metadata,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new Task in `pending` status with default priority
    pub fn new(id: String, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description: None,
            status: TaskStatus::Pending,
            priority: TaskPriority::default(),
            project_id: None,
            assigned_to: None,
            assigned_by: None,
            department: None,
            due_date: None,
            estimated_hours: None,
            tags: Vec::new(),
            completed_at: None,
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Move the task to a new status, stamping `completed_at` on completion
    /// and clearing it when a completed task is reopened
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.completed_at = match status {
            TaskStatus::Completed => Some(Utc::now()),
            _ => None,
        };
        self.updated_at = Utc::now();
    }

    pub fn is_assigned_to(&self, member_id: &str) -> bool {
        self.assigned_to.as_deref() == Some(member_id)
    }
}
