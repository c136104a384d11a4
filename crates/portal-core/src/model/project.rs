use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::metadata::Metadata;
use crate::errors::PortalError;

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Planning,
    Ongoing,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning" => Ok(ProjectStatus::Planning),
            "ongoing" => Ok(ProjectStatus::Ongoing),
            "completed" => Ok(ProjectStatus::Completed),
            other => Err(PortalError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Project document
///
/// Projects reference their client by ID. Referential integrity is not
/// enforced on plain writes (documents arrive from several forms); the
/// provisioning batch is the exception and validates its own references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier (UUID v7)
    pub id: String,

    pub name: String,

    pub description: Option<String>,

    /// Owning client ID
    pub client_id: String,

    pub status: ProjectStatus,

    pub start_date: Option<NaiveDate>,

    pub due_date: Option<NaiveDate>,

    /// Member IDs working on this project
    pub assigned_members: Vec<String>,

    /// Member ID of whoever created the project
    pub created_by: Option<String>,

    /// Extensible metadata storage
    pub metadata: Metadata,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new Project in `planning` status
    pub fn new(id: String, name: String, client_id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            client_id,
            status: ProjectStatus::Planning,
            start_date: None,
            due_date: None,
            assigned_members: Vec::new(),
            created_by: None,
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the project is still in flight (planning or ongoing)
    pub fn is_active(&self) -> bool {
        matches!(self.status, ProjectStatus::Planning | ProjectStatus::Ongoing)
    }

    pub fn has_member(&self, member_id: &str) -> bool {
        self.assigned_members.iter().any(|m| m == member_id)
    }
}
