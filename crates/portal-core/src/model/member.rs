use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::metadata::Metadata;
use crate::errors::PortalError;

/// Access role for a team member
///
/// Admin and team lead roles gate the management surfaces (member CRUD,
/// invoice mutation, analytics). Regular members see their own work only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teamlead,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teamlead => "teamlead",
            Role::Member => "member",
        }
    }

    /// Whether this role can manage team-wide resources
    pub fn can_manage(&self) -> bool {
        matches!(self, Role::Admin | Role::Teamlead)
    }
}

impl FromStr for Role {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "teamlead" => Ok(Role::Teamlead),
            "member" => Ok(Role::Member),
            other => Err(PortalError::InvalidRole {
                role: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Team member document (the `users` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Display name
    pub name: String,

    /// Contact email, also the login identity at the IdP
    pub email: String,

    pub role: Role,

    /// Department label (free text, e.g. "Research", "Marketing")
    pub department: Option<String>,

    pub phone: Option<String>,

    /// Date the member joined the team
    pub join_date: Option<NaiveDate>,

    /// Extensible metadata storage
    pub metadata: Metadata,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Create a new Member with the given ID, name, email and role
    pub fn new(id: String, name: String, email: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            role,
            department: None,
            phone: None,
            join_date: None,
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether the member belongs to the given department (case-insensitive)
    pub fn in_department(&self, department: &str) -> bool {
        self.department
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case(department))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member() {
        let member = Member::new(
            "member-1".to_string(),
            "Asha Rao".to_string(),
            "asha@example.com".to_string(),
            Role::Member,
        );

        assert_eq!(member.id, "member-1");
        assert!(!member.is_admin());
        assert!(!member.role.can_manage());
        assert!(member.metadata.is_empty());
    }

    #[test]
    fn test_role_parse_roundtrip() {
        for role in [Role::Admin, Role::Teamlead, Role::Member] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!(matches!(
            "superuser".parse::<Role>(),
            Err(PortalError::InvalidRole { .. })
        ));
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Teamlead).unwrap();
        assert_eq!(json, "\"teamlead\"");
    }

    #[test]
    fn test_in_department_case_insensitive() {
        let mut member = Member::new(
            "member-1".to_string(),
            "Asha Rao".to_string(),
            "asha@example.com".to_string(),
            Role::Member,
        );
        member.department = Some("Research".to_string());

        assert!(member.in_department("research"));
        assert!(!member.in_department("marketing"));
    }
}
