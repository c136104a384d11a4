use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::client_ops::validate_name;
use super::store::Store;
use crate::errors::Result;
use crate::model::{Metadata, Project, ProjectStatus};

/// Fields for creating a project
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub client_id: String,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_members: Vec<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Partial update for a project; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_members: Option<Vec<String>>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// Create a new project
///
/// The client ID is stored as given; plain writes do not enforce
/// referential integrity (the provisioning batch does).
///
/// # Returns
/// The ID of the newly created project
///
/// # Errors
/// * `InvalidName` - If name is empty or whitespace-only
pub fn create_project(store: &mut Store, draft: ProjectDraft) -> Result<String> {
    validate_name(&draft.name)?;

    let project_id = Uuid::now_v7().to_string();
    let mut project = Project::new(project_id.clone(), draft.name, draft.client_id);
    project.description = draft.description;
    if let Some(status) = draft.status {
        project.status = status;
    }
    project.start_date = draft.start_date;
    project.due_date = draft.due_date;
    project.assigned_members = draft.assigned_members;
    project.created_by = draft.created_by;
    project.metadata = draft.metadata;

    store.insert_project(project);
    Ok(project_id)
}

/// Read a project by ID
///
/// # Errors
/// * `ProjectNotFound` - If the project doesn't exist
pub fn read_project<'a>(store: &'a Store, id: &str) -> Result<&'a Project> {
    store.get_project(id)
}

/// Update a project with a partial payload
///
/// # Errors
/// * `ProjectNotFound` - If the project doesn't exist
/// * `InvalidName` - If a provided name fails validation
pub fn update_project(store: &mut Store, id: &str, update: ProjectUpdate) -> Result<()> {
    if let Some(ref name) = update.name {
        validate_name(name)?;
    }

    let project = store.get_project_mut(id)?;

    if let Some(name) = update.name {
        project.name = name;
    }
    if let Some(description) = update.description {
        project.description = Some(description);
    }
    if let Some(status) = update.status {
        project.status = status;
    }
    if let Some(start_date) = update.start_date {
        project.start_date = Some(start_date);
    }
    if let Some(due_date) = update.due_date {
        project.due_date = Some(due_date);
    }
    if let Some(assigned_members) = update.assigned_members {
        project.assigned_members = assigned_members;
    }
    if let Some(metadata) = update.metadata {
        project.metadata.merge(metadata);
    }
    project.updated_at = Utc::now();

    Ok(())
}

/// Delete a project (hard delete)
///
/// Tasks referencing the project keep their project ID.
///
/// # Errors
/// * `ProjectNotFound` - If the project doesn't exist
pub fn delete_project(store: &mut Store, id: &str) -> Result<()> {
    store.remove_project(id)?;
    Ok(())
}

/// Projects a member is assigned to, newest first
pub fn projects_for_member<'a>(store: &'a Store, member_id: &str) -> Vec<&'a Project> {
    store
        .list_projects()
        .into_iter()
        .filter(|p| p.has_member(member_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PortalError;

    fn draft(name: &str) -> ProjectDraft {
        ProjectDraft {
            name: name.to_string(),
            description: None,
            client_id: "client-1".to_string(),
            status: None,
            start_date: None,
            due_date: None,
            assigned_members: Vec::new(),
            created_by: None,
            metadata: Metadata::new(),
        }
    }

    #[test]
    fn test_create_project_defaults_to_planning() {
        let mut store = Store::new();
        let id = create_project(&mut store, draft("Diwali Launch")).unwrap();

        let project = read_project(&store, &id).unwrap();
        assert_eq!(project.status, ProjectStatus::Planning);
        assert_eq!(project.client_id, "client-1");
    }

    #[test]
    fn test_create_project_rejects_empty_name() {
        let mut store = Store::new();
        assert!(matches!(
            create_project(&mut store, draft("")),
            Err(PortalError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_update_project_status() {
        let mut store = Store::new();
        let id = create_project(&mut store, draft("Diwali Launch")).unwrap();

        update_project(
            &mut store,
            &id,
            ProjectUpdate {
                status: Some(ProjectStatus::Ongoing),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(
            read_project(&store, &id).unwrap().status,
            ProjectStatus::Ongoing
        );
    }

    #[test]
    fn test_projects_for_member() {
        let mut store = Store::new();
        let mut assigned = draft("Diwali Launch");
        assigned.assigned_members = vec!["member-1".to_string()];
        create_project(&mut store, assigned).unwrap();
        create_project(&mut store, draft("Holi Promo")).unwrap();

        assert_eq!(projects_for_member(&store, "member-1").len(), 1);
        assert!(projects_for_member(&store, "member-2").is_empty());
    }
}
