use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::store::Store;
use crate::errors::{PortalError, Result};
use crate::model::{Metadata, Task, TaskPriority, TaskStatus};

/// Fields for creating a task
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub assigned_by: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Partial update for a task; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// Filter for task listings; `None` fields match everything
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(PortalError::InvalidTitle {
            reason: "Title cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

fn validate_estimated_hours(hours: f64) -> Result<()> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(PortalError::InvalidAmount {
            reason: "estimated hours must be a non-negative finite number".to_string(),
        });
    }
    Ok(())
}

/// Create a new task in `pending` status
///
/// # Returns
/// The ID of the newly created task
///
/// # Errors
/// * `InvalidTitle` - If title is empty or whitespace-only
/// * `InvalidAmount` - If estimated hours are negative or non-finite
pub fn create_task(store: &mut Store, draft: TaskDraft) -> Result<String> {
    validate_title(&draft.title)?;
    if let Some(hours) = draft.estimated_hours {
        validate_estimated_hours(hours)?;
    }

    let task_id = Uuid::now_v7().to_string();
    let mut task = Task::new(task_id.clone(), draft.title);
    task.description = draft.description;
    task.priority = draft.priority;
    task.project_id = draft.project_id;
    task.assigned_to = draft.assigned_to;
    task.assigned_by = draft.assigned_by;
    task.department = draft.department;
    task.due_date = draft.due_date;
    task.estimated_hours = draft.estimated_hours;
    task.tags = draft.tags;
    task.metadata = draft.metadata;

    store.insert_task(task);
    Ok(task_id)
}

/// Read a task by ID
///
/// # Errors
/// * `TaskNotFound` - If the task doesn't exist
pub fn read_task<'a>(store: &'a Store, id: &str) -> Result<&'a Task> {
    store.get_task(id)
}

/// Update a task with a partial payload
///
/// Status changes go through `Task::set_status` so completion timestamps
/// stay consistent.
///
/// # Errors
/// * `TaskNotFound` - If the task doesn't exist
/// * `InvalidTitle` - If a provided title fails validation
/// * `InvalidAmount` - If provided estimated hours fail validation
pub fn update_task(store: &mut Store, id: &str, update: TaskUpdate) -> Result<()> {
    if let Some(ref title) = update.title {
        validate_title(title)?;
    }
    if let Some(hours) = update.estimated_hours {
        validate_estimated_hours(hours)?;
    }

    let task = store.get_task_mut(id)?;

    if let Some(title) = update.title {
        task.title = title;
    }
    if let Some(description) = update.description {
        task.description = Some(description);
    }
    if let Some(priority) = update.priority {
        task.priority = priority;
    }
    if let Some(department) = update.department {
        task.department = Some(department);
    }
    if let Some(due_date) = update.due_date {
        task.due_date = Some(due_date);
    }
    if let Some(estimated_hours) = update.estimated_hours {
        task.estimated_hours = Some(estimated_hours);
    }
    if let Some(tags) = update.tags {
        task.tags = tags;
    }
    if let Some(metadata) = update.metadata {
        task.metadata.merge(metadata);
    }
    if let Some(status) = update.status {
        task.set_status(status);
    } else {
        task.updated_at = Utc::now();
    }

    Ok(())
}

/// Delete a task (hard delete)
///
/// # Errors
/// * `TaskNotFound` - If the task doesn't exist
pub fn delete_task(store: &mut Store, id: &str) -> Result<()> {
    store.remove_task(id)?;
    Ok(())
}

/// Assign (or reassign) a task to a member
///
/// The assignee must exist; assignment is what drives notifications, so a
/// dangling recipient is rejected here rather than surfacing later.
///
/// # Errors
/// * `TaskNotFound` - If the task doesn't exist
/// * `MemberNotFound` - If the assignee doesn't exist
pub fn assign_task(
    store: &mut Store,
    task_id: &str,
    member_id: &str,
    assigned_by: Option<String>,
) -> Result<()> {
    store.get_member(member_id)?;

    let task = store.get_task_mut(task_id)?;
    task.assigned_to = Some(member_id.to_string());
    task.assigned_by = assigned_by;
    task.updated_at = Utc::now();

    Ok(())
}

/// List tasks matching a filter, newest first
pub fn filter_tasks<'a>(store: &'a Store, filter: &TaskFilter) -> Vec<&'a Task> {
    store
        .list_tasks()
        .into_iter()
        .filter(|t| filter.status.is_none_or(|s| t.status == s))
        .filter(|t| {
            filter
                .assigned_to
                .as_deref()
                .is_none_or(|m| t.is_assigned_to(m))
        })
        .filter(|t| {
            filter
                .project_id
                .as_deref()
                .is_none_or(|p| t.project_id.as_deref() == Some(p))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Member, Role};

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn seed_member(store: &mut Store, id: &str) {
        store.insert_member(Member::new(
            id.to_string(),
            "Asha Rao".to_string(),
            "asha@example.com".to_string(),
            Role::Member,
        ));
    }

    #[test]
    fn test_create_task_defaults() {
        let mut store = Store::new();
        let id = create_task(&mut store, draft("Draft brief")).unwrap();

        let task = read_task(&store, &id).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, TaskPriority::Medium);
    }

    #[test]
    fn test_create_task_carries_planning_fields() {
        let mut store = Store::new();
        let mut planned = draft("Design festival mailer");
        planned.department = Some("Design".to_string());
        planned.estimated_hours = Some(6.5);
        planned.tags = vec!["print".to_string(), "festive".to_string()];

        let id = create_task(&mut store, planned).unwrap();
        let task = read_task(&store, &id).unwrap();
        assert_eq!(task.department.as_deref(), Some("Design"));
        assert_eq!(task.estimated_hours, Some(6.5));
        assert_eq!(task.tags, vec!["print", "festive"]);
    }

    #[test]
    fn test_create_task_rejects_negative_estimated_hours() {
        let mut store = Store::new();
        let mut bad = draft("Design festival mailer");
        bad.estimated_hours = Some(-2.0);
        assert!(matches!(
            create_task(&mut store, bad),
            Err(PortalError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_create_task_rejects_empty_title() {
        let mut store = Store::new();
        assert!(matches!(
            create_task(&mut store, draft("  ")),
            Err(PortalError::InvalidTitle { .. })
        ));
    }

    #[test]
    fn test_update_task_status_stamps_completion() {
        let mut store = Store::new();
        let id = create_task(&mut store, draft("Draft brief")).unwrap();

        update_task(
            &mut store,
            &id,
            TaskUpdate {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        )
        .unwrap();

        let task = read_task(&store, &id).unwrap();
        assert!(task.is_completed());
        assert!(task.completed_at.is_some());
    }

    #[test]
    fn test_assign_task_requires_existing_member() {
        let mut store = Store::new();
        let id = create_task(&mut store, draft("Draft brief")).unwrap();

        assert!(matches!(
            assign_task(&mut store, &id, "ghost", None),
            Err(PortalError::MemberNotFound { .. })
        ));

        seed_member(&mut store, "member-1");
        assign_task(&mut store, &id, "member-1", Some("lead-1".to_string())).unwrap();

        let task = read_task(&store, &id).unwrap();
        assert!(task.is_assigned_to("member-1"));
        assert_eq!(task.assigned_by.as_deref(), Some("lead-1"));
    }

    #[test]
    fn test_filter_tasks() {
        let mut store = Store::new();
        seed_member(&mut store, "member-1");

        let a = create_task(&mut store, draft("Task A")).unwrap();
        let b = create_task(&mut store, draft("Task B")).unwrap();
        create_task(&mut store, draft("Task C")).unwrap();

        assign_task(&mut store, &a, "member-1", None).unwrap();
        assign_task(&mut store, &b, "member-1", None).unwrap();
        update_task(
            &mut store,
            &b,
            TaskUpdate {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        )
        .unwrap();

        let mine = filter_tasks(
            &store,
            &TaskFilter {
                assigned_to: Some("member-1".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(mine.len(), 2);

        let mine_completed = filter_tasks(
            &store,
            &TaskFilter {
                assigned_to: Some("member-1".to_string()),
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        );
        assert_eq!(mine_completed.len(), 1);
        assert_eq!(mine_completed[0].id, b);
    }
}
