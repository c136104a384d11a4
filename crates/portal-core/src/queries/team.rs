//! Per-member and per-department workload rollups

use serde::Serialize;

use crate::errors::Result;
use crate::model::TaskStatus;
use crate::ops::Store;

/// Workload summary for one member
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub member_id: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub in_progress_tasks: usize,
    pub total_projects: usize,
    pub active_projects: usize,
}

/// Workload summary for one department
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub department: String,
    pub total_members: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub total_projects: usize,
    pub active_projects: usize,
}

/// Compute the workload summary for a member
///
/// # Errors
/// * `MemberNotFound` - If the member doesn't exist
pub fn member_stats(store: &Store, member_id: &str) -> Result<MemberStats> {
    store.get_member(member_id)?;

    let tasks: Vec<_> = store
        .list_tasks()
        .into_iter()
        .filter(|t| t.is_assigned_to(member_id))
        .collect();
    let projects: Vec<_> = store
        .list_projects()
        .into_iter()
        .filter(|p| p.has_member(member_id))
        .collect();

    Ok(MemberStats {
        member_id: member_id.to_string(),
        total_tasks: tasks.len(),
        completed_tasks: tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count(),
        pending_tasks: tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .count(),
        in_progress_tasks: tasks
            .iter()
            .filter(|t| t.status == TaskStatus::InProgress)
            .count(),
        total_projects: projects.len(),
        active_projects: projects.iter().filter(|p| p.is_active()).count(),
    })
}

/// Compute the workload summary for a department
///
/// Tasks count when assigned to any member of the department; projects
/// count when any department member is on them. An unknown department
/// yields an all-zero summary rather than an error.
pub fn department_stats(store: &Store, department: &str) -> DepartmentStats {
    let member_ids: Vec<&str> = store
        .list_members()
        .into_iter()
        .filter(|m| m.in_department(department))
        .map(|m| m.id.as_str())
        .collect();

    let tasks: Vec<_> = store
        .list_tasks()
        .into_iter()
        .filter(|t| member_ids.iter().any(|m| t.is_assigned_to(m)))
        .collect();
    let projects: Vec<_> = store
        .list_projects()
        .into_iter()
        .filter(|p| member_ids.iter().any(|m| p.has_member(m)))
        .collect();

    DepartmentStats {
        department: department.to_string(),
        total_members: member_ids.len(),
        total_tasks: tasks.len(),
        completed_tasks: tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count(),
        total_projects: projects.len(),
        active_projects: projects.iter().filter(|p| p.is_active()).count(),
    }
}
