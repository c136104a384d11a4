use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::client_ops::{validate_email, validate_name};
use super::store::Store;
use crate::errors::Result;
use crate::model::{Member, Metadata, Role};

/// Fields for creating a team member
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Partial update for a member; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// Create a new team member
///
/// # Returns
/// The ID of the newly created member
///
/// # Errors
/// * `InvalidName` - If name is empty or whitespace-only
/// * `InvalidEmail` - If email is blank or has no '@'
pub fn create_member(store: &mut Store, draft: MemberDraft) -> Result<String> {
    validate_name(&draft.name)?;
    validate_email(&draft.email)?;

    let member_id = Uuid::now_v7().to_string();
    let mut member = Member::new(member_id.clone(), draft.name, draft.email, draft.role);
    member.department = draft.department;
    member.phone = draft.phone;
    member.join_date = draft.join_date;
    member.metadata = draft.metadata;

    store.insert_member(member);
    Ok(member_id)
}

/// Read a member by ID
///
/// # Errors
/// * `MemberNotFound` - If the member doesn't exist
pub fn read_member<'a>(store: &'a Store, id: &str) -> Result<&'a Member> {
    store.get_member(id)
}

/// Update a member with a partial payload
///
/// # Errors
/// * `MemberNotFound` - If the member doesn't exist
/// * `InvalidName` / `InvalidEmail` - If a provided field fails validation
pub fn update_member(store: &mut Store, id: &str, update: MemberUpdate) -> Result<()> {
    if let Some(ref name) = update.name {
        validate_name(name)?;
    }
    if let Some(ref email) = update.email {
        validate_email(email)?;
    }

    let member = store.get_member_mut(id)?;

    if let Some(name) = update.name {
        member.name = name;
    }
    if let Some(email) = update.email {
        member.email = email;
    }
    if let Some(role) = update.role {
        member.role = role;
    }
    if let Some(department) = update.department {
        member.department = Some(department);
    }
    if let Some(phone) = update.phone {
        member.phone = Some(phone);
    }
    if let Some(join_date) = update.join_date {
        member.join_date = Some(join_date);
    }
    if let Some(metadata) = update.metadata {
        member.metadata.merge(metadata);
    }
    member.updated_at = Utc::now();

    Ok(())
}

/// Delete a member (hard delete)
///
/// Tasks and salary records keep their member ID references; the portal
/// resolves dangling references by linear scan on read.
///
/// # Errors
/// * `MemberNotFound` - If the member doesn't exist
pub fn delete_member(store: &mut Store, id: &str) -> Result<()> {
    store.remove_member(id)?;
    Ok(())
}

/// List members belonging to one department (case-insensitive)
pub fn members_in_department<'a>(store: &'a Store, department: &str) -> Vec<&'a Member> {
    store
        .list_members()
        .into_iter()
        .filter(|m| m.in_department(department))
        .collect()
}
