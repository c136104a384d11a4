use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use super::store::Store;
use crate::errors::{PortalError, Result};
use crate::model::{Client, Metadata};

/// Fields for creating a client
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Partial update for a client; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// Validate a contact email; the portal only requires the bare shape
pub(crate) fn validate_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        return Err(PortalError::InvalidEmail {
            email: email.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PortalError::InvalidName {
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Create a new client
///
/// Automatically generates a UUID v7 for the client ID.
///
/// # Returns
/// The ID of the newly created client
///
/// # Errors
/// * `InvalidName` - If name is empty or whitespace-only
/// * `InvalidEmail` - If email is blank or has no '@'
pub fn create_client(store: &mut Store, draft: ClientDraft) -> Result<String> {
    validate_name(&draft.name)?;
    validate_email(&draft.email)?;

    let client_id = Uuid::now_v7().to_string();
    let mut client = Client::new(client_id.clone(), draft.name, draft.email);
    client.company = draft.company;
    client.phone = draft.phone;
    client.address = draft.address;
    client.notes = draft.notes;
    client.metadata = draft.metadata;

    store.insert_client(client);
    Ok(client_id)
}

/// Read a client by ID
///
/// # Errors
/// * `ClientNotFound` - If the client doesn't exist
pub fn read_client<'a>(store: &'a Store, id: &str) -> Result<&'a Client> {
    store.get_client(id)
}

/// Update a client with a partial payload
///
/// Provided metadata is merged into the existing bag, not replaced.
///
/// # Errors
/// * `ClientNotFound` - If the client doesn't exist
/// * `InvalidName` / `InvalidEmail` - If a provided field fails validation
pub fn update_client(store: &mut Store, id: &str, update: ClientUpdate) -> Result<()> {
    if let Some(ref name) = update.name {
        validate_name(name)?;
    }
    if let Some(ref email) = update.email {
        validate_email(email)?;
    }

    let client = store.get_client_mut(id)?;

    if let Some(name) = update.name {
        client.name = name;
    }
    if let Some(email) = update.email {
        client.email = email;
    }
    if let Some(company) = update.company {
        client.company = Some(company);
    }
    if let Some(phone) = update.phone {
        client.phone = Some(phone);
    }
    if let Some(address) = update.address {
        client.address = Some(address);
    }
    if let Some(notes) = update.notes {
        client.notes = Some(notes);
    }
    if let Some(metadata) = update.metadata {
        client.metadata.merge(metadata);
    }
    client.updated_at = Utc::now();

    Ok(())
}

/// Delete a client (hard delete)
///
/// # Errors
/// * `ClientNotFound` - If the client doesn't exist
pub fn delete_client(store: &mut Store, id: &str) -> Result<()> {
    store.remove_client(id)?;
    Ok(())
}

/// Case-insensitive substring search over name, email and company
///
/// A blank query returns the full client list.
pub fn search_clients<'a>(store: &'a Store, query: &str) -> Vec<&'a Client> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return store.list_clients();
    }
    store
        .list_clients()
        .into_iter()
        .filter(|c| c.matches_query(&query_lower))
        .collect()
}
