use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::metadata::Metadata;

/// Client document (CRM record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Contact or organisation name
    pub name: String,

    pub email: String,

    pub company: Option<String>,

    pub phone: Option<String>,

    pub address: Option<String>,

    /// Free-form relationship notes
    pub notes: Option<String>,

    /// Extensible metadata storage
    pub metadata: Metadata,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Create a new Client with the given ID, name and email
    pub fn new(id: String, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            company: None,
            phone: None,
            address: None,
            notes: None,
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive substring match over name, email and company
    ///
    /// Expects the query already lowercased; search lowercases once per call,
    /// not per document.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.email.to_lowercase().contains(query_lower)
            || self
                .company
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(query_lower))
    }
}
