//! Seed Format v0 schema
//!
//! A seed file is YAML declaring the bootstrap data a fresh portal
//! database starts with: team members, chatbot FAQ entries and the
//! festival calendar. Live collections (clients, projects, invoices)
//! are never seeded.

use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level seed document
#[derive(Debug, Clone, Deserialize)]
pub struct SeedV0 {
    pub schema_version: u32,
    pub portal: PortalMeta,
    #[serde(default)]
    pub members: Vec<SeedMember>,
    #[serde(default)]
    pub faqs: Vec<SeedFaq>,
    #[serde(default)]
    pub festivals: Vec<SeedFestival>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortalMeta {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedMember {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Role string, validated against the Role enum at parse time
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedFaq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedFestival {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub marketing_ideas: Vec<String>,
}
