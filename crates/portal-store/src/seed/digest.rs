//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds for reproducibility

use crate::seed::format_v0::SeedV0;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Canonical representation of a seed for digest calculation
#[derive(Debug, Clone, Serialize)]
struct CanonicalSeed {
    schema_version: u32,
    portal_name: String,
    members: Vec<CanonicalMember>,
    faqs: Vec<CanonicalFaq>,
    festivals: Vec<CanonicalFestival>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalMember {
    id: String,
    name: String,
    email: String,
    role: String,
    department: Option<String>,
    phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalFaq {
    id: String,
    question: String,
    answer: String,
    category: String,
    module: Option<String>,
    keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalFestival {
    id: String,
    name: String,
    date: String,
    description: Option<String>,
    marketing_ideas: Vec<String>,
}

/// Compute a stable digest for a seed
///
/// Returns a SHA256 hex digest of the canonicalized seed representation
pub fn compute_seed_digest(seed: &SeedV0) -> String {
    let canonical = canonicalize_seed(seed);

    let json = serde_json::to_string(&canonical).expect("Failed to serialize canonical seed");

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    hex::encode(result)
}

/// Canonicalize a seed for deterministic digest calculation
///
/// Entries are sorted by ID so the digest is independent of file order
fn canonicalize_seed(seed: &SeedV0) -> CanonicalSeed {
    let mut members: Vec<CanonicalMember> = seed
        .members
        .iter()
        .map(|m| CanonicalMember {
            id: m.id.clone(),
            name: m.name.clone(),
            email: m.email.clone(),
            role: m.role.clone(),
            department: m.department.clone(),
            phone: m.phone.clone(),
        })
        .collect();
    members.sort();

    let mut faqs: Vec<CanonicalFaq> = seed
        .faqs
        .iter()
        .map(|f| CanonicalFaq {
            id: f.id.clone(),
            question: f.question.clone(),
            answer: f.answer.clone(),
            category: f.category.clone(),
            module: f.module.clone(),
            keywords: f.keywords.clone(),
        })
        .collect();
    faqs.sort();

    let mut festivals: Vec<CanonicalFestival> = seed
        .festivals
        .iter()
        .map(|f| CanonicalFestival {
            id: f.id.clone(),
            name: f.name.clone(),
            date: f.date.to_string(),
            description: f.description.clone(),
            marketing_ideas: f.marketing_ideas.clone(),
        })
        .collect();
    festivals.sort();

    CanonicalSeed {
        schema_version: seed.schema_version,
        portal_name: seed.portal.name.clone(),
        members,
        faqs,
        festivals,
    }
}
