//! Seed parser with validation
//!
//! Parses YAML and validates schema version, ID uniqueness, role strings
//! and basic field shapes before anything touches the database

#![allow(clippy::result_large_err)]

use crate::errors::{seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use portal_core::model::Role;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(&format!("Failed to read seed file: {}", e)))?;

    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

/// Validate a parsed seed
fn validate_seed(seed: &SeedV0) -> Result<()> {
    // Validate schema version
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    // IDs must be unique across the whole seed
    let mut ids = HashSet::new();
    let all_ids = seed
        .members
        .iter()
        .map(|m| &m.id)
        .chain(seed.faqs.iter().map(|f| &f.id))
        .chain(seed.festivals.iter().map(|f| &f.id));
    for id in all_ids {
        if !ids.insert(id) {
            return Err(seed_validation(&format!("Duplicate seed ID: {}", id)));
        }
    }

    for member in &seed.members {
        if member.name.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Member {} has an empty name",
                member.id
            )));
        }
        if !member.email.contains('@') {
            return Err(seed_validation(&format!(
                "Member {} has an invalid email: {}",
                member.id, member.email
            )));
        }
        if member.role.parse::<Role>().is_err() {
            return Err(seed_validation(&format!(
                "Member {} has an unknown role: {}",
                member.id, member.role
            )));
        }
    }

    for faq in &seed.faqs {
        if faq.question.trim().is_empty() || faq.answer.trim().is_empty() {
            return Err(seed_validation(&format!(
                "FAQ {} has an empty question or answer",
                faq.id
            )));
        }
    }

    for festival in &seed.festivals {
        if festival.name.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Festival {} has an empty name",
                festival.id
            )));
        }
    }

    Ok(())
}
