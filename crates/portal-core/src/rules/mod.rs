//! Cross-document integrity rules

pub mod validation;
