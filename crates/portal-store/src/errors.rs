//! Error handling for portal-store
//!
//! Wraps portal-core's OpError with store-specific helpers

use portal_core::errors::{ErrorKind, OpError};

/// Result type alias using OpError
pub type Result<T> = std::result::Result<T, OpError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> OpError {
    OpError::new(ErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> OpError {
    OpError::new(ErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> OpError {
    OpError::new(ErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create an error for a stored document that no longer deserializes
pub fn corrupt_document(collection: &str, id: &str, reason: &str) -> OpError {
    OpError::new(ErrorKind::Serialization)
        .with_op("hydrate")
        .with_collection(collection.to_string())
        .with_entity_id(id.to_string())
        .with_message(reason.to_string())
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> OpError {
    OpError::new(ErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> OpError {
    OpError::new(ErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
