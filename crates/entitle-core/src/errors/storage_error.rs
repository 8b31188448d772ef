//! Storage-layer errors for SQLite operations.

use super::error_code::{self, EntitlementErrorCode};
use super::LookupError;

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("Table '{table}' is not provisioned")]
    NotProvisioned { table: String },
}

impl EntitlementErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::NotProvisioned { .. } => error_code::SCHEMA_NOT_READY,
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
        }
    }
}

impl From<StorageError> for LookupError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotProvisioned { table } => LookupError::SchemaNotReady { table },
            other => LookupError::Failure {
                message: other.to_string(),
            },
        }
    }
}
