//! Outcome of a failed license lookup.
//!
//! The cache needs to tell "the license table does not exist yet" apart from
//! every other failure: the first is skipped silently, the second is reported.

use super::error_code::{self, EntitlementErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Backing storage not provisioned yet (e.g. a migration is in flight).
    #[error("License storage not provisioned: table '{table}' does not exist")]
    SchemaNotReady { table: String },

    /// Any other failure while looking up a license.
    #[error("License lookup failed: {message}")]
    Failure { message: String },
}

impl LookupError {
    pub fn schema_not_ready(table: impl Into<String>) -> Self {
        Self::SchemaNotReady {
            table: table.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Transient conditions are retried silently on the next call.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::SchemaNotReady { .. })
    }
}

impl EntitlementErrorCode for LookupError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SchemaNotReady { .. } => error_code::SCHEMA_NOT_READY,
            Self::Failure { .. } => error_code::LOOKUP_FAILED,
        }
    }
}
