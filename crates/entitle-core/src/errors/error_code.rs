//! Stable error codes, used in logs and captured error payloads.

pub const SCHEMA_NOT_READY: &str = "SCHEMA_NOT_READY";
pub const LOOKUP_FAILED: &str = "LOOKUP_FAILED";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONFIG_READ_FAILED: &str = "CONFIG_READ_FAILED";
pub const CONFIG_PARSE_FAILED: &str = "CONFIG_PARSE_FAILED";
pub const CONFIG_INVALID_VALUE: &str = "CONFIG_INVALID_VALUE";
pub const RUNTIME_ALREADY_INITIALIZED: &str = "RUNTIME_ALREADY_INITIALIZED";

/// Implemented by every error enum in the workspace.
pub trait EntitlementErrorCode {
    fn error_code(&self) -> &'static str;
}
