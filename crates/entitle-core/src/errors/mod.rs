//! Error types for every entitlement subsystem.
//! Each enum carries a stable string code via `EntitlementErrorCode`.

pub mod config_error;
pub mod error_code;
pub mod lookup_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::EntitlementErrorCode;
pub use lookup_error::LookupError;
pub use storage_error::StorageError;
