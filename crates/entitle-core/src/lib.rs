//! # entitle-core
//!
//! Entitlement resolution for the analytics platform.
//! Answers two questions cheaply and repeatedly: is this the hosted
//! deployment, and is a valid commercial license installed.
//! Defines the caches, the license store seam, errors, config and tracing.
//! `entitle-storage` provides the SQLite-backed store.

pub mod config;
pub mod constants;
pub mod deployment;
pub mod errors;
pub mod licensing;
pub mod runtime;
pub mod service;
pub mod telemetry;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EntitlementConfig;
pub use deployment::{DeploymentFlag, DeploymentModeCache};
pub use errors::error_code::EntitlementErrorCode;
pub use errors::LookupError;
pub use licensing::{License, LicenseEntitlementCache, LicenseEntitlementState};
pub use service::EntitlementService;
pub use telemetry::{BufferedErrorCollector, ErrorCollector, TracingErrorCollector};
pub use traits::ILicenseStore;
