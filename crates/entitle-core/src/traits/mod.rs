//! Shared traits used across entitlement crates.

pub mod license_store;
pub mod license_store_stub;

pub use license_store::ILicenseStore;
pub use license_store_stub::LicenseStoreStub;
