//! `ILicenseStore` trait: the backing store the license cache resolves against.
//!
//! Implemented by `entitle-storage::SqliteLicenseStore` for SQLite and by
//! `LicenseStoreStub` for tests.

use std::sync::Arc;

use crate::errors::LookupError;
use crate::licensing::License;

/// Read-only access to license records.
pub trait ILicenseStore: Send + Sync {
    /// The first currently-valid license, if any.
    ///
    /// Must return `LookupError::SchemaNotReady` when the license table has not
    /// been provisioned yet, and `LookupError::Failure` for anything else.
    fn first_valid_license(&self) -> Result<Option<License>, LookupError>;
}

// ─── Smart pointer blanket impls ────────────────────────────────────

impl<T: ILicenseStore + ?Sized> ILicenseStore for Arc<T> {
    fn first_valid_license(&self) -> Result<Option<License>, LookupError> {
        (**self).first_valid_license()
    }
}

impl<T: ILicenseStore + ?Sized> ILicenseStore for Box<T> {
    fn first_valid_license(&self) -> Result<Option<License>, LookupError> {
        (**self).first_valid_license()
    }
}
