//! LicenseEntitlementCache: resolve once, reuse for the life of the process.
//!
//! Only a completed lookup (hit or confirmed miss) advances the state.
//! "Not provisioned" is skipped silently, any other failure is reported to
//! the error collector, and both leave the state `Unknown` so the next call
//! retries.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::errors::{EntitlementErrorCode, LookupError};
use crate::telemetry::ErrorCollector;
use crate::traits::ILicenseStore;

use super::license::License;
use super::state::{Entitlement, LicenseEntitlementState};

/// Thread-safe license entitlement cache.
pub struct LicenseEntitlementCache {
    entitlement: RwLock<Entitlement>,
    store: Arc<dyn ILicenseStore>,
    collector: Arc<dyn ErrorCollector>,
}

impl LicenseEntitlementCache {
    /// Create a cache in the `Unknown` state.
    pub fn new(store: Arc<dyn ILicenseStore>, collector: Arc<dyn ErrorCollector>) -> Self {
        Self {
            entitlement: RwLock::new(Entitlement::Unknown),
            store,
            collector,
        }
    }

    /// The currently valid license, if one is cached or can be resolved now.
    ///
    /// Never fails: lookup problems yield `None` and leave the state unresolved.
    pub fn get_valid_license(&self) -> Option<Arc<License>> {
        match &*self.read() {
            Entitlement::Licensed(license) => return Some(Arc::clone(license)),
            Entitlement::Unlicensed => return None,
            Entitlement::Unknown => {}
        }
        self.resolve()
    }

    /// Convenience for gating: `get_valid_license().is_some()`.
    pub fn is_licensed(&self) -> bool {
        self.get_valid_license().is_some()
    }

    pub fn state(&self) -> LicenseEntitlementState {
        self.read().state()
    }

    /// Force the cached state, bypassing resolution.
    ///
    /// A supplied license means `Licensed`. Without one, `Some(false)` means
    /// `Unlicensed` and anything else means `Unknown` (resolve again on the
    /// next call). Test harnesses only.
    pub fn reset_for_testing(&self, licensed: Option<bool>, license: Option<License>) {
        *self.write() = Entitlement::from_parts(licensed, license);
    }

    fn resolve(&self) -> Option<Arc<License>> {
        match self.store.first_valid_license() {
            Ok(found) => self.commit(found),
            Err(err) if err.is_transient() => {
                debug!(error = %err, "license storage not ready, skipping resolution");
                None
            }
            Err(err) => {
                warn!(code = err.error_code(), error = %err, "license lookup failed");
                self.collector.capture(&err);
                None
            }
        }
    }

    /// Commit a lookup result unless another caller already committed one.
    /// The first committed verdict wins.
    fn commit(&self, found: Option<License>) -> Option<Arc<License>> {
        let mut guard = self.write();
        if let Entitlement::Unknown = *guard {
            *guard = match found {
                Some(license) => Entitlement::Licensed(Arc::new(license)),
                None => Entitlement::Unlicensed,
            };
            info!(state = guard.state().as_str(), "license entitlement resolved");
        }
        match &*guard {
            Entitlement::Licensed(license) => Some(Arc::clone(license)),
            _ => None,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Entitlement> {
        self.entitlement.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entitlement> {
        self.entitlement.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for LicenseEntitlementCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseEntitlementCache")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
