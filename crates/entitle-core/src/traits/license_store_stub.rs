//! `LicenseStoreStub`: in-memory test double for `ILicenseStore`.
//!
//! Returns queued responses first, then a default response. Counts every
//! query so tests can assert how often the cache went to the store.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::constants::LICENSES_TABLE;
use crate::errors::LookupError;
use crate::licensing::License;

use super::license_store::ILicenseStore;

type Response = Result<Option<License>, LookupError>;

pub struct LicenseStoreStub {
    queued: Mutex<VecDeque<Response>>,
    default: Mutex<Response>,
    queries: AtomicUsize,
}

impl LicenseStoreStub {
    /// A store with no licenses.
    pub fn new() -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            default: Mutex::new(Ok(None)),
            queries: AtomicUsize::new(0),
        }
    }

    /// A store that always returns `license`.
    pub fn returning(license: License) -> Self {
        let stub = Self::new();
        stub.set_default(Ok(Some(license)));
        stub
    }

    /// A store whose license table does not exist.
    pub fn unprovisioned() -> Self {
        let stub = Self::new();
        stub.set_default(Err(LookupError::schema_not_ready(LICENSES_TABLE)));
        stub
    }

    /// Response used once the queue is empty.
    pub fn set_default(&self, response: Response) {
        *self.default.lock().unwrap_or_else(PoisonError::into_inner) = response;
    }

    /// Queue a one-shot response.
    pub fn push_response(&self, response: Response) {
        self.queued.lock().unwrap_or_else(PoisonError::into_inner).push_back(response);
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Default for LicenseStoreStub {
    fn default() -> Self {
        Self::new()
    }
}

impl ILicenseStore for LicenseStoreStub {
    fn first_valid_license(&self) -> Result<Option<License>, LookupError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if let Some(response) = self.queued.lock().unwrap_or_else(PoisonError::into_inner).pop_front() {
            return response;
        }
        self.default.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_responses_come_first() {
        let stub = LicenseStoreStub::returning(License::new(9, "k", "scale", 10));
        stub.push_response(Err(LookupError::failure("once")));
        assert!(stub.first_valid_license().is_err());
        assert_eq!(stub.first_valid_license().unwrap().unwrap().id, 9);
        assert_eq!(stub.query_count(), 2);
    }

    #[test]
    fn unprovisioned_reports_schema_not_ready() {
        let stub = LicenseStoreStub::unprovisioned();
        let err = stub.first_valid_license().unwrap_err();
        assert!(err.is_transient());
    }
}
