//! `SqliteLicenseStore`: `ILicenseStore` over a `LicenseDatabase`.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use entitle_core::errors::LookupError;
use entitle_core::licensing::License;
use entitle_core::traits::ILicenseStore;

use crate::connection::LicenseDatabase;
use crate::queries::licenses;

/// Clock returning unix seconds.
pub type Clock = fn() -> i64;

fn system_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[derive(Debug)]
pub struct SqliteLicenseStore {
    db: Arc<LicenseDatabase>,
    clock: Clock,
}

impl SqliteLicenseStore {
    pub fn new(db: Arc<LicenseDatabase>) -> Self {
        Self::with_clock(db, system_now)
    }

    /// Evaluate validity against a custom clock.
    pub fn with_clock(db: Arc<LicenseDatabase>, clock: Clock) -> Self {
        Self { db, clock }
    }

    pub fn database(&self) -> &Arc<LicenseDatabase> {
        &self.db
    }
}

impl ILicenseStore for SqliteLicenseStore {
    fn first_valid_license(&self) -> Result<Option<License>, LookupError> {
        let now = (self.clock)();
        self.db
            .with_conn(|conn| licenses::first_valid_license(conn, now))
            .map_err(LookupError::from)
    }
}
