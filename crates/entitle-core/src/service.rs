//! EntitlementService: the two caches behind one injectable object.
//!
//! Built once at process start and passed by reference. Tests build their own
//! instance instead of touching process-wide state.

use std::sync::Arc;

use crate::config::EntitlementConfig;
use crate::deployment::DeploymentModeCache;
use crate::licensing::{License, LicenseEntitlementCache};
use crate::telemetry::ErrorCollector;
use crate::traits::ILicenseStore;

#[derive(Debug)]
pub struct EntitlementService {
    deployment: DeploymentModeCache,
    licensing: LicenseEntitlementCache,
}

impl EntitlementService {
    pub fn new(
        config: &EntitlementConfig,
        store: Arc<dyn ILicenseStore>,
        collector: Arc<dyn ErrorCollector>,
    ) -> Self {
        Self {
            deployment: DeploymentModeCache::from_config(&config.deployment),
            licensing: LicenseEntitlementCache::new(store, collector),
        }
    }

    pub fn deployment(&self) -> &DeploymentModeCache {
        &self.deployment
    }

    pub fn licensing(&self) -> &LicenseEntitlementCache {
        &self.licensing
    }

    pub fn is_hosted_deployment(&self) -> bool {
        self.deployment.is_hosted_deployment()
    }

    pub fn get_valid_license(&self) -> Option<Arc<License>> {
        self.licensing.get_valid_license()
    }
}
