//! Deployment mode configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HOSTED_DEPLOYMENT;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Vendor-hosted deployment. Default: true.
    pub hosted: Option<bool>,
}

impl DeploymentConfig {
    pub fn effective_hosted(&self) -> bool {
        self.hosted.unwrap_or(DEFAULT_HOSTED_DEPLOYMENT)
    }
}
