//! Configuration for the entitlement resolver.
//! TOML on disk, every field optional, `effective_*` accessors supply defaults.

pub mod deployment_config;
pub mod observability_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::HOSTED_DEPLOYMENT_ENV;
use crate::errors::ConfigError;

pub use deployment_config::DeploymentConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EntitlementConfig {
    pub deployment: DeploymentConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl EntitlementConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load config from a file. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using the given variable lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(HOSTED_DEPLOYMENT_ENV) {
            let hosted = parse_bool_flag(&raw).ok_or_else(|| ConfigError::InvalidValue {
                field: HOSTED_DEPLOYMENT_ENV.to_string(),
                message: format!("expected a boolean, got '{raw}'"),
            })?;
            self.deployment.hosted = Some(hosted);
        }
        Ok(())
    }
}

/// Parse the usual spellings of a boolean flag.
pub fn parse_bool_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
