//! License storage configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DB_PATH;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database holding license records.
    /// Default: "entitlements.db".
    pub db_path: Option<String>,
}

impl StorageConfig {
    pub fn effective_db_path(&self) -> &str {
        self.db_path.as_deref().unwrap_or(DEFAULT_DB_PATH)
    }
}
