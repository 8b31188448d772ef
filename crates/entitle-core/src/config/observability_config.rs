//! Logging and error capture configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ERROR_BUFFER_CAPACITY, DEFAULT_LOG_FILTER};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive. `RUST_LOG` takes precedence. Default: "info".
    pub log_filter: Option<String>,
    /// Emit JSON log lines instead of the human format. Default: false.
    pub json_logs: Option<bool>,
    /// Max errors held by `BufferedErrorCollector`. Default: 1000.
    pub error_buffer_capacity: Option<usize>,
}

impl ObservabilityConfig {
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn effective_json_logs(&self) -> bool {
        self.json_logs.unwrap_or(false)
    }

    pub fn effective_error_buffer_capacity(&self) -> usize {
        self.error_buffer_capacity
            .unwrap_or(DEFAULT_ERROR_BUFFER_CAPACITY)
    }
}
