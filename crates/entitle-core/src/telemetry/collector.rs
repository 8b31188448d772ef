//! Error collectors: out-of-band reporting of unexpected lookup failures.
//! Fire-and-forget: capturing never fails and never blocks the caller for long.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::config::ObservabilityConfig;
use crate::errors::{EntitlementErrorCode, LookupError};

/// Receives errors the caller has already absorbed.
pub trait ErrorCollector: Send + Sync {
    fn capture(&self, error: &LookupError);
}

impl<T: ErrorCollector + ?Sized> ErrorCollector for Arc<T> {
    fn capture(&self, error: &LookupError) {
        (**self).capture(error)
    }
}

/// Logs captured errors at `error` level and keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorCollector;

impl ErrorCollector for TracingErrorCollector {
    fn capture(&self, error: &LookupError) {
        tracing::error!(code = error.error_code(), error = %error, "captured entitlement error");
    }
}

/// A captured error, ready to ship to an external tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedError {
    pub code: String,
    pub message: String,
    /// Unix seconds.
    pub captured_at: u64,
}

/// Buffers captured errors in memory until drained.
pub struct BufferedErrorCollector {
    buffer: Mutex<Vec<CapturedError>>,
    capacity: usize,
}

impl BufferedErrorCollector {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
            capacity,
        }
    }

    pub fn from_config(config: &ObservabilityConfig) -> Self {
        Self::new(config.effective_error_buffer_capacity())
    }

    /// Take all buffered errors.
    pub fn drain(&self) -> Vec<CapturedError> {
        if let Ok(mut buf) = self.buffer.lock() {
            std::mem::take(&mut *buf)
        } else {
            Vec::new()
        }
    }

    pub fn pending_count(&self) -> usize {
        self.buffer.lock().map(|b| b.len()).unwrap_or(0)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drain and serialize to a JSON array. `None` when nothing is buffered.
    pub fn serialize_batch(&self) -> Option<String> {
        let errors = self.drain();
        if errors.is_empty() {
            return None;
        }
        serde_json::to_string(&errors).ok()
    }
}

impl ErrorCollector for BufferedErrorCollector {
    fn capture(&self, error: &LookupError) {
        tracing::error!(code = error.error_code(), error = %error, "captured entitlement error");

        let captured = CapturedError {
            code: error.error_code().to_string(),
            message: error.to_string(),
            captured_at: current_unix_time(),
        };

        if let Ok(mut buf) = self.buffer.lock() {
            // Drop new errors once full.
            if buf.len() < self.capacity {
                buf.push(captured);
            }
        }
    }
}

fn current_unix_time() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
