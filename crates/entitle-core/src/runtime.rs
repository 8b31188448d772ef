//! Process-wide `EntitlementService` slot via `OnceLock`, lock-free after
//! initialization.
//!
//! Optional: code that can take the service by reference should. The slot is
//! for call sites with no injection path (e.g. deep inside request handlers).

use std::sync::{Arc, OnceLock};

use crate::errors::error_code::{self, EntitlementErrorCode};
use crate::service::EntitlementService;

static RUNTIME: OnceLock<Arc<EntitlementService>> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("Entitlement runtime already initialized")]
    AlreadyInitialized,
}

impl EntitlementErrorCode for RuntimeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyInitialized => error_code::RUNTIME_ALREADY_INITIALIZED,
        }
    }
}

/// Install the process-wide service. Only the first call succeeds.
pub fn initialize(service: EntitlementService) -> Result<Arc<EntitlementService>, RuntimeError> {
    let service = Arc::new(service);
    RUNTIME
        .set(Arc::clone(&service))
        .map_err(|_| RuntimeError::AlreadyInitialized)?;
    tracing::info!("entitlement runtime initialized");
    Ok(service)
}

pub fn get() -> Option<Arc<EntitlementService>> {
    RUNTIME.get().cloned()
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}
