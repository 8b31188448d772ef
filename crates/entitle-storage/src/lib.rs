//! # entitle-storage
//!
//! SQLite license store for the entitlement caches.
//! One serialized connection (WAL mode), forward-only schema migrations,
//! and the `ILicenseStore` implementation the license cache queries.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod store;

use std::path::Path;
use std::sync::Arc;

use entitle_core::config::EntitlementConfig;
use entitle_core::errors::StorageError;
use entitle_core::telemetry::ErrorCollector;
use entitle_core::EntitlementService;
use tracing::info;

pub use connection::LicenseDatabase;
pub use store::SqliteLicenseStore;

/// Open the configured license database (running migrations) and build a
/// ready `EntitlementService` on top of it.
pub fn open_service(
    config: &EntitlementConfig,
    collector: Arc<dyn ErrorCollector>,
) -> Result<EntitlementService, StorageError> {
    let path = config.storage.effective_db_path();
    let db = LicenseDatabase::open(Path::new(path))?;
    info!(db_path = path, "license store opened");
    let store = SqliteLicenseStore::new(Arc::new(db));
    Ok(EntitlementService::new(config, Arc::new(store), collector))
}

/// Convert a rusqlite error into a `StorageError`.
///
/// A missing table becomes `NotProvisioned` so callers can tell a schema that
/// is still being migrated apart from a real failure.
pub(crate) fn sqe(e: rusqlite::Error) -> StorageError {
    let message = e.to_string();
    match missing_table(&message) {
        Some(table) => StorageError::NotProvisioned { table },
        None => StorageError::SqliteError { message },
    }
}

/// Table name from an SQLite "no such table: main.licenses" message.
fn missing_table(message: &str) -> Option<String> {
    let rest = message.split("no such table: ").nth(1)?;
    let name = rest.split_whitespace().next().unwrap_or(rest);
    let name = name.rsplit('.').next().unwrap_or(name);
    Some(name.to_string())
}
