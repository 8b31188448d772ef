//! Migration runner: version tracking, forward-only, transactional per migration.

mod v001_licenses;

use entitle_core::errors::StorageError;
use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::sqe;

/// Total number of migrations.
pub const LATEST_VERSION: u32 = 1;

type MigrationFn = fn(&Connection) -> Result<(), StorageError>;

const MIGRATIONS: [(u32, &str, MigrationFn); 1] = [(1, "licenses", v001_licenses::migrate)];

/// Current schema version. 0 if the schema_version table doesn't exist yet.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    let exists: bool = conn
        .prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version'")
        .and_then(|mut stmt| stmt.exists([]))
        .map_err(sqe)?;

    if !exists {
        return Ok(0);
    }

    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(sqe)
}

/// Run all pending migrations, each in its own transaction.
/// Returns the number applied.
pub fn run_migrations(conn: &Connection) -> Result<u32, StorageError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )
    .map_err(sqe)?;

    let current = current_version(conn)?;
    if current >= LATEST_VERSION {
        debug!("license schema is up to date (v{current})");
        return Ok(0);
    }

    info!("running license migrations: v{current} → v{LATEST_VERSION}");

    let mut applied = 0;
    for &(version, name, migrate_fn) in &MIGRATIONS {
        if version <= current {
            continue;
        }

        conn.execute_batch("BEGIN IMMEDIATE").map_err(sqe)?;

        let result = migrate_fn(conn).and_then(|()| {
            conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
                .map_err(sqe)?;
            conn.execute_batch("COMMIT").map_err(sqe)
        });

        if let Err(e) = result {
            warn!("migration v{version:03} failed: {e}, rolling back");
            let _ = conn.execute_batch("ROLLBACK");
            return Err(StorageError::MigrationFailed {
                version,
                message: e.to_string(),
            });
        }

        info!("applied migration v{version:03}: {name}");
        applied += 1;
    }

    Ok(applied)
}
