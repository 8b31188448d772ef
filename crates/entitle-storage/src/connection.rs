//! `LicenseDatabase`: one serialized SQLite connection.
//!
//! License reads are rare once the cache has resolved, so a single
//! mutex-guarded connection is enough; there is no read pool.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use entitle_core::errors::StorageError;
use rusqlite::Connection;
use tracing::debug;

use crate::migrations;
use crate::sqe;

/// Milliseconds a statement waits on a locked database before failing.
pub const BUSY_TIMEOUT_MS: u64 = 5_000;

pub struct LicenseDatabase {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl LicenseDatabase {
    /// Open a file-backed database and bring its schema up to date.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let db = Self::open_unmigrated(path)?;
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database with the full schema.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let db = Self::open_in_memory_unmigrated()?;
        db.migrate()?;
        Ok(db)
    }

    /// Open a file-backed database without running migrations.
    pub fn open_unmigrated(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(sqe)?;
        apply_pragmas(&conn)?;
        debug!(path = %path.display(), "opened license database");
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database without running migrations.
    pub fn open_in_memory_unmigrated() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(sqe)?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Run pending migrations. Returns how many were applied.
    pub fn migrate(&self) -> Result<u32, StorageError> {
        self.with_conn(migrations::run_migrations)
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        f(&conn)
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl std::fmt::Debug for LicenseDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseDatabase")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// WAL journal, NORMAL sync, foreign keys on, 5s busy timeout.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    // In-memory databases report "memory" and stay that way.
    let _mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(sqe)?;
    conn.pragma_update(None, "synchronous", "NORMAL").map_err(sqe)?;
    conn.pragma_update(None, "foreign_keys", "ON").map_err(sqe)?;
    conn.busy_timeout(Duration::from_millis(BUSY_TIMEOUT_MS))
        .map_err(sqe)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_database_is_migrated() {
        let db = LicenseDatabase::open_in_memory().unwrap();
        let version = db.with_conn(migrations::current_version).unwrap();
        assert_eq!(version, migrations::LATEST_VERSION);
        assert!(db.path().is_none());
    }

    #[test]
    fn unmigrated_database_has_no_schema() {
        let db = LicenseDatabase::open_in_memory_unmigrated().unwrap();
        assert_eq!(db.with_conn(migrations::current_version).unwrap(), 0);
    }

    #[test]
    fn pragmas_are_applied() {
        let db = LicenseDatabase::open_in_memory_unmigrated().unwrap();
        let foreign_keys: i64 = db
            .with_conn(|conn| {
                conn.pragma_query_value(None, "foreign_keys", |row| row.get(0))
                    .map_err(sqe)
            })
            .unwrap();
        assert_eq!(foreign_keys, 1);
    }
}
