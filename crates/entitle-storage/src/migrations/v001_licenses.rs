//! v001: licenses table.

use entitle_core::errors::StorageError;
use rusqlite::Connection;

use crate::sqe;

pub fn migrate(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS licenses (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            key         TEXT NOT NULL UNIQUE,
            plan        TEXT NOT NULL,
            valid_until INTEGER NOT NULL,
            max_users   INTEGER,
            created_at  INTEGER NOT NULL DEFAULT (strftime('%s', 'now')),
            revoked_at  INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_licenses_valid_until
            ON licenses(valid_until) WHERE revoked_at IS NULL;
        ",
    )
    .map_err(sqe)
}
