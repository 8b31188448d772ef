//! licenses table queries.

use std::cmp::Reverse;

use entitle_core::errors::StorageError;
use entitle_core::licensing::License;
use rusqlite::{params, Connection, Row};

use crate::sqe;

/// A license to be inserted. The id is assigned by the database.
#[derive(Debug, Clone)]
pub struct NewLicense {
    pub key: String,
    pub plan: String,
    pub valid_until: i64,
    pub max_users: Option<u32>,
    pub created_at: i64,
}

impl NewLicense {
    pub fn new(key: impl Into<String>, plan: impl Into<String>, valid_until: i64) -> Self {
        Self {
            key: key.into(),
            plan: plan.into(),
            valid_until,
            max_users: None,
            created_at: 0,
        }
    }
}

const LICENSE_COLUMNS: &str = "id, key, plan, valid_until, max_users, created_at";

fn row_to_license(row: &Row<'_>) -> rusqlite::Result<License> {
    Ok(License {
        id: row.get(0)?,
        key: row.get(1)?,
        plan: row.get(2)?,
        valid_until: row.get(3)?,
        max_users: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Insert a license. Returns the new row id.
pub fn insert_license(conn: &Connection, license: &NewLicense) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO licenses (key, plan, valid_until, max_users, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            license.key,
            license.plan,
            license.valid_until,
            license.max_users,
            license.created_at,
        ],
    )
    .map_err(sqe)?;
    Ok(conn.last_insert_rowid())
}

/// Mark a license revoked. Returns false if it does not exist or was
/// already revoked.
pub fn revoke_license(conn: &Connection, id: i64, revoked_at: i64) -> Result<bool, StorageError> {
    let changed = conn
        .execute(
            "UPDATE licenses SET revoked_at = ?2 WHERE id = ?1 AND revoked_at IS NULL",
            params![id, revoked_at],
        )
        .map_err(sqe)?;
    Ok(changed > 0)
}

/// All licenses, revoked and expired included, ordered by id.
pub fn list_licenses(conn: &Connection) -> Result<Vec<License>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("SELECT {LICENSE_COLUMNS} FROM licenses ORDER BY id"))
        .map_err(sqe)?;
    let rows = stmt.query_map([], row_to_license).map_err(sqe)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(sqe)
}

/// The license that entitles the installation at `now`, if any.
///
/// Candidates are unrevoked rows with `valid_until >= now`. The highest plan
/// rank wins, then the latest expiry, then the lowest id.
pub fn first_valid_license(conn: &Connection, now: i64) -> Result<Option<License>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {LICENSE_COLUMNS} FROM licenses
             WHERE revoked_at IS NULL AND valid_until >= ?1"
        ))
        .map_err(sqe)?;
    let candidates = stmt
        .query_map([now], row_to_license)
        .map_err(sqe)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(sqe)?;

    Ok(candidates
        .into_iter()
        .min_by_key(|l| (Reverse(l.plan_rank()), Reverse(l.valid_until), l.id)))
}
