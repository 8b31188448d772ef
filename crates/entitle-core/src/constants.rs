//! Shared constants.

/// Hosted is the default posture until configuration says otherwise.
pub const DEFAULT_HOSTED_DEPLOYMENT: bool = true;

/// Environment variable that overrides `[deployment] hosted`.
pub const HOSTED_DEPLOYMENT_ENV: &str = "ENTITLE_HOSTED_DEPLOYMENT";

/// Default SQLite file for license records.
pub const DEFAULT_DB_PATH: &str = "entitlements.db";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Max captured errors held by `BufferedErrorCollector`.
pub const DEFAULT_ERROR_BUFFER_CAPACITY: usize = 1000;

/// Table that holds license records.
pub const LICENSES_TABLE: &str = "licenses";

/// Plan ranking used to choose between several valid licenses.
pub const PLAN_RANKS: [(&str, u8); 2] = [("enterprise", 20), ("scale", 10)];
