//! Licensing: is a valid commercial license installed?
//!
//! ## Components
//! - **license**: the license record returned by a store
//! - **state**: tri-state entitlement (`Unknown`, `Licensed`, `Unlicensed`)
//! - **cache**: `LicenseEntitlementCache`, lazy resolution with failure tolerance

pub mod cache;
pub mod license;
pub mod state;

pub use cache::LicenseEntitlementCache;
pub use license::{plan_rank, License};
pub use state::LicenseEntitlementState;
