//! Tri-state license entitlement.

use std::sync::Arc;

use super::license::License;

/// Observable resolution state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseEntitlementState {
    Unknown,
    Licensed,
    Unlicensed,
}

impl LicenseEntitlementState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Licensed => "licensed",
            Self::Unlicensed => "unlicensed",
        }
    }

    /// Whether a verdict has been committed.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// State and cached license in one value: `Licensed` always carries its
/// license and `Unlicensed` never does.
#[derive(Debug, Clone, Default)]
pub(crate) enum Entitlement {
    #[default]
    Unknown,
    Licensed(Arc<License>),
    Unlicensed,
}

impl Entitlement {
    pub(crate) fn state(&self) -> LicenseEntitlementState {
        match self {
            Self::Unknown => LicenseEntitlementState::Unknown,
            Self::Licensed(_) => LicenseEntitlementState::Licensed,
            Self::Unlicensed => LicenseEntitlementState::Unlicensed,
        }
    }

    /// Build from the loose `(licensed, license)` pair a test reset supplies.
    /// A license wins; otherwise only an explicit `false` is a verdict.
    pub(crate) fn from_parts(licensed: Option<bool>, license: Option<License>) -> Self {
        match (licensed, license) {
            (_, Some(license)) => Self::Licensed(Arc::new(license)),
            (Some(false), None) => Self::Unlicensed,
            (_, None) => Self::Unknown,
        }
    }
}
