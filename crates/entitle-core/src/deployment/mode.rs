//! `DeploymentModeCache`: tri-state hosted flag behind an `AtomicU8`.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::config::DeploymentConfig;
use crate::constants::DEFAULT_HOSTED_DEPLOYMENT;

/// Hosted-mode status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeploymentFlag {
    Unset,
    True,
    False,
}

impl DeploymentFlag {
    const UNSET: u8 = 0;
    const TRUE: u8 = 1;
    const FALSE: u8 = 2;

    fn to_u8(self) -> u8 {
        match self {
            Self::Unset => Self::UNSET,
            Self::True => Self::TRUE,
            Self::False => Self::FALSE,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            Self::TRUE => Self::True,
            Self::FALSE => Self::False,
            _ => Self::Unset,
        }
    }

    /// `Unset` reads as not hosted.
    pub fn is_hosted(self) -> bool {
        matches!(self, Self::True)
    }
}

impl From<Option<bool>> for DeploymentFlag {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::True,
            Some(false) => Self::False,
            None => Self::Unset,
        }
    }
}

impl From<bool> for DeploymentFlag {
    fn from(value: bool) -> Self {
        Some(value).into()
    }
}

/// Process-lifetime cache of the hosted-deployment flag.
#[derive(Debug)]
pub struct DeploymentModeCache {
    flag: AtomicU8,
}

impl DeploymentModeCache {
    /// Starts in the default hosted posture.
    pub fn new() -> Self {
        Self::with_flag(DEFAULT_HOSTED_DEPLOYMENT.into())
    }

    /// Starts at the configured value, falling back to hosted.
    pub fn from_config(config: &DeploymentConfig) -> Self {
        Self::with_flag(config.effective_hosted().into())
    }

    pub fn with_flag(flag: DeploymentFlag) -> Self {
        Self {
            flag: AtomicU8::new(flag.to_u8()),
        }
    }

    /// Whether this process serves the hosted deployment.
    pub fn is_hosted_deployment(&self) -> bool {
        self.flag().is_hosted()
    }

    /// Raw tri-state value.
    pub fn flag(&self) -> DeploymentFlag {
        DeploymentFlag::from_u8(self.flag.load(Ordering::Acquire))
    }

    /// Overwrite the flag, or clear it to `Unset` when `value` is `None`.
    ///
    /// Test harnesses only. Production code must never call this; the flag is
    /// a static classification for the life of the process.
    pub fn reset_for_testing(&self, value: Option<bool>) {
        self.flag
            .store(DeploymentFlag::from(value).to_u8(), Ordering::Release);
    }
}

impl Default for DeploymentModeCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_hosted() {
        let cache = DeploymentModeCache::new();
        assert!(cache.is_hosted_deployment());
        assert_eq!(cache.flag(), DeploymentFlag::True);
    }

    #[test]
    fn from_config_respects_value() {
        let cache = DeploymentModeCache::from_config(&DeploymentConfig { hosted: Some(false) });
        assert!(!cache.is_hosted_deployment());
        let cache = DeploymentModeCache::from_config(&DeploymentConfig::default());
        assert!(cache.is_hosted_deployment());
    }

    #[test]
    fn reset_to_none_is_unset_and_not_hosted() {
        let cache = DeploymentModeCache::new();
        cache.reset_for_testing(None);
        assert_eq!(cache.flag(), DeploymentFlag::Unset);
        assert!(!cache.is_hosted_deployment());
    }

    #[test]
    fn flag_u8_encoding_is_lossless() {
        for flag in [DeploymentFlag::Unset, DeploymentFlag::True, DeploymentFlag::False] {
            assert_eq!(DeploymentFlag::from_u8(flag.to_u8()), flag);
        }
    }
}
