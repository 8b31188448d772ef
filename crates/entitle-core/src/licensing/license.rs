//! License record as returned by a license store.
//! Validity rules beyond the expiry timestamp belong to the store.

use serde::{Deserialize, Serialize};

use crate::constants::PLAN_RANKS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub id: i64,
    /// Opaque license key. Never validated here.
    pub key: String,
    /// Plan name: "scale", "enterprise", ...
    pub plan: String,
    /// Unix seconds. Valid while `now <= valid_until`.
    pub valid_until: i64,
    /// Seat cap, informational.
    #[serde(default)]
    pub max_users: Option<u32>,
    /// Unix seconds.
    #[serde(default)]
    pub created_at: i64,
}

impl License {
    pub fn new(id: i64, key: impl Into<String>, plan: impl Into<String>, valid_until: i64) -> Self {
        Self {
            id,
            key: key.into(),
            plan: plan.into(),
            valid_until,
            max_users: None,
            created_at: 0,
        }
    }

    pub fn is_valid_at(&self, now: i64) -> bool {
        now <= self.valid_until
    }

    /// Higher ranks win when several licenses are valid at once.
    pub fn plan_rank(&self) -> u8 {
        plan_rank(&self.plan)
    }
}

/// Rank for a plan name. Unknown plans rank lowest.
pub fn plan_rank(plan: &str) -> u8 {
    PLAN_RANKS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(plan))
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_includes_expiry_second() {
        let license = License::new(1, "key", "scale", 1_000);
        assert!(license.is_valid_at(999));
        assert!(license.is_valid_at(1_000));
        assert!(!license.is_valid_at(1_001));
    }

    #[test]
    fn enterprise_outranks_scale() {
        assert!(plan_rank("enterprise") > plan_rank("scale"));
        assert!(plan_rank("scale") > plan_rank("starter"));
        assert_eq!(plan_rank("ENTERPRISE"), plan_rank("enterprise"));
        assert_eq!(plan_rank(""), 0);
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let license: License = serde_json::from_str(
            r#"{"id":7,"key":"k","plan":"scale","valid_until":42}"#,
        )
        .unwrap();
        assert_eq!(license.max_users, None);
        assert_eq!(license.created_at, 0);
        assert_eq!(license.plan_rank(), 10);
    }
}
