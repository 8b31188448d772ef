//! Property-based tests for the license cache.
//!
//! For any script of store responses:
//! 1. The state only moves `Unknown → Licensed | Unlicensed`, never back.
//! 2. Once resolved, the store is never queried again.
//! 3. Transient and failed lookups never produce a verdict.
//! 4. Only unexpected failures are reported.

use std::sync::Arc;

use proptest::prelude::*;

use entitle_core::errors::LookupError;
use entitle_core::licensing::{License, LicenseEntitlementCache, LicenseEntitlementState};
use entitle_core::telemetry::BufferedErrorCollector;
use entitle_core::traits::LicenseStoreStub;

#[derive(Debug, Clone)]
enum Step {
    NotReady,
    Fails,
    Empty,
    Found(i64),
}

impl Step {
    fn response(&self) -> Result<Option<License>, LookupError> {
        match self {
            Step::NotReady => Err(LookupError::schema_not_ready("licenses")),
            Step::Fails => Err(LookupError::failure("injected")),
            Step::Empty => Ok(None),
            Step::Found(id) => Ok(Some(License::new(*id, "k", "scale", i64::MAX))),
        }
    }
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::NotReady),
        Just(Step::Fails),
        Just(Step::Empty),
        (1..1_000i64).prop_map(Step::Found),
    ]
}

fn run(steps: &[Step]) -> (LicenseEntitlementCache, Arc<LicenseStoreStub>, Arc<BufferedErrorCollector>) {
    let stub = Arc::new(LicenseStoreStub::new());
    for step in steps {
        stub.push_response(step.response());
    }
    let collector = Arc::new(BufferedErrorCollector::new(10_000));
    let cache = LicenseEntitlementCache::new(stub.clone(), collector.clone());
    (cache, stub, collector)
}

proptest! {
    #[test]
    fn state_is_monotone(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let (cache, _, _) = run(&steps);
        let mut seen: Option<LicenseEntitlementState> = None;

        for _ in 0..steps.len() {
            let _ = cache.get_valid_license();
            let state = cache.state();
            if let Some(previous) = seen {
                prop_assert_eq!(state, previous, "resolved state must never change");
            } else if state.is_resolved() {
                seen = Some(state);
            }
        }
    }

    #[test]
    fn queries_stop_at_first_verdict(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let (cache, stub, _) = run(&steps);
        for _ in 0..steps.len() * 2 {
            let _ = cache.get_valid_license();
        }

        let first_verdict = steps
            .iter()
            .position(|s| matches!(s, Step::Empty | Step::Found(_)));
        match first_verdict {
            // Queued steps run out after the verdict position; the stub's default
            // (`Ok(None)`) only matters when no verdict was scripted.
            Some(pos) => prop_assert_eq!(stub.query_count(), pos + 1),
            None => {
                // Every scripted step failed, then the default empty store answered.
                prop_assert_eq!(stub.query_count(), steps.len() + 1);
                prop_assert_eq!(cache.state(), LicenseEntitlementState::Unlicensed);
            }
        }
    }

    #[test]
    fn verdict_matches_first_completed_lookup(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let (cache, _, _) = run(&steps);
        for _ in 0..steps.len() {
            let _ = cache.get_valid_license();
        }

        let first_completed = steps.iter().find(|s| matches!(s, Step::Empty | Step::Found(_)));
        match first_completed {
            Some(Step::Found(id)) => {
                prop_assert_eq!(cache.state(), LicenseEntitlementState::Licensed);
                prop_assert_eq!(cache.get_valid_license().map(|l| l.id), Some(*id));
            }
            Some(_) => {
                prop_assert_eq!(cache.state(), LicenseEntitlementState::Unlicensed);
                prop_assert!(cache.get_valid_license().is_none());
            }
            None => prop_assert_eq!(cache.state(), LicenseEntitlementState::Unknown),
        }
    }

    #[test]
    fn only_unexpected_failures_are_reported(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let (cache, _, collector) = run(&steps);
        for _ in 0..steps.len() {
            let _ = cache.get_valid_license();
        }

        let consumed = steps
            .iter()
            .position(|s| matches!(s, Step::Empty | Step::Found(_)))
            .map(|pos| pos + 1)
            .unwrap_or(steps.len());
        let expected_reports = steps[..consumed]
            .iter()
            .filter(|s| matches!(s, Step::Fails))
            .count();
        prop_assert_eq!(collector.pending_count(), expected_reports);
    }
}
