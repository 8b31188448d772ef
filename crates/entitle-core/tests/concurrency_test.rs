//! Stress tests: many threads hitting the license cache at once.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};

use entitle_core::errors::LookupError;
use entitle_core::licensing::{License, LicenseEntitlementCache, LicenseEntitlementState};
use entitle_core::telemetry::BufferedErrorCollector;
use entitle_core::traits::{ILicenseStore, LicenseStoreStub};

const THREADS: usize = 16;
const CALLS_PER_THREAD: usize = 500;

/// Alternates between "no license" and a license on every query, so racing
/// first resolutions can disagree.
struct FlipFlopStore {
    queries: AtomicUsize,
}

impl ILicenseStore for FlipFlopStore {
    fn first_valid_license(&self) -> Result<Option<License>, LookupError> {
        let n = self.queries.fetch_add(1, Ordering::SeqCst);
        if n % 2 == 0 {
            Ok(None)
        } else {
            Ok(Some(License::new(n as i64, "k", "scale", i64::MAX)))
        }
    }
}

#[test]
fn racing_first_resolution_settles_on_one_verdict() {
    let store = Arc::new(FlipFlopStore {
        queries: AtomicUsize::new(0),
    });
    let cache = Arc::new(LicenseEntitlementCache::new(
        store.clone(),
        Arc::new(BufferedErrorCollector::new(10)),
    ));
    let barrier = Arc::new(Barrier::new(THREADS));

    let results: Vec<Vec<Option<i64>>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                s.spawn(move || {
                    barrier.wait();
                    (0..CALLS_PER_THREAD)
                        .map(|_| cache.get_valid_license().map(|l| l.id))
                        .collect()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // Duplicate first lookups are allowed, but only up to one per thread.
    assert!(store.queries.load(Ordering::SeqCst) <= THREADS);

    let final_state = cache.state();
    assert!(final_state.is_resolved());
    let final_value = cache.get_valid_license().map(|l| l.id);

    // No oscillation: once a thread saw the final verdict it never left it,
    // and nobody ever saw a verdict other than the committed one.
    for per_thread in &results {
        assert_eq!(per_thread.last().unwrap(), &final_value);
        for observed in per_thread {
            assert_eq!(observed, &final_value);
        }
    }
    match final_state {
        LicenseEntitlementState::Licensed => assert!(final_value.is_some()),
        LicenseEntitlementState::Unlicensed => assert!(final_value.is_none()),
        LicenseEntitlementState::Unknown => unreachable!(),
    }
}

#[test]
fn warm_cache_serves_all_threads_without_queries() {
    let stub = Arc::new(LicenseStoreStub::returning(License::new(1, "k", "enterprise", i64::MAX)));
    let cache = Arc::new(LicenseEntitlementCache::new(
        stub.clone(),
        Arc::new(BufferedErrorCollector::new(10)),
    ));
    assert!(cache.get_valid_license().is_some());

    std::thread::scope(|s| {
        for _ in 0..THREADS {
            let cache = Arc::clone(&cache);
            s.spawn(move || {
                for _ in 0..CALLS_PER_THREAD {
                    assert_eq!(cache.get_valid_license().unwrap().id, 1);
                }
            });
        }
    });

    assert_eq!(stub.query_count(), 1);
}

#[test]
fn concurrent_failures_are_all_reported_and_state_stays_unknown() {
    let stub = Arc::new(LicenseStoreStub::new());
    stub.set_default(Err(LookupError::failure("db down")));
    let collector = Arc::new(BufferedErrorCollector::new(THREADS * 10));
    let cache = Arc::new(LicenseEntitlementCache::new(stub.clone(), collector.clone()));

    std::thread::scope(|s| {
        for _ in 0..THREADS {
            let cache = Arc::clone(&cache);
            s.spawn(move || {
                for _ in 0..10 {
                    assert!(cache.get_valid_license().is_none());
                }
            });
        }
    });

    assert_eq!(cache.state(), LicenseEntitlementState::Unknown);
    assert_eq!(stub.query_count(), THREADS * 10);
    assert_eq!(collector.pending_count(), THREADS * 10);
}
