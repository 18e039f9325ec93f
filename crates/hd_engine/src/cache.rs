//! Fingerprinted profile cache.
//!
//! - Hits skip the pipeline entirely.
//! - Concurrent misses on one fingerprint share a single computation: the
//!   first caller registers a broadcast sender in `in_flight`, later callers
//!   subscribe to it.
//! - Successful results are stored with a fixed TTL; failures are handed to
//!   current waiters but never stored.
//! - Store errors and timeouts are logged, counted and treated as misses
//!   (reads) or no-ops (writes).

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use hd_bodygraph::HdProfile;
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::birth::BirthData;
use crate::error::{CalcError, StoreError};
use crate::fingerprint::fingerprint;
use crate::store::ProfileStore;

type Shared = Result<Arc<HdProfile>, CalcError>;

/// Cache tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheConfig {
    /// Lifetime of stored profiles (default 7 days).
    pub ttl: Duration,
    /// Bound on each store call (default 250 ms).
    pub store_timeout: Duration,
    /// Decimals lat/lng are rounded to before fingerprinting (default 4).
    pub coord_decimals: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(7 * 24 * 60 * 60),
            store_timeout: Duration::from_millis(250),
            coord_decimals: 4,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.ttl.is_zero() {
            return Err("cache ttl must be > 0");
        }
        if self.store_timeout.is_zero() {
            return Err("store timeout must be > 0");
        }
        if self.coord_decimals > 10 {
            return Err("coord_decimals must be <= 10");
        }
        Ok(())
    }
}

/// Counter snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Pipeline runs actually started.
    pub computations: u64,
    /// Callers that waited on another caller's computation.
    pub coalesced: u64,
    /// Store errors and timeouts.
    pub faults: u64,
    pub in_flight: usize,
}

#[derive(Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    computations: AtomicU64,
    coalesced: AtomicU64,
    faults: AtomicU64,
}

fn bump(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
}

/// A profile with its provenance.
#[derive(Debug, Clone)]
pub struct CachedProfile {
    pub profile: Arc<HdProfile>,
    /// `true` when served from the store without running the pipeline.
    pub cache_hit: bool,
    pub fingerprint: String,
}

/// Removes the in-flight slot when the computing caller finishes or is dropped.
struct InFlightGuard<'a> {
    in_flight: &'a DashMap<String, broadcast::Sender<Shared>>,
    key: &'a str,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.remove(self.key);
    }
}

enum Role {
    Leader(broadcast::Sender<Shared>),
    Follower(broadcast::Receiver<Shared>),
}

pub struct ProfileCache {
    store: Arc<dyn ProfileStore>,
    config: CacheConfig,
    in_flight: DashMap<String, broadcast::Sender<Shared>>,
    counters: Counters,
}

impl ProfileCache {
    pub fn new(store: Arc<dyn ProfileStore>, config: CacheConfig) -> Result<Self, CalcError> {
        config.validate().map_err(CalcError::InvalidConfig)?;
        Ok(Self {
            store,
            config,
            in_flight: DashMap::new(),
            counters: Counters::default(),
        })
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Fingerprint of `birth` under this cache's rounding.
    pub fn fingerprint(&self, birth: &BirthData) -> Result<String, CalcError> {
        fingerprint(birth, self.config.coord_decimals)
    }

    /// Return the cached profile for `birth`, or run `compute` on the
    /// blocking pool, store its result and return it.
    pub async fn get_or_compute<F>(
        &self,
        birth: &BirthData,
        compute: F,
    ) -> Result<CachedProfile, CalcError>
    where
        F: FnOnce() -> Result<HdProfile, CalcError> + Send + 'static,
    {
        let fp = self.fingerprint(birth)?;
        let mut compute = Some(compute);

        loop {
            if let Some(profile) = self.store_get(&fp).await {
                bump(&self.counters.hits);
                debug!(fingerprint = %fp, "profile cache hit");
                return Ok(CachedProfile {
                    profile: Arc::new(profile),
                    cache_hit: true,
                    fingerprint: fp,
                });
            }

            let role = match self.in_flight.entry(fp.clone()) {
                Entry::Occupied(slot) => Role::Follower(slot.get().subscribe()),
                Entry::Vacant(slot) => {
                    let (tx, _) = broadcast::channel(1);
                    slot.insert(tx.clone());
                    Role::Leader(tx)
                }
            };

            match role {
                Role::Follower(mut rx) => {
                    bump(&self.counters.coalesced);
                    match rx.recv().await {
                        Ok(shared) => {
                            return shared.map(|profile| CachedProfile {
                                profile,
                                cache_hit: false,
                                fingerprint: fp,
                            });
                        }
                        // Leader dropped without a result; try again.
                        Err(_) => continue,
                    }
                }
                Role::Leader(tx) => {
                    let guard = InFlightGuard {
                        in_flight: &self.in_flight,
                        key: &fp,
                    };

                    // A previous leader may have stored and released between
                    // our store read and our registration.
                    if let Some(profile) = self.store_get(&fp).await {
                        bump(&self.counters.hits);
                        let profile = Arc::new(profile);
                        drop(guard);
                        let _ = tx.send(Ok(Arc::clone(&profile)));
                        return Ok(CachedProfile {
                            profile,
                            cache_hit: true,
                            fingerprint: fp,
                        });
                    }

                    let Some(compute) = compute.take() else {
                        return Err(CalcError::Domain("computation already consumed".into()));
                    };
                    let result = self.run(&fp, compute).await;
                    if let Ok(profile) = &result {
                        self.store_set(&fp, profile).await;
                    }
                    // Release the slot before sending: every subscriber then
                    // registered before the send and receives it.
                    drop(guard);
                    let _ = tx.send(result.clone());
                    return result.map(|profile| CachedProfile {
                        profile,
                        cache_hit: false,
                        fingerprint: fp,
                    });
                }
            }
        }
    }

    async fn run<F>(&self, fp: &str, compute: F) -> Shared
    where
        F: FnOnce() -> Result<HdProfile, CalcError> + Send + 'static,
    {
        bump(&self.counters.misses);
        bump(&self.counters.computations);
        let started = Instant::now();
        let result = match tokio::task::spawn_blocking(compute).await {
            Ok(r) => r.map(Arc::new),
            Err(e) => Err(CalcError::Domain(format!("calculation task failed: {e}"))),
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => debug!(fingerprint = %fp, elapsed_ms, "profile computed"),
            Err(e) => debug!(fingerprint = %fp, elapsed_ms, kind = %e.kind(), error = %e, "profile computation failed"),
        }
        result
    }

    /// Stored profile by fingerprint, without computing.
    pub async fn lookup(&self, fp: &str) -> Option<Arc<HdProfile>> {
        let found = self.store_get(fp).await.map(Arc::new);
        if found.is_some() {
            bump(&self.counters.hits);
        } else {
            bump(&self.counters.misses);
        }
        found
    }

    pub fn stats(&self) -> CacheStats {
        let c = &self.counters;
        CacheStats {
            hits: c.hits.load(Ordering::Relaxed),
            misses: c.misses.load(Ordering::Relaxed),
            computations: c.computations.load(Ordering::Relaxed),
            coalesced: c.coalesced.load(Ordering::Relaxed),
            faults: c.faults.load(Ordering::Relaxed),
            in_flight: self.in_flight.len(),
        }
    }

    /// Close the backing store. Failures are logged, not returned.
    pub async fn close(&self) {
        match timeout(self.config.store_timeout, self.store.close()).await {
            Ok(Ok(())) => debug!("profile store closed"),
            Ok(Err(e)) => self.fault("close", None, &e),
            Err(_) => self.fault("close", None, &StoreError::Timeout(self.config.store_timeout)),
        }
    }

    async fn store_get(&self, fp: &str) -> Option<HdProfile> {
        match timeout(self.config.store_timeout, self.store.get(fp)).await {
            Ok(Ok(found)) => found,
            Ok(Err(e)) => {
                self.fault("get", Some(fp), &e);
                None
            }
            Err(_) => {
                self.fault("get", Some(fp), &StoreError::Timeout(self.config.store_timeout));
                None
            }
        }
    }

    async fn store_set(&self, fp: &str, profile: &HdProfile) {
        let call = self.store.set(fp, profile, self.config.ttl);
        match timeout(self.config.store_timeout, call).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => self.fault("set", Some(fp), &e),
            Err(_) => self.fault("set", Some(fp), &StoreError::Timeout(self.config.store_timeout)),
        }
    }

    fn fault(&self, op: &'static str, fp: Option<&str>, err: &StoreError) {
        bump(&self.counters.faults);
        warn!(op, fingerprint = fp.unwrap_or("-"), error = %err, "profile store fault, continuing without cache");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;
    use crate::store::{DisabledStore, MemoryStore};
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    fn j2000() -> BirthData {
        BirthData::new("2000-01-01", "12:00:00", 0.0, 0.0, "UTC")
    }

    fn counting(
        calls: &Arc<AtomicUsize>,
        birth: &BirthData,
    ) -> impl FnOnce() -> Result<HdProfile, CalcError> + Send + 'static {
        let calls = Arc::clone(calls);
        let birth = birth.clone();
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            Calculator::default().compute(&birth)
        }
    }

    fn memory_cache() -> ProfileCache {
        ProfileCache::new(Arc::new(MemoryStore::new()), CacheConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn second_call_hits() {
        let cache = memory_cache();
        let calls = Arc::new(AtomicUsize::new(0));
        let a = cache.get_or_compute(&j2000(), counting(&calls, &j2000())).await.unwrap();
        let b = cache.get_or_compute(&j2000(), counting(&calls, &j2000())).await.unwrap();
        assert!(!a.cache_hit);
        assert!(b.cache_hit);
        assert_eq!(a.profile, b.profile);
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let s = cache.stats();
        assert_eq!((s.hits, s.computations, s.in_flight), (1, 1, 0));
    }

    #[tokio::test]
    async fn equivalent_spellings_share_an_entry() {
        let cache = memory_cache();
        let calls = Arc::new(AtomicUsize::new(0));
        let z = BirthData::new("2000-01-01", "12:00:00", 0.00001, 0.0, "Z");
        cache.get_or_compute(&j2000(), counting(&calls, &j2000())).await.unwrap();
        let hit = cache.get_or_compute(&z, counting(&calls, &z)).await.unwrap();
        assert!(hit.cache_hit);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let cache = memory_cache();
        let err = cache
            .get_or_compute(&j2000(), || Err(CalcError::Domain("boom".into())))
            .await
            .unwrap_err();
        assert_eq!(err, CalcError::Domain("boom".into()));

        let calls = Arc::new(AtomicUsize::new(0));
        let ok = cache.get_or_compute(&j2000(), counting(&calls, &j2000())).await.unwrap();
        assert!(!ok.cache_hit);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.stats().computations, 2);
        assert_eq!(cache.stats().in_flight, 0);
    }

    #[tokio::test]
    async fn panicking_computation_releases_slot() {
        let cache = memory_cache();
        let err = cache
            .get_or_compute(&j2000(), || panic!("pipeline bug"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Domain);
        assert_eq!(cache.stats().in_flight, 0);
    }

    #[tokio::test]
    async fn unparsable_input_fails_before_compute() {
        let cache = memory_cache();
        let calls = Arc::new(AtomicUsize::new(0));
        let bad = BirthData::new("2000-01-01", "12:00", 0.0, 0.0, "UTC");
        let err = cache.get_or_compute(&bad, counting(&calls, &bad)).await.unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_callers_share_one_computation() {
        let cache = Arc::new(memory_cache());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                tokio::spawn(async move {
                    let birth = j2000();
                    let input = birth.clone();
                    cache
                        .get_or_compute(&birth, move || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            std::thread::sleep(Duration::from_millis(200));
                            Calculator::default().compute(&input)
                        })
                        .await
                })
            })
            .collect();

        let results = futures::future::join_all(handles).await;
        let profiles: Vec<_> = results
            .into_iter()
            .map(|r| r.unwrap().unwrap().profile)
            .collect();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(profiles.len(), 16);
        assert!(profiles.iter().all(|p| **p == *profiles[0]));
        assert_eq!(cache.stats().computations, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_entry_is_recomputed() {
        let config = CacheConfig {
            ttl: Duration::from_secs(60),
            ..CacheConfig::default()
        };
        let cache = ProfileCache::new(Arc::new(MemoryStore::new()), config).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        cache.get_or_compute(&j2000(), counting(&calls, &j2000())).await.unwrap();
        tokio::time::advance(Duration::from_secs(61)).await;
        let again = cache.get_or_compute(&j2000(), counting(&calls, &j2000())).await.unwrap();
        assert!(!again.cache_hit);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    struct BrokenStore;

    #[async_trait]
    impl ProfileStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<HdProfile>, StoreError> {
            Err(StoreError::Backend("connection refused".into()))
        }

        async fn set(&self, _: &str, _: &HdProfile, _: Duration) -> Result<(), StoreError> {
            Err(StoreError::Backend("connection refused".into()))
        }

        async fn close(&self) -> Result<(), StoreError> {
            Err(StoreError::Backend("connection refused".into()))
        }
    }

    struct StalledStore;

    #[async_trait]
    impl ProfileStore for StalledStore {
        async fn get(&self, _key: &str) -> Result<Option<HdProfile>, StoreError> {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(None)
        }

        async fn set(&self, _: &str, _: &HdProfile, _: Duration) -> Result<(), StoreError> {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(())
        }

        async fn close(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn broken_store_degrades_to_compute() {
        let cache = ProfileCache::new(Arc::new(BrokenStore), CacheConfig::default()).unwrap();
        let direct = Calculator::default().compute(&j2000()).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let got = cache.get_or_compute(&j2000(), counting(&calls, &j2000())).await.unwrap();
        assert_eq!(*got.profile, direct);
        assert!(!got.cache_hit);
        // Read, leader re-read, write.
        assert_eq!(cache.stats().faults, 3);
        cache.close().await;
        assert_eq!(cache.stats().faults, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_store_times_out() {
        let cache = ProfileCache::new(Arc::new(StalledStore), CacheConfig::default()).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let got = cache.get_or_compute(&j2000(), counting(&calls, &j2000())).await.unwrap();
        assert!(!got.cache_hit);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.stats().faults, 3);
    }

    #[tokio::test]
    async fn disabled_store_always_computes() {
        let cache = ProfileCache::new(Arc::new(DisabledStore), CacheConfig::default()).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let r = cache.get_or_compute(&j2000(), counting(&calls, &j2000())).await.unwrap();
            assert!(!r.cache_hit);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(cache.stats().faults, 0);
    }

    #[tokio::test]
    async fn lookup_by_fingerprint() {
        let cache = memory_cache();
        let calls = Arc::new(AtomicUsize::new(0));
        let made = cache.get_or_compute(&j2000(), counting(&calls, &j2000())).await.unwrap();
        assert_eq!(cache.lookup(&made.fingerprint).await, Some(made.profile));
        assert_eq!(cache.lookup("profile:unknown").await, None);
    }

    #[test]
    fn config_validation() {
        assert!(CacheConfig::default().validate().is_ok());
        let zero = CacheConfig {
            ttl: Duration::ZERO,
            ..CacheConfig::default()
        };
        assert!(zero.validate().is_err());
    }
}
