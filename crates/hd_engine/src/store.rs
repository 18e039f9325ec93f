//! Profile stores behind the cache.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use hd_bodygraph::HdProfile;
use tokio::time::Instant;

use crate::error::StoreError;

/// Key-value store for resolved profiles, keyed by fingerprint.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Stored profile, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<HdProfile>, StoreError>;

    /// Store a profile for `ttl`.
    async fn set(&self, key: &str, profile: &HdProfile, ttl: Duration) -> Result<(), StoreError>;

    /// Release the store. Later calls fail with [`StoreError::Closed`].
    async fn close(&self) -> Result<(), StoreError>;
}

struct StoredEntry {
    json: String,
    expires_at: Instant,
}

/// In-process store: a concurrent map of JSON payloads with per-entry expiry.
///
/// Expiry uses the tokio clock, so paused-time tests can advance past a TTL.
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, StoredEntry>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries currently held, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, e| e.expires_at > now);
        before - self.entries.len()
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            Err(StoreError::Closed)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<HdProfile>, StoreError> {
        self.ensure_open()?;
        let now = Instant::now();
        // The map guard must be released before `remove_if` touches the shard.
        match self.entries.get(key) {
            None => return Ok(None),
            Some(e) if e.expires_at > now => return Ok(Some(serde_json::from_str(&e.json)?)),
            Some(_) => {}
        }
        self.entries.remove_if(key, |_, e| e.expires_at <= now);
        Ok(None)
    }

    async fn set(&self, key: &str, profile: &HdProfile, ttl: Duration) -> Result<(), StoreError> {
        self.ensure_open()?;
        let json = serde_json::to_string(profile)?;
        self.entries.insert(
            key.to_string(),
            StoredEntry {
                json,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.closed.store(true, Ordering::Release);
        self.entries.clear();
        Ok(())
    }
}

/// Store used when caching is switched off: every read misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStore;

#[async_trait]
impl ProfileStore for DisabledStore {
    async fn get(&self, _key: &str) -> Result<Option<HdProfile>, StoreError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _profile: &HdProfile, _ttl: Duration) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
