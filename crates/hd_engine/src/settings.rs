//! Engine settings read from the environment.

use std::time::Duration;

use tracing::warn;

use crate::cache::CacheConfig;

/// Upper bound on `max_batch_size`.
pub const MAX_BATCH_LIMIT: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Use the in-memory store (default true). When false every request computes.
    pub cache_enabled: bool,
    /// Stored profile lifetime (default 7 days).
    pub cache_ttl: Duration,
    /// Bound on each store call (default 250 ms).
    pub store_timeout: Duration,
    /// Decimals lat/lng are rounded to for fingerprints (default 4).
    pub coord_decimals: u32,
    /// Largest accepted batch (default 100).
    pub max_batch_size: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        let cache = CacheConfig::default();
        Self {
            cache_enabled: true,
            cache_ttl: cache.ttl,
            store_timeout: cache.store_timeout,
            coord_decimals: cache.coord_decimals,
            max_batch_size: 100,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}

fn parse_flag(name: &str, raw: Option<String>) -> Option<bool> {
    let raw = raw?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!(var = name, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}

impl EngineSettings {
    /// Defaults overridden by `HD_CACHE_ENABLED`, `HD_CACHE_TTL_SECS`,
    /// `HD_CACHE_TIMEOUT_MS`, `HD_COORD_DECIMALS` and `HD_MAX_BATCH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut s = Self::default();

        if let Some(v) = parse_flag("HD_CACHE_ENABLED", lookup("HD_CACHE_ENABLED")) {
            s.cache_enabled = v;
        }
        if let Some(secs) = parse_var::<u64>("HD_CACHE_TTL_SECS", lookup("HD_CACHE_TTL_SECS")) {
            s.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(ms) = parse_var::<u64>("HD_CACHE_TIMEOUT_MS", lookup("HD_CACHE_TIMEOUT_MS")) {
            s.store_timeout = Duration::from_millis(ms);
        }
        if let Some(d) = parse_var("HD_COORD_DECIMALS", lookup("HD_COORD_DECIMALS")) {
            s.coord_decimals = d;
        }
        if let Some(n) = parse_var("HD_MAX_BATCH", lookup("HD_MAX_BATCH")) {
            s.max_batch_size = n;
        }

        s
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        self.cache_config().validate()?;
        if self.max_batch_size == 0 || self.max_batch_size > MAX_BATCH_LIMIT {
            return Err("max_batch_size must be in 1..=10000");
        }
        Ok(())
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            ttl: self.cache_ttl,
            store_timeout: self.store_timeout,
            coord_decimals: self.coord_decimals,
        }
    }
}
