//! Transport-agnostic service facade: `calculate`, `lookup`, `batch`.

use std::sync::Arc;

use futures::future::join_all;
use hd_bodygraph::HdProfile;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::birth::BirthData;
use crate::cache::{CacheStats, ProfileCache};
use crate::calculator::Calculator;
use crate::error::{CalcError, ErrorKind};
use crate::settings::EngineSettings;
use crate::store::{DisabledStore, MemoryStore, ProfileStore};
use crate::validation::validate_birth_data;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub success: bool,
    pub profile: HdProfile,
    pub cache_hit: bool,
    /// Fingerprint; pass to `lookup` to fetch the profile again.
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub success: bool,
    pub profile: HdProfile,
    pub cache_hit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub profiles: Vec<BirthData>,
}

/// One batch result, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchItem {
    Profile {
        #[serde(rename = "birthData")]
        birth_data: BirthData,
        profile: HdProfile,
    },
    Error {
        #[serde(rename = "birthData")]
        birth_data: BirthData,
        error: String,
        kind: ErrorKind,
    },
}

impl BatchItem {
    pub fn profile(&self) -> Option<&HdProfile> {
        match self {
            Self::Profile { profile, .. } => Some(profile),
            Self::Error { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Profile { .. } => None,
            Self::Error { kind, .. } => Some(*kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResponse {
    pub success: bool,
    pub results: Vec<BatchItem>,
}

/// Error body a transport can send as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub kind: ErrorKind,
    pub status: u16,
    pub details: Vec<String>,
}

impl From<&CalcError> for ErrorResponse {
    fn from(e: &CalcError) -> Self {
        Self {
            success: false,
            error: e.to_string(),
            kind: e.kind(),
            status: e.kind().status_code(),
            details: e.details(),
        }
    }
}

/// Validation, calculator and cache behind one facade.
pub struct ProfileService {
    calculator: Arc<Calculator>,
    cache: ProfileCache,
    max_batch_size: usize,
}

impl ProfileService {
    /// Service with the analytic ephemeris and the store the settings select.
    pub fn from_settings(settings: &EngineSettings) -> Result<Self, CalcError> {
        let store: Arc<dyn ProfileStore> = if settings.cache_enabled {
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(DisabledStore)
        };
        Self::new(Calculator::default(), store, settings)
    }

    pub fn new(
        calculator: Calculator,
        store: Arc<dyn ProfileStore>,
        settings: &EngineSettings,
    ) -> Result<Self, CalcError> {
        settings.validate().map_err(CalcError::InvalidConfig)?;
        let cache = ProfileCache::new(store, settings.cache_config())?;
        info!(
            cache_enabled = settings.cache_enabled,
            ttl_secs = settings.cache_ttl.as_secs(),
            max_batch_size = settings.max_batch_size,
            "profile service ready"
        );
        Ok(Self {
            calculator: Arc::new(calculator),
            cache,
            max_batch_size: settings.max_batch_size,
        })
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Validate, then serve from cache or compute.
    pub async fn calculate(&self, birth: BirthData) -> Result<CalculateResponse, CalcError> {
        if let Err(e) = validate_birth_data(&birth) {
            warn!(kind = %e.kind(), error = %e, "rejected birth data");
            return Err(e);
        }

        let calculator = Arc::clone(&self.calculator);
        let input = birth.clone();
        let cached = self
            .cache
            .get_or_compute(&birth, move || calculator.compute(&input))
            .await?;

        Ok(CalculateResponse {
            success: true,
            profile: Arc::unwrap_or_clone(cached.profile),
            cache_hit: cached.cache_hit,
            id: cached.fingerprint,
        })
    }

    /// Stored profile by id. `NotFound` when absent or expired.
    pub async fn lookup(&self, id: &str) -> Result<LookupResponse, CalcError> {
        match self.cache.lookup(id).await {
            Some(profile) => Ok(LookupResponse {
                success: true,
                profile: Arc::unwrap_or_clone(profile),
                cache_hit: true,
            }),
            None => Err(CalcError::NotFound(id.to_string())),
        }
    }

    /// Compute many profiles concurrently. Per-item failures are reported
    /// in place; only a malformed batch fails as a whole.
    pub async fn batch(&self, request: BatchRequest) -> Result<BatchResponse, CalcError> {
        let n = request.profiles.len();
        if n == 0 {
            return Err(CalcError::invalid("batch must contain at least one profile"));
        }
        if n > self.max_batch_size {
            return Err(CalcError::invalid(format!(
                "batch of {n} exceeds the limit of {}",
                self.max_batch_size
            )));
        }

        let results = join_all(request.profiles.into_iter().map(|birth| async move {
            match self.calculate(birth.clone()).await {
                Ok(r) => BatchItem::Profile {
                    birth_data: birth,
                    profile: r.profile,
                },
                Err(e) => BatchItem::Error {
                    birth_data: birth,
                    error: e.to_string(),
                    kind: e.kind(),
                },
            }
        }))
        .await;

        let failed = results.iter().filter(|r| r.error_kind().is_some()).count();
        info!(size = n, failed, "batch complete");
        Ok(BatchResponse {
            success: true,
            results,
        })
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Close the store. Subsequent calls still succeed by computing.
    pub async fn shutdown(&self) {
        self.cache.close().await;
        info!(stats = ?self.cache.stats(), "profile service shut down");
    }
}
