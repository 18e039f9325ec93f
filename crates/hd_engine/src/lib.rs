//! Bodygraph calculation engine.
//!
//! Composes the time, ephemeris and bodygraph crates into one pipeline
//! (`BirthData` → `HdProfile`), wraps it in a fingerprinted cache with
//! in-flight coalescing, and exposes a transport-agnostic service facade.
//!
//! The cache never affects correctness: a failing or slow store degrades
//! to recomputation.

pub mod birth;
pub mod cache;
pub mod calculator;
pub mod error;
pub mod fingerprint;
pub mod service;
pub mod settings;
pub mod store;
pub mod validation;

pub use birth::{BirthData, Location};
pub use cache::{CacheConfig, CacheStats, CachedProfile, ProfileCache};
pub use calculator::Calculator;
pub use error::{CalcError, ErrorKind, StoreError};
pub use fingerprint::{FINGERPRINT_PREFIX, fingerprint, normalized_fields};
pub use service::{
    BatchItem, BatchRequest, BatchResponse, CalculateResponse, ErrorResponse, LookupResponse,
    ProfileService,
};
pub use settings::EngineSettings;
pub use store::{DisabledStore, MemoryStore, ProfileStore};
pub use validation::validate_birth_data;
