//! Engine error types.

use std::time::Duration;

use hd_ephem::EphemError;
use hd_time::TimeError;
use serde::Serialize;
use thiserror::Error;

/// Coarse error classification a transport maps to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    InvalidInput,
    #[serde(rename = "DomainError")]
    Domain,
    NotFound,
}

impl ErrorKind {
    /// HTTP-style status code.
    pub const fn status_code(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::NotFound => 404,
            Self::Domain => 500,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidInput => "InvalidInput",
            Self::Domain => "DomainError",
            Self::NotFound => "NotFound",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors surfaced by the calculation pipeline and the service.
///
/// Cloneable so one coalesced failure can be handed to every waiter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Input failed validation or could not be resolved to an instant.
    #[error("invalid input: {}", .0.join("; "))]
    InvalidInput(Vec<String>),

    /// Ephemeris or search failure.
    #[error("calculation failed: {0}")]
    Domain(String),

    /// No stored profile under the requested id.
    #[error("profile not found: {0}")]
    NotFound(String),

    /// Engine settings failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

impl CalcError {
    /// Single-message `InvalidInput`.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(vec![msg.into()])
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Domain(_) | Self::InvalidConfig(_) => ErrorKind::Domain,
        }
    }

    /// Individual messages; validation failures carry one per problem.
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::InvalidInput(msgs) => msgs.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<TimeError> for CalcError {
    fn from(e: TimeError) -> Self {
        Self::invalid(e.to_string())
    }
}

impl From<EphemError> for CalcError {
    fn from(e: EphemError) -> Self {
        Self::Domain(e.to_string())
    }
}

/// Failures of a profile store. Never propagated past the cache.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store is closed")]
    Closed,

    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("stored payload is unreadable: {0}")]
    Codec(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Codec(e.to_string())
    }
}
