//! Error types for ephemeris evaluation and design-instant search.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from ephemeris queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Epoch is non-finite or outside the supported range.
    InvalidEpoch(&'static str),
    /// Iterative algorithm did not converge.
    NoConvergence(&'static str),
    /// Search configuration failed validation.
    InvalidConfig(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEpoch(msg) => write!(f, "invalid epoch: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for EphemError {}
