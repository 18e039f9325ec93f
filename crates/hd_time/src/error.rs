//! Error types for civil time resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or resolving a civil date/time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Time string is not a valid 24-hour `HH:MM:SS` time.
    InvalidTime(String),
    /// Timezone is neither UTC, a fixed offset, nor a known IANA zone.
    UnknownTimezone(String),
    /// Local time falls inside a daylight-saving gap.
    NonexistentLocalTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date '{s}', expected YYYY-MM-DD"),
            Self::InvalidTime(s) => write!(f, "invalid time '{s}', expected HH:MM:SS"),
            Self::UnknownTimezone(s) => write!(f, "unknown timezone '{s}'"),
            Self::NonexistentLocalTime(s) => {
                write!(f, "local time {s} does not exist in its timezone")
            }
        }
    }
}

impl Error for TimeError {}
