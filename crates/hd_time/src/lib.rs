//! Time-scale conversions for the bodygraph pipeline.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - `UtcTime`, the canonical UTC instant carried between stages
//! - A ΔT (TT − UT) model for feeding the ephemeris
//! - Civil (local date, local time, timezone) → UTC resolution

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod utc_time;

pub use civil::{Zone, canonical_timezone, civil_to_utc, parse_date, parse_time, parse_zone};
pub use delta_t::{delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries,
};
pub use utc_time::UtcTime;
