//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the instant type handed from civil-time resolution to the
//! ephemeris and back out in profiles. Conversions go through UT Julian Dates;
//! the ephemeris applies ΔT itself.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};

use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Date on the UT scale.
    pub fn to_jd_ut(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar form of a UT Julian Date, rounded to the millisecond.
    pub fn from_jd_ut(jd_ut: f64) -> Self {
        // Work in whole milliseconds so that 59.9999s never leaks out as a
        // second value of 60.
        let total_ms = ((jd_ut + 0.5) * MILLIS_PER_DAY as f64).round() as i64;
        let day_number = total_ms.div_euclid(MILLIS_PER_DAY);
        let ms_of_day = total_ms.rem_euclid(MILLIS_PER_DAY);

        let (year, month, day_frac) = jd_to_calendar(day_number as f64 - 0.5);
        let day = day_frac.round() as u32;

        let hour = (ms_of_day / 3_600_000) as u32;
        let minute = ((ms_of_day % 3_600_000) / 60_000) as u32;
        let second = (ms_of_day % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Build from a naive UTC date-time.
    pub fn from_naive_utc(dt: &NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 * 1e-9,
        }
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_naive_utc(&dt.naive_utc())
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
