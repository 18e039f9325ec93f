//! Civil date/time resolution: local wall-clock reading + timezone → UTC.
//!
//! Timezones are accepted as `UTC`/`GMT`/`Z`, fixed offsets (`+05:30`,
//! `-0800`, `+2`, optionally prefixed by `UTC`/`GMT`), or IANA names.
//! A wall-clock reading that occurs twice (DST fold) resolves to the earlier
//! instant; one that never occurs (DST gap) is an error.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::utc_time::UtcTime;

/// A resolved timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Utc,
    Fixed(FixedOffset),
    Named(Tz),
}

impl Zone {
    /// Canonical spelling: `UTC`, `+HH:MM`, or the IANA name.
    pub fn canonical(&self) -> String {
        match self {
            Self::Utc => "UTC".to_string(),
            Self::Fixed(off) => {
                let secs = off.local_minus_utc();
                if secs == 0 {
                    return "UTC".to_string();
                }
                let sign = if secs < 0 { '-' } else { '+' };
                let abs = secs.unsigned_abs();
                format!("{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
            }
            Self::Named(tz) => tz.name().to_string(),
        }
    }

    fn resolve(&self, local: &NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Self::Utc => Some(*local),
            Self::Fixed(off) => off
                .from_local_datetime(local)
                .earliest()
                .map(|dt| dt.naive_utc()),
            Self::Named(tz) => tz
                .from_local_datetime(local)
                .earliest()
                .map(|dt| dt.naive_utc()),
        }
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(date: &str) -> Result<NaiveDate, TimeError> {
    let s = date.trim();
    if s.len() != 10 {
        return Err(TimeError::InvalidDate(date.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| TimeError::InvalidDate(date.to_string()))
}

/// Parse a strict 24-hour `HH:MM:SS` time.
pub fn parse_time(time: &str) -> Result<NaiveTime, TimeError> {
    let s = time.trim();
    if s.len() != 8 {
        return Err(TimeError::InvalidTime(time.to_string()));
    }
    let parsed = NaiveTime::parse_from_str(s, "%H:%M:%S")
        .map_err(|_| TimeError::InvalidTime(time.to_string()))?;
    // chrono accepts :60 as a leap second; birth times do not.
    if s.ends_with(":60") {
        return Err(TimeError::InvalidTime(time.to_string()));
    }
    Ok(parsed)
}

/// Parse a timezone spelling.
pub fn parse_zone(tz: &str) -> Result<Zone, TimeError> {
    let s = tz.trim();
    let unknown = || TimeError::UnknownTimezone(tz.to_string());
    if s.is_empty() {
        return Err(unknown());
    }
    if s.eq_ignore_ascii_case("z") {
        return Ok(Zone::Utc);
    }

    let upper = s.to_ascii_uppercase();
    let rest = if upper.starts_with("UTC") || upper.starts_with("GMT") {
        &s[3..]
    } else {
        s
    };
    if rest.is_empty() {
        return Ok(Zone::Utc);
    }
    if rest.starts_with('+') || rest.starts_with('-') {
        return parse_offset(rest).map(Zone::Fixed).ok_or_else(unknown);
    }
    if rest.len() != s.len() {
        // "UTCfoo" is neither an offset nor an IANA name.
        return Err(unknown());
    }

    s.parse::<Tz>().map(Zone::Named).map_err(|_| unknown())
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, body) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = body.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if body.contains(':') && (body.len() != 5 || body.as_bytes()[2] != b':') {
        return None;
    }
    let (hours, minutes): (i32, i32) = match digits.len() {
        1 | 2 => (digits.parse().ok()?, 0),
        4 => (digits[..2].parse().ok()?, digits[2..].parse().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Canonical spelling of a timezone, used for fingerprinting.
pub fn canonical_timezone(tz: &str) -> Result<String, TimeError> {
    parse_zone(tz).map(|z| z.canonical())
}

/// Resolve a civil date, time and timezone to a UTC instant.
pub fn civil_to_utc(date: &str, time: &str, tz: &str) -> Result<UtcTime, TimeError> {
    let d = parse_date(date)?;
    let t = parse_time(time)?;
    let zone = parse_zone(tz)?;
    let local = NaiveDateTime::new(d, t);
    let utc = zone
        .resolve(&local)
        .ok_or_else(|| TimeError::NonexistentLocalTime(format!("{date} {time} {tz}")))?;
    Ok(UtcTime::from(Utc.from_utc_datetime(&utc)))
}
