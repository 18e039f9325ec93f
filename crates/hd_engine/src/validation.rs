//! Wire-level input checks run before the pipeline.
//!
//! These check shape and range only. Calendar validity (e.g. `2021-02-30`)
//! and timezone resolution are left to the core, which rejects them as
//! `InvalidInput` on its own.

use crate::birth::BirthData;
use crate::error::CalcError;

/// `d` matches an ASCII digit, any other byte matches itself.
fn has_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, p)| match p {
            b'd' => c.is_ascii_digit(),
            _ => c == p,
        })
}

fn field(s: &str, range: std::ops::Range<usize>) -> u32 {
    s[range].parse().unwrap_or(u32::MAX)
}

fn check_date(date: &str, errors: &mut Vec<String>) {
    if !has_shape(date, "dddd-dd-dd") {
        errors.push(format!("date '{date}' must be YYYY-MM-DD"));
        return;
    }
    let month = field(date, 5..7);
    let day = field(date, 8..10);
    if !(1..=12).contains(&month) {
        errors.push(format!("date '{date}' has month out of range"));
    }
    if !(1..=31).contains(&day) {
        errors.push(format!("date '{date}' has day out of range"));
    }
}

fn check_time(time: &str, errors: &mut Vec<String>) {
    if !has_shape(time, "dd:dd:dd") {
        errors.push(format!("time '{time}' must be HH:MM:SS"));
        return;
    }
    if field(time, 0..2) > 23 || field(time, 3..5) > 59 || field(time, 6..8) > 59 {
        errors.push(format!("time '{time}' is not a 24-hour clock time"));
    }
}

fn check_coordinate(name: &str, value: f64, limit: f64, errors: &mut Vec<String>) {
    if !value.is_finite() {
        errors.push(format!("{name} must be a finite number"));
    } else if value.abs() > limit {
        errors.push(format!("{name} {value} outside [-{limit}, {limit}]"));
    }
}

/// Check every field, collecting all problems into one `InvalidInput`.
pub fn validate_birth_data(birth: &BirthData) -> Result<(), CalcError> {
    let mut errors = Vec::new();
    check_date(&birth.date, &mut errors);
    check_time(&birth.time, &mut errors);
    check_coordinate("lat", birth.location.lat, 90.0, &mut errors);
    check_coordinate("lng", birth.location.lng, 180.0, &mut errors);
    if birth.location.timezone.trim().is_empty() {
        errors.push("timezone must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CalcError::InvalidInput(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth(date: &str, time: &str, lat: f64, lng: f64, tz: &str) -> BirthData {
        BirthData::new(date, time, lat, lng, tz)
    }

    #[test]
    fn accepts_well_formed() {
        assert!(validate_birth_data(&birth("1987-06-15", "23:59:59", -33.9, 151.2, "Australia/Sydney")).is_ok());
        assert!(validate_birth_data(&birth("2000-01-01", "00:00:00", 90.0, -180.0, "UTC")).is_ok());
    }

    #[test]
    fn collects_every_problem() {
        let err = validate_birth_data(&birth("01/02/2000", "7pm", 91.0, f64::NAN, " ")).unwrap_err();
        let CalcError::InvalidInput(msgs) = err else {
            panic!("expected InvalidInput");
        };
        assert_eq!(msgs.len(), 5, "{msgs:?}");
    }

    #[test]
    fn rejects_out_of_range_clock() {
        for t in ["24:00:00", "12:60:00", "12:00:60", "1:00:00", "12:00"] {
            assert!(validate_birth_data(&birth("2000-01-01", t, 0.0, 0.0, "UTC")).is_err(), "{t}");
        }
    }

    #[test]
    fn rejects_out_of_range_date_fields() {
        for d in ["2000-13-01", "2000-00-10", "2000-01-32", "2000-1-01"] {
            assert!(validate_birth_data(&birth(d, "12:00:00", 0.0, 0.0, "UTC")).is_err(), "{d}");
        }
    }

    #[test]
    fn calendar_validity_left_to_core() {
        assert!(validate_birth_data(&birth("2021-02-30", "12:00:00", 0.0, 0.0, "UTC")).is_ok());
    }
}
