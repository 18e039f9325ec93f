//! Julian Date ↔ Gregorian calendar conversion.
//!
//! Algorithm: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7.
//! Both directions use the proleptic Gregorian calendar, the same calendar
//! chrono uses, so dates before 1582-10-15 never switch to Julian reckoning.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a proleptic Gregorian calendar date to a Julian Date.
///
/// `day_frac` carries the time of day as a fraction (e.g. `1.5` = noon of
/// the 1st).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Convert a Julian Date back to proleptic Gregorian `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch, 1957 Oct 4.81
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn january_uses_previous_year_branch() {
        let jd = calendar_to_jd(1987, 1, 27.0);
        assert!((jd - 2_446_822.5).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn round_trip_calendar() {
        for &(y, m, d) in &[(2000, 1, 1.5), (1999, 10, 5.25), (1972, 2, 29.0), (2024, 12, 31.75)] {
            let jd = calendar_to_jd(y, m, d);
            let (y2, m2, d2) = jd_to_calendar(jd);
            assert_eq!((y, m), (y2, m2));
            assert!((d - d2).abs() < 1e-8, "{y}-{m}: {d} vs {d2}");
        }
    }

    #[test]
    fn gregorian_reform_is_not_a_discontinuity() {
        assert_eq!(calendar_to_jd(1582, 10, 15.0), 2_299_160.5);
        // Proleptic: 1582-10-05 exists and is ten days earlier.
        assert_eq!(calendar_to_jd(1582, 10, 5.0), 2_299_150.5);
        assert_eq!(jd_to_calendar(2_299_150.5), (1582, 10, 5.0));
    }

    #[test]
    fn round_trip_before_1582() {
        for &(y, m, d) in &[(1500, 6, 1.5), (1000, 3, 1.0), (1582, 10, 4.75), (1, 1, 1.0), (400, 2, 29.0)] {
            let jd = calendar_to_jd(y, m, d);
            let (y2, m2, d2) = jd_to_calendar(jd);
            assert_eq!((y, m), (y2, m2), "jd = {jd}");
            assert!((d - d2).abs() < 1e-8, "{y}-{m}: {d} vs {d2}");
        }
    }

    #[test]
    fn centuries_at_j2000_is_zero() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
    }
}
