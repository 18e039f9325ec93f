//! ΔT = TT − UT.
//!
//! Piecewise polynomials in the form published by Espenak & Meeus for the
//! NASA eclipse canon, 1800–2150, with the long-term parabola outside that
//! range. Accuracy is a few seconds over the modern era, which moves the Sun
//! by well under a tenth of an arc-second.

use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Days in a Julian year.
const DAYS_PER_YEAR: f64 = 365.25;

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1800.0 || year >= 2150.0 {
        return long_term(year);
    }
    if year < 1860.0 {
        let t = year - 1800.0;
        return 13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7);
    }
    if year < 1900.0 {
        let t = year - 1860.0;
        return 7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0;
    }
    if year < 1920.0 {
        let t = year - 1900.0;
        return -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4);
    }
    if year < 1941.0 {
        let t = year - 1920.0;
        return 21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3);
    }
    if year < 1961.0 {
        let t = year - 1950.0;
        return 29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0;
    }
    if year < 1986.0 {
        let t = year - 1975.0;
        return 45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0;
    }
    if year < 2005.0 {
        let t = year - 2000.0;
        return 63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5);
    }
    if year < 2050.0 {
        let t = year - 2000.0;
        return 62.92 + 0.32217 * t + 0.005589 * t.powi(2);
    }
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
}

fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Convert a UT Julian Date to a TT Julian Date.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    let year = 2000.0 + (jd_ut - J2000_JD) / DAYS_PER_YEAR;
    jd_ut + delta_t_seconds(year) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_t_2000_about_64s() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.01, "dt = {dt}");
    }

    #[test]
    fn delta_t_1950_about_29s() {
        let dt = delta_t_seconds(1950.0);
        assert!((dt - 29.07).abs() < 0.01, "dt = {dt}");
    }

    #[test]
    fn segments_join_smoothly() {
        // Adjacent segments agree to within a couple of seconds at the seams.
        for &seam in &[1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let below = delta_t_seconds(seam - 1e-6);
            let above = delta_t_seconds(seam);
            assert!((below - above).abs() < 2.0, "seam {seam}: {below} vs {above}");
        }
    }

    #[test]
    fn tt_is_ahead_of_ut_in_modern_era() {
        let tt = jd_ut_to_tt(J2000_JD);
        let diff_s = (tt - J2000_JD) * SECONDS_PER_DAY;
        assert!((diff_s - 63.86).abs() < 0.1, "diff = {diff_s}");
    }
}
