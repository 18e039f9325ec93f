//! General precession in ecliptic longitude.
//!
//! Source: Capitaine, Wallace & Chapront 2003 (IAU 2006), as tabulated in
//! IERS Conventions 2010, Ch. 5.

/// Accumulated general precession since J2000.0, in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0. Adding this to a J2000
/// ecliptic longitude yields the longitude referred to the mean equinox of
/// date.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4
}

/// Accumulated general precession since J2000.0, in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn about_fifty_arcsec_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p = {p}");
    }

    #[test]
    fn sign_follows_time() {
        assert!(general_precession_longitude_deg(-0.3) < 0.0);
        assert!(general_precession_longitude_deg(0.3) > 0.0);
    }
}
