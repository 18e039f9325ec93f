//! Apparent geocentric longitude of the Sun.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25: mean longitude
//! plus equation of the centre, then aberration and nutation in longitude.
//! Accuracy ≈ 0.01°.

use hd_frames::{normalize_360, nutation_longitude_deg};

/// Constant of aberration, in degrees (20.4898″).
const ABERRATION_DEG: f64 = 20.4898 / 3600.0;

/// Geometric longitude (mean equinox of date) and Earth–Sun distance in AU.
pub fn sun_geometric(t: f64) -> (f64, f64) {
    let t2 = t * t;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let nu = m + c.to_radians();
    let r = 1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos());
    (normalize_360(true_lon), r)
}

/// Apparent longitude of the Sun in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn sun_apparent_longitude(t: f64) -> f64 {
    let (lon, r) = sun_geometric(t);
    normalize_360(lon + nutation_longitude_deg(t) - ABERRATION_DEG / r)
}
