//! Geocentric planetary longitudes from Keplerian elements.
//!
//! Elements and secular rates are the "approximate positions of the major
//! planets" set (Standish, JPL), valid 1800–2050 AD and usable well beyond
//! with slowly growing error. Positions are heliocentric in the J2000
//! ecliptic; the geocentric vector is taken against the Earth–Moon
//! barycentre, corrected once for light-time, then precessed to the equinox
//! of date and corrected for nutation.

use hd_frames::{
    EclipticCoords, general_precession_longitude_deg, normalize_360, nutation_longitude_deg,
    rectangular_to_ecliptic,
};

use crate::error::EphemError;

/// Light-time for one AU, in days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Newton iteration cap for Kepler's equation.
const KEPLER_MAX_ITER: u32 = 30;

/// Convergence threshold for Kepler's equation, in radians.
const KEPLER_TOL: f64 = 1e-12;

/// A planet with tabulated elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    EarthMoonBary,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Elements at J2000 followed by rates per Julian century:
/// `a (AU), e, I (deg), L (deg), ϖ (deg), Ω (deg)`.
#[rustfmt::skip]
static ELEMENTS: [[f64; 12]; 9] = [
    //        a            e            I              L               ϖ              Ω
    [ 0.38709927, 0.20563593,  7.00497902, 252.25032350,  77.45779628,  48.33076593,
      0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
    [ 0.72333566, 0.00677672,  3.39467605, 181.97909950, 131.60246718,  76.67984255,
      0.00000390,-0.00004107, -0.00078890, 58517.81538729,  0.00268329, -0.27769418],
    [ 1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193,   0.0,
      0.00000562,-0.00004392, -0.01294668, 35999.37244981,  0.32327364,  0.0],
    [ 1.52371034, 0.09339410,  1.84969142,  -4.55343205, -23.94362959,  49.55953891,
      0.00001847, 0.00007882, -0.00813131, 19140.30268499,  0.44441088, -0.29257343],
    [ 5.20288700, 0.04838624,  1.30439695,  34.39644051,  14.72847983, 100.47390909,
     -0.00011607,-0.00013253, -0.00183714,  3034.74612775,  0.21252668,  0.20469106],
    [ 9.53667594, 0.05386179,  2.48599187,  49.95424423,  92.59887831, 113.66242448,
     -0.00125060,-0.00050991,  0.00193609,  1222.49362201, -0.41897216, -0.28867794],
    [19.18916464, 0.04725744,  0.77263783, 313.23810451, 170.95427630,  74.01692503,
     -0.00196176,-0.00004397, -0.00242939,   428.48202785,  0.40805281,  0.04240589],
    [30.06992276, 0.00859048,  1.77004347, -55.12002969,  44.96476227, 131.78422574,
      0.00026291, 0.00005105,  0.00035372,   218.45945325, -0.32241464, -0.00508664],
    [39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684,
     -0.00031596, 0.00005170,  0.00004818,   145.20780515, -0.04062942, -0.01183482],
];

impl Planet {
    const fn row(self) -> usize {
        self as usize
    }
}

/// Solve Kepler's equation `E − e·sin E = M` (radians) by Newton iteration.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> Result<f64, EphemError> {
    let mut ecc_anom = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..KEPLER_MAX_ITER {
        let delta = (ecc_anom - e * ecc_anom.sin() - mean_anomaly) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < KEPLER_TOL {
            return Ok(ecc_anom);
        }
    }
    Err(EphemError::NoConvergence("Kepler's equation"))
}

/// Heliocentric rectangular position in the J2000 ecliptic, in AU.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn heliocentric_position(planet: Planet, t: f64) -> Result<[f64; 3], EphemError> {
    let el = &ELEMENTS[planet.row()];
    let a = el[0] + el[6] * t;
    let e = el[1] + el[7] * t;
    let incl = (el[2] + el[8] * t).to_radians();
    let mean_lon = el[3] + el[9] * t;
    let peri_lon = el[4] + el[10] * t;
    let node = (el[5] + el[11] * t).to_radians();

    let arg_peri = peri_lon.to_radians() - node;
    let mean_anom = (normalize_360(mean_lon - peri_lon + 180.0) - 180.0).to_radians();
    let ecc_anom = solve_kepler(mean_anom, e)?;

    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    Ok([
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ])
}

/// Geometric geocentric position in the J2000 ecliptic, light-time corrected.
pub fn geocentric_j2000(planet: Planet, t: f64) -> Result<EclipticCoords, EphemError> {
    let earth = heliocentric_position(Planet::EarthMoonBary, t)?;
    let first = heliocentric_position(planet, t)?;
    let distance = rectangular_to_ecliptic(&sub(&first, &earth)).distance_au;

    let tau_centuries = LIGHT_TIME_DAYS_PER_AU * distance / 36_525.0;
    let retarded = heliocentric_position(planet, t - tau_centuries)?;
    Ok(rectangular_to_ecliptic(&sub(&retarded, &earth)))
}

/// Apparent geocentric longitude (equinox of date) in degrees [0, 360).
pub fn planet_apparent_longitude(planet: Planet, t: f64) -> Result<f64, EphemError> {
    let geo = geocentric_j2000(planet, t)?;
    Ok(normalize_360(
        geo.lon_deg + general_precession_longitude_deg(t) + nutation_longitude_deg(t),
    ))
}

fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_orbit_is_identity() {
        let e_anom = solve_kepler(1.234, 0.0).unwrap();
        assert!((e_anom - 1.234).abs() < 1e-12);
    }

    #[test]
    fn kepler_satisfies_equation() {
        for &(m, e) in &[(0.3, 0.2056), (-2.9, 0.2488), (3.1, 0.0934)] {
            let ea = solve_kepler(m, e).unwrap();
            assert!((ea - e * ea.sin() - m).abs() < 1e-10, "m={m} e={e}");
        }
    }

    #[test]
    fn earth_moon_bary_near_one_au() {
        let p = heliocentric_position(Planet::EarthMoonBary, 0.0).unwrap();
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 0.9833).abs() < 0.001, "r = {r}");
    }

    #[test]
    fn inner_planets_at_j2000() {
        let mercury = planet_apparent_longitude(Planet::Mercury, 0.0).unwrap();
        let venus = planet_apparent_longitude(Planet::Venus, 0.0).unwrap();
        let mars = planet_apparent_longitude(Planet::Mars, 0.0).unwrap();
        assert!((mercury - 271.9).abs() < 1.0, "Mercury = {mercury}");
        assert!((venus - 241.6).abs() < 1.0, "Venus = {venus}");
        assert!((mars - 327.9).abs() < 1.0, "Mars = {mars}");
    }
}
