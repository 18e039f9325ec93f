//! Apparent geocentric longitude of the Moon.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 47: the periodic
//! longitude terms of Table 47.A with the eccentricity factor E and the
//! additive A1/A2 terms. The mean arguments come from
//! the IERS Delaunay polynomials; the mean longitude is `F + Ω`.
//! Accuracy ≈ 10″.

use hd_frames::{fundamental_arguments, normalize_360, nutation_longitude_deg};

/// Periodic terms in longitude.
///
/// Each row: `[D, M, M', F, Σl coefficient (1e-6 deg)]`.
/// Rows with `|M| = 1` scale by E, rows with `|M| = 2` by E².
#[rustfmt::skip]
static LONGITUDE_TERMS: [[i32; 5]; 59] = [
    [0,  0,  1,  0, 6288774],
    [2,  0, -1,  0, 1274027],
    [2,  0,  0,  0,  658314],
    [0,  0,  2,  0,  213618],
    [0,  1,  0,  0, -185116],
    [0,  0,  0,  2, -114332],
    [2,  0, -2,  0,   58793],
    [2, -1, -1,  0,   57066],
    [2,  0,  1,  0,   53322],
    [2, -1,  0,  0,   45758],
    [0,  1, -1,  0,  -40923],
    [1,  0,  0,  0,  -34720],
    [0,  1,  1,  0,  -30383],
    [2,  0,  0, -2,   15327],
    [0,  0,  1,  2,  -12528],
    [0,  0,  1, -2,   10980],
    [4,  0, -1,  0,   10675],
    [0,  0,  3,  0,   10034],
    [4,  0, -2,  0,    8548],
    [2,  1, -1,  0,   -7888],
    [2,  1,  0,  0,   -6766],
    [1,  0, -1,  0,   -5163],
    [1,  1,  0,  0,    4987],
    [2, -1,  1,  0,    4036],
    [2,  0,  2,  0,    3994],
    [4,  0,  0,  0,    3861],
    [2,  0, -3,  0,    3665],
    [0,  1, -2,  0,   -2689],
    [2,  0, -1,  2,   -2602],
    [2, -1, -2,  0,    2390],
    [1,  0,  1,  0,   -2348],
    [2, -2,  0,  0,    2236],
    [0,  1,  2,  0,   -2120],
    [0,  2,  0,  0,   -2069],
    [2, -2, -1,  0,    2048],
    [2,  0,  1, -2,   -1773],
    [2,  0,  0,  2,   -1595],
    [4, -1, -1,  0,    1215],
    [0,  0,  2,  2,   -1110],
    [3,  0, -1,  0,    -892],
    [2,  1,  1,  0,    -810],
    [4, -1, -2,  0,     759],
    [0,  2, -1,  0,    -713],
    [2,  2, -1,  0,    -700],
    [2,  1, -2,  0,     691],
    [2, -1,  0, -2,     596],
    [4,  0,  1,  0,     549],
    [0,  0,  4,  0,     537],
    [4, -1,  0,  0,     520],
    [1,  0, -2,  0,    -487],
    [2,  1,  0, -2,    -399],
    [0,  0,  2, -2,    -381],
    [1,  1,  1,  0,     351],
    [3,  0, -2,  0,    -340],
    [4,  0, -3,  0,     330],
    [2, -1,  2,  0,     327],
    [0,  2,  1,  0,    -323],
    [1,  1, -1,  0,     299],
    [2,  0,  3,  0,     294],
];

/// Geometric longitude of the Moon (mean equinox of date), in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_geometric_longitude(t: f64) -> f64 {
    let [m_moon, m_sun, f, d, om] = fundamental_arguments(t);
    let mean_lon = f + om;
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let mut sigma_l = 0.0_f64;
    for row in &LONGITUDE_TERMS {
        let arg = row[0] as f64 * d + row[1] as f64 * m_sun + row[2] as f64 * m_moon
            + row[3] as f64 * f;
        let scale = match row[1].abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sigma_l += row[4] as f64 * scale * arg.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    sigma_l += 3958.0 * a1.sin() + 1962.0 * (mean_lon - f).sin() + 318.0 * a2.sin();

    normalize_360(mean_lon.to_degrees() + sigma_l * 1e-6)
}

/// Apparent longitude of the Moon in degrees [0, 360).
pub fn moon_apparent_longitude(t: f64) -> f64 {
    normalize_360(moon_geometric_longitude(t) + nutation_longitude_deg(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 Apr 12.0 TD: geometric λ = 133.162655°, apparent 133.167265°.
        let t = -0.077_221_081_451;
        let geo = moon_geometric_longitude(t);
        assert!((geo - 133.1627).abs() < 0.01, "geometric = {geo}");
        let app = moon_apparent_longitude(t);
        assert!((app - 133.1673).abs() < 0.01, "apparent = {app}");
    }

    #[test]
    fn moves_about_13_degrees_per_day() {
        let day = 1.0 / 36525.0;
        let a = moon_apparent_longitude(0.0);
        let b = moon_apparent_longitude(day);
        let delta = normalize_360(b - a);
        assert!((11.5..15.5).contains(&delta), "daily motion = {delta}");
    }
}
