//! Delaunay fundamental arguments and nutation in longitude.
//!
//! Δψ is summed from the ten largest lunisolar terms of IAU 2000B
//! (IERS Conventions 2010, Table 5.3b). The truncation error is below
//! 0.1″, far inside a single gate-line tone.

use std::f64::consts::TAU;

/// Arcseconds to radians.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// The five Delaunay fundamental arguments in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
///
/// Returns `[l, l', F, D, Ω]`:
/// - `l`  = mean anomaly of the Moon
/// - `l'` = mean anomaly of the Sun
/// - `F`  = mean argument of latitude of the Moon
/// - `D`  = mean elongation of the Moon from the Sun
/// - `Ω`  = mean longitude of the Moon's ascending node
///
/// Polynomials from IERS Conventions 2010, Table 5.2e.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Leading IAU 2000B terms for Δψ.
///
/// Each row: `[nl, nl', nF, nD, nΩ, S, S']` with S, S' in 0.1 μas.
#[rustfmt::skip]
static DPSI_TERMS: [[i64; 7]; 10] = [
    //  nl  nl'  nF   nD   nΩ           S        S'
    [   0,   0,   0,   0,   1, -172064161, -174666],
    [   0,   0,   2,  -2,   2,  -13170906,   -1675],
    [   0,   0,   2,   0,   2,   -2276413,    -234],
    [   0,   0,   0,   0,   2,    2074554,     207],
    [   0,   1,   0,   0,   0,    1475877,   -3633],
    [   0,   1,   2,  -2,   2,    -516821,    1226],
    [   1,   0,   0,   0,   0,     711159,      73],
    [   0,   0,   2,   0,   1,    -387298,    -367],
    [   1,   0,   2,   0,   2,    -301461,     -36],
    [   0,  -1,   2,  -2,   2,     215829,    -494],
];

/// Nutation in longitude Δψ, in arcseconds.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    let dpsi: f64 = DPSI_TERMS
        .iter()
        .map(|row| {
            let arg = row[..5]
                .iter()
                .zip(args.iter())
                .map(|(n, a)| *n as f64 * a)
                .sum::<f64>();
            (row[5] as f64 + row[6] as f64 * t) * arg.sin()
        })
        .sum();
    dpsi * 1e-7
}

/// Nutation in longitude Δψ, in degrees.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    nutation_longitude_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_argument_at_j2000() {
        let args = fundamental_arguments(0.0);
        assert!((args[4].to_degrees() - 125.0446).abs() < 1e-3);
    }

    #[test]
    fn dpsi_at_j2000() {
        // Full IAU 2000A gives Δψ ≈ -13.93″ at J2000.0.
        let dpsi = nutation_longitude_arcsec(0.0);
        assert!((dpsi - (-13.93)).abs() < 0.3, "Δψ = {dpsi}");
    }

    #[test]
    fn amplitude_bounded() {
        for i in -20..=20 {
            let t = i as f64 * 0.05;
            let dpsi = nutation_longitude_arcsec(t);
            assert!(dpsi.abs() < 20.0, "t={t}: Δψ = {dpsi}");
        }
    }

    #[test]
    fn degree_form_matches() {
        let t = 0.24;
        assert!((nutation_longitude_deg(t) * 3600.0 - nutation_longitude_arcsec(t)).abs() < 1e-12);
    }
}
