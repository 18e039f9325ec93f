//! Longitude of the Moon's true ascending node.
//!
//! Mean node: the fifth Delaunay argument Ω. True node: Ω plus the principal
//! short-period perturbations (Meeus, *Astronomical Algorithms* 2nd ed.,
//! Chapter 47, p. 344). The South Node is always the North Node + 180°.

use hd_frames::{fundamental_arguments, normalize_360, nutation_longitude_deg};

/// Perturbation terms for the true node.
///
/// Each row: `[nl, nl', nF, nD, amplitude (deg)]` over the Delaunay
/// arguments `l = M'`, `l' = M`, `F`, `D`.
#[rustfmt::skip]
static TRUE_NODE_TERMS: [[f64; 5]; 5] = [
    //  nl   nl'   nF    nD   amplitude
    [ 0.0,  0.0, -2.0,  2.0, -1.4979],
    [ 0.0,  1.0,  0.0,  0.0, -0.1500],
    [ 0.0,  0.0,  0.0,  2.0, -0.1226],
    [ 0.0,  0.0,  2.0,  0.0,  0.1176],
    [ 2.0,  0.0, -2.0,  0.0, -0.0801],
];

/// Mean North Node longitude (mean equinox of date), degrees [0, 360).
pub fn mean_node_deg(t: f64) -> f64 {
    normalize_360(fundamental_arguments(t)[4].to_degrees())
}

/// True North Node longitude (mean equinox of date), degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn true_node_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    let correction: f64 = TRUE_NODE_TERMS
        .iter()
        .map(|row| {
            let arg = row[0] * args[0] + row[1] * args[1] + row[2] * args[2] + row[3] * args[3];
            row[4] * arg.sin()
        })
        .sum();
    normalize_360(args[4].to_degrees() + correction)
}

/// Apparent North Node longitude (true equinox of date), degrees [0, 360).
pub fn north_node_apparent_longitude(t: f64) -> f64 {
    normalize_360(true_node_deg(t) + nutation_longitude_deg(t))
}
