//! Reference-frame helpers for the analytic ephemeris.
//!
//! Everything here is a pure function of Julian centuries (TT) since J2000.0.

pub mod angles;
pub mod ecliptic;
pub mod nutation;
pub mod precession;

pub use angles::{normalize_360, normalize_pm180};
pub use ecliptic::{EclipticCoords, rectangular_to_ecliptic};
pub use nutation::{fundamental_arguments, nutation_longitude_arcsec, nutation_longitude_deg};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
