//! Ecliptic rectangular → spherical conversion.

use crate::angles::normalize_360;

/// Ecliptic spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoords {
    /// Longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees, [-90, 90].
    pub lat_deg: f64,
    /// Distance in AU.
    pub distance_au: f64,
}

/// Convert ecliptic rectangular `[x, y, z]` (AU) to spherical coordinates.
pub fn rectangular_to_ecliptic(xyz: &[f64; 3]) -> EclipticCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return EclipticCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance_au: 0.0,
        };
    }
    EclipticCoords {
        lon_deg: normalize_360(y.atan2(x).to_degrees()),
        lat_deg: (z / r).asin().to_degrees(),
        distance_au: r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes() {
        let c = rectangular_to_ecliptic(&[0.0, 2.0, 0.0]);
        assert!((c.lon_deg - 90.0).abs() < 1e-12);
        assert_eq!(c.lat_deg, 0.0);
        assert_eq!(c.distance_au, 2.0);

        let c = rectangular_to_ecliptic(&[0.0, -1.0, 0.0]);
        assert!((c.lon_deg - 270.0).abs() < 1e-12);
    }

    #[test]
    fn latitude_from_z() {
        let c = rectangular_to_ecliptic(&[1.0, 0.0, 1.0]);
        assert!((c.lat_deg - 45.0).abs() < 1e-12);
    }

    #[test]
    fn origin_is_degenerate() {
        let c = rectangular_to_ecliptic(&[0.0, 0.0, 0.0]);
        assert_eq!(c.distance_au, 0.0);
    }
}
