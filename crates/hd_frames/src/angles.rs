//! Angle normalisation.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r >= 180.0 { r - 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_into_range() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(-90.0), 270.0);
        assert_eq!(normalize_360(725.0), 5.0);
        assert_eq!(normalize_360(-1e-17), 0.0);
    }

    #[test]
    fn signed_range() {
        assert_eq!(normalize_pm180(190.0), -170.0);
        assert_eq!(normalize_pm180(-190.0), 170.0);
        assert_eq!(normalize_pm180(180.0), -180.0);
        assert_eq!(normalize_pm180(0.0), 0.0);
    }
}
