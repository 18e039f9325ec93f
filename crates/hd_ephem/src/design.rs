//! Design-instant search: the moment the Sun stood a fixed solar arc
//! (88°) behind its longitude at birth.
//!
//! Algorithm: seed with the mean solar motion, bracket the root of
//! `f(t) = normalize_pm180(sun(t) − target)` around the seed, then bisect.
//! Apparent solar longitude is monotonic over the bracket, so a sign change
//! means exactly one root.

use hd_frames::{normalize_360, normalize_pm180};
use hd_time::UtcTime;

use crate::error::EphemError;
use crate::provider::Ephemeris;

/// Mean solar motion in degrees per day.
pub const MEAN_SOLAR_MOTION_DEG_PER_DAY: f64 = 0.985_647_3;

/// Configuration for the design-instant search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignConfig {
    /// Solar arc between design and birth, in degrees (default 88).
    pub solar_arc_deg: f64,
    /// Angular convergence threshold, in degrees (default 1e-4).
    pub tolerance_deg: f64,
    /// Maximum bisection iterations (default 50).
    pub max_iterations: u32,
    /// Half-width of the bracket around the seed, in days (default 5).
    pub bracket_days: f64,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            solar_arc_deg: 88.0,
            tolerance_deg: 1e-4,
            max_iterations: 50,
            bracket_days: 5.0,
        }
    }
}

impl DesignConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.solar_arc_deg.is_finite() || self.solar_arc_deg <= 0.0 || self.solar_arc_deg >= 360.0
        {
            return Err("solar_arc_deg must be in (0, 360)");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.bracket_days.is_finite() || self.bracket_days <= 0.0 || self.bracket_days > 30.0 {
            return Err("bracket_days must be in (0, 30]");
        }
        Ok(())
    }
}

/// Result of a design-instant search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignInstant {
    /// Design instant as a UT Julian Date.
    pub jd_ut: f64,
    /// Design instant in UTC.
    pub utc: UtcTime,
    /// Apparent Sun longitude at the design instant, degrees.
    pub sun_longitude_deg: f64,
    /// Target longitude the search converged on, degrees.
    pub target_deg: f64,
    /// Bisection steps taken.
    pub iterations: u32,
}

/// Find the design instant for a personality instant (UT Julian Date).
pub fn find_design_instant(
    ephem: &dyn Ephemeris,
    personality_jd_ut: f64,
    config: &DesignConfig,
) -> Result<DesignInstant, EphemError> {
    config.validate().map_err(EphemError::InvalidConfig)?;

    let sun_p = ephem.sun_longitude(personality_jd_ut)?;
    let target = normalize_360(sun_p - config.solar_arc_deg);
    let offset = |jd: f64| -> Result<f64, EphemError> {
        Ok(normalize_pm180(ephem.sun_longitude(jd)? - target))
    };

    let seed = personality_jd_ut - config.solar_arc_deg / MEAN_SOLAR_MOTION_DEG_PER_DAY;
    let mut t_a = seed - config.bracket_days;
    let mut t_b = seed + config.bracket_days;
    let mut f_a = offset(t_a)?;
    let f_b = offset(t_b)?;
    if f_a * f_b > 0.0 {
        return Err(EphemError::NoConvergence(
            "design instant not bracketed around the mean-motion seed",
        ));
    }

    for iteration in 1..=config.max_iterations {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = offset(t_mid)?;

        if f_mid.abs() < config.tolerance_deg {
            return Ok(DesignInstant {
                jd_ut: t_mid,
                utc: UtcTime::from_jd_ut(t_mid),
                sun_longitude_deg: normalize_360(target + f_mid),
                target_deg: target,
                iterations: iteration,
            });
        }

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
    }

    Err(EphemError::NoConvergence(
        "design instant search exceeded max_iterations",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{AnalyticEphemeris, LongitudeSet};
    use hd_time::J2000_JD;

    #[test]
    fn default_config_valid() {
        assert!(DesignConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_config() {
        let base = DesignConfig::default();
        let cases = [
            DesignConfig { solar_arc_deg: 0.0, ..base },
            DesignConfig { solar_arc_deg: f64::NAN, ..base },
            DesignConfig { tolerance_deg: 0.0, ..base },
            DesignConfig { max_iterations: 0, ..base },
            DesignConfig { bracket_days: -1.0, ..base },
            DesignConfig { bracket_days: 90.0, ..base },
        ];
        for c in cases {
            assert!(c.validate().is_err(), "{c:?}");
        }
        let err = find_design_instant(&AnalyticEphemeris, J2000_JD, &cases[3]).unwrap_err();
        assert!(matches!(err, EphemError::InvalidConfig(_)));
    }

    #[test]
    fn converges_on_target() {
        let cfg = DesignConfig::default();
        let d = find_design_instant(&AnalyticEphemeris, J2000_JD, &cfg).unwrap();
        let sun = AnalyticEphemeris.sun_longitude(d.jd_ut).unwrap();
        assert!(normalize_pm180(sun - d.target_deg).abs() < cfg.tolerance_deg);
        assert!(d.jd_ut < J2000_JD);
        assert!(d.iterations <= cfg.max_iterations);
    }

    #[test]
    fn iteration_cap_is_a_domain_error() {
        let cfg = DesignConfig {
            max_iterations: 1,
            ..DesignConfig::default()
        };
        let err = find_design_instant(&AnalyticEphemeris, J2000_JD, &cfg).unwrap_err();
        assert!(matches!(err, EphemError::NoConvergence(_)));
    }

    /// Sun frozen at one longitude: no root can be bracketed.
    struct FrozenSun;

    impl Ephemeris for FrozenSun {
        fn sun_longitude(&self, _jd_ut: f64) -> Result<f64, EphemError> {
            Ok(42.0)
        }

        fn longitudes_at(&self, _jd_ut: f64) -> Result<LongitudeSet, EphemError> {
            Ok(LongitudeSet::new(42.0, 0.0, 0.0, [0.0; 8]))
        }
    }

    #[test]
    fn unbracketed_root_is_a_domain_error() {
        let err = find_design_instant(&FrozenSun, J2000_JD, &DesignConfig::default()).unwrap_err();
        assert!(matches!(err, EphemError::NoConvergence(_)));
    }
}
