//! The ephemeris seam and its analytic implementation.

use std::ops::Index;

use hd_frames::normalize_360;
use hd_time::{jd_to_centuries, jd_ut_to_tt};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::body::{ALL_BODIES, Body};
use crate::error::EphemError;
use crate::moon::moon_apparent_longitude;
use crate::nodes::north_node_apparent_longitude;
use crate::planets::{Planet, planet_apparent_longitude};
use crate::sun::sun_apparent_longitude;

/// Supported span either side of J2000.0, in Julian centuries.
const MAX_ABS_CENTURIES: f64 = 50.0;

/// Longitudes of all thirteen bodies at one instant, degrees [0, 360).
///
/// Earth and the South Node are derived from the Sun and the North Node
/// at construction, so they are always exactly opposite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeSet {
    lons: [f64; 13],
}

impl LongitudeSet {
    /// Build from independently computed bodies.
    ///
    /// `planets` is Mercury through Pluto in listing order.
    pub fn new(sun: f64, north_node: f64, moon: f64, planets: [f64; 8]) -> Self {
        let sun = normalize_360(sun);
        let north_node = normalize_360(north_node);
        let mut lons = [0.0; 13];
        lons[Body::Sun.index()] = sun;
        lons[Body::Earth.index()] = normalize_360(sun + 180.0);
        lons[Body::NorthNode.index()] = north_node;
        lons[Body::SouthNode.index()] = normalize_360(north_node + 180.0);
        lons[Body::Moon.index()] = normalize_360(moon);
        for (slot, lon) in lons[Body::Mercury.index()..].iter_mut().zip(planets) {
            *slot = normalize_360(lon);
        }
        Self { lons }
    }

    /// Longitude of one body.
    pub fn get(&self, body: Body) -> f64 {
        self.lons[body.index()]
    }

    /// `(body, longitude)` pairs in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (Body, f64)> + '_ {
        ALL_BODIES.iter().map(|b| (*b, self.lons[b.index()]))
    }
}

impl Index<Body> for LongitudeSet {
    type Output = f64;

    fn index(&self, body: Body) -> &f64 {
        &self.lons[body.index()]
    }
}

impl Serialize for LongitudeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.lons.len()))?;
        for (body, lon) in self.iter() {
            map.serialize_entry(&body, &lon)?;
        }
        map.end()
    }
}

/// Source of apparent geocentric longitudes.
///
/// Implementations must be pure functions of the instant.
pub trait Ephemeris: Send + Sync {
    /// Apparent Sun longitude at a UT Julian Date, degrees [0, 360).
    fn sun_longitude(&self, jd_ut: f64) -> Result<f64, EphemError>;

    /// All thirteen longitudes at a UT Julian Date.
    fn longitudes_at(&self, jd_ut: f64) -> Result<LongitudeSet, EphemError>;
}

/// Closed-form series ephemeris (Meeus Sun/Moon, Keplerian planets).
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }
}

/// Julian centuries of TT since J2000.0 for a UT Julian Date.
pub fn centuries_tt(jd_ut: f64) -> Result<f64, EphemError> {
    if !jd_ut.is_finite() {
        return Err(EphemError::InvalidEpoch("epoch is not finite"));
    }
    let t = jd_to_centuries(jd_ut_to_tt(jd_ut));
    if t.abs() > MAX_ABS_CENTURIES {
        return Err(EphemError::InvalidEpoch(
            "epoch more than 5000 years from J2000",
        ));
    }
    Ok(t)
}

const PLANETS: [Planet; 8] = [
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

impl Ephemeris for AnalyticEphemeris {
    fn sun_longitude(&self, jd_ut: f64) -> Result<f64, EphemError> {
        let t = centuries_tt(jd_ut)?;
        Ok(sun_apparent_longitude(t))
    }

    fn longitudes_at(&self, jd_ut: f64) -> Result<LongitudeSet, EphemError> {
        let t = centuries_tt(jd_ut)?;
        let mut planets = [0.0; 8];
        for (slot, planet) in planets.iter_mut().zip(PLANETS) {
            *slot = planet_apparent_longitude(planet, t)?;
        }
        Ok(LongitudeSet::new(
            sun_apparent_longitude(t),
            north_node_apparent_longitude(t),
            moon_apparent_longitude(t),
            planets,
        ))
    }
}
