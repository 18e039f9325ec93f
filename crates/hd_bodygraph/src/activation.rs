//! Gate activations for one instant.

use hd_ephem::{ALL_BODIES, Body, LongitudeSet};
use hd_time::UtcTime;
use serde::{Deserialize, Serialize};

use crate::gates::gate_position;

/// Which of the two instants an activation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Source {
    /// Birth instant (conscious).
    Personality,
    /// Design instant (unconscious).
    Design,
}

impl Source {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Personality => "Personality",
            Self::Design => "Design",
        }
    }
}

/// One body's gate activation at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateActivation {
    pub body: Body,
    pub source: Source,
    pub gate: u8,
    pub line: u8,
    pub color: u8,
    pub tone: u8,
    pub base: u8,
    /// Tropical longitude the activation came from, degrees.
    pub longitude: f64,
}

impl GateActivation {
    pub fn new(body: Body, source: Source, lon_deg: f64) -> Self {
        let p = gate_position(lon_deg);
        Self {
            body,
            source,
            gate: p.gate,
            line: p.line,
            color: p.color,
            tone: p.tone,
            base: p.base,
            longitude: lon_deg,
        }
    }
}

/// All thirteen activations for one instant.
///
/// Only constructible from a full [`LongitudeSet`], so every body is present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationSet {
    source: Source,
    instant: UtcTime,
    activations: [GateActivation; 13],
}

impl ActivationSet {
    pub fn from_longitudes(lons: &LongitudeSet, source: Source, instant: UtcTime) -> Self {
        let activations = ALL_BODIES.map(|b| GateActivation::new(b, source, lons[b]));
        Self {
            source,
            instant,
            activations,
        }
    }

    pub fn source(&self) -> Source {
        self.source
    }

    /// The instant the longitudes were taken at, UTC.
    pub fn instant(&self) -> UtcTime {
        self.instant
    }

    pub fn get(&self, body: Body) -> &GateActivation {
        &self.activations[body.index()]
    }

    /// Activations in body listing order.
    pub fn as_slice(&self) -> &[GateActivation] {
        &self.activations
    }

    pub fn gates(&self) -> impl Iterator<Item = u8> + '_ {
        self.activations.iter().map(|a| a.gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_carries_longitude() {
        let a = GateActivation::new(Body::Moon, Source::Design, 100.37);
        assert_eq!((a.gate, a.line), (39, 1));
        assert_eq!(a.longitude, 100.37);
        assert_eq!(a.source, Source::Design);
    }

    #[test]
    fn set_covers_all_bodies_in_order() {
        let lons = LongitudeSet::new(
            280.37,
            125.0,
            223.3,
            [271.9, 241.6, 327.9, 25.2, 40.4, 314.8, 303.2, 251.5],
        );
        let instant = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        let set = ActivationSet::from_longitudes(&lons, Source::Personality, instant);
        assert_eq!(set.as_slice().len(), 13);
        for (a, b) in set.as_slice().iter().zip(ALL_BODIES) {
            assert_eq!(a.body, b);
            assert_eq!(a.source, Source::Personality);
        }
        assert_eq!(set.get(Body::Sun).gate, 38);
        assert_eq!(set.get(Body::Earth).gate, 39);
    }
}
