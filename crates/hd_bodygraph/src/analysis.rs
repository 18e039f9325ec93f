//! Gate-level bodygraph analysis: channels, defined centers, connectivity,
//! definition, type and authority.
//!
//! Everything is derived from one active-gate set, so type, authority and
//! definition can never disagree about which centers are defined.

use std::collections::BTreeSet;

use crate::centers::{ALL_CENTERS, Center, MOTORS};
use crate::channels::{CHANNELS, Channel};
use crate::kinds::{Authority, Definition, HdType};

/// Bodygraph derived from a set of active gates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bodygraph {
    gates: BTreeSet<u8>,
    channels: Vec<&'static Channel>,
    defined: [bool; 9],
}

impl Bodygraph {
    /// Analyse a gate set. Numbers outside 1-64 are ignored.
    pub fn from_gates<I: IntoIterator<Item = u8>>(gates: I) -> Self {
        let gates: BTreeSet<u8> = gates.into_iter().filter(|g| (1..=64).contains(g)).collect();
        let channels: Vec<&'static Channel> = CHANNELS
            .iter()
            .filter(|ch| ch.is_active(|g| gates.contains(&g)))
            .collect();

        let mut defined = [false; 9];
        for ch in &channels {
            defined[ch.centers.0.index()] = true;
            defined[ch.centers.1.index()] = true;
        }

        Self {
            gates,
            channels,
            defined,
        }
    }

    /// Active gates, ascending.
    pub fn gates(&self) -> &BTreeSet<u8> {
        &self.gates
    }

    /// Active channels in table order.
    pub fn channels(&self) -> &[&'static Channel] {
        &self.channels
    }

    pub fn is_defined(&self, center: Center) -> bool {
        self.defined[center.index()]
    }

    /// Defined centers, top to bottom.
    pub fn defined_centers(&self) -> Vec<Center> {
        ALL_CENTERS
            .into_iter()
            .filter(|c| self.is_defined(*c))
            .collect()
    }

    /// Active gates owned by `center`, ascending.
    pub fn center_gates(&self, center: Center) -> Vec<u8> {
        self.gates
            .iter()
            .copied()
            .filter(|g| center.gates().contains(g))
            .collect()
    }

    /// Centers reachable from `start` along active channels, including
    /// `start` itself when it is defined.
    fn reachable_from(&self, start: Center) -> [bool; 9] {
        let mut seen = [false; 9];
        if !self.is_defined(start) {
            return seen;
        }
        let mut stack = vec![start];
        seen[start.index()] = true;
        while let Some(c) = stack.pop() {
            for ch in &self.channels {
                let next = match ch.centers {
                    (a, b) if a == c => b,
                    (a, b) if b == c => a,
                    _ => continue,
                };
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    stack.push(next);
                }
            }
        }
        seen
    }

    /// Whether `a` and `b` are joined by a path of active channels.
    pub fn connected(&self, a: Center, b: Center) -> bool {
        self.reachable_from(a)[b.index()]
    }

    /// Connected groups of defined centers.
    pub fn components(&self) -> Vec<Vec<Center>> {
        let mut assigned = [false; 9];
        let mut groups = Vec::new();
        for c in ALL_CENTERS {
            if !self.is_defined(c) || assigned[c.index()] {
                continue;
            }
            let reach = self.reachable_from(c);
            let group: Vec<Center> = ALL_CENTERS
                .into_iter()
                .filter(|x| reach[x.index()])
                .collect();
            for x in &group {
                assigned[x.index()] = true;
            }
            groups.push(group);
        }
        groups
    }

    pub fn definition(&self) -> Definition {
        Definition::from_components(self.components().len())
    }

    fn motor_to_throat(&self, motors: &[Center]) -> bool {
        let throat = self.reachable_from(Center::Throat);
        motors.iter().any(|m| throat[m.index()])
    }

    pub fn hd_type(&self) -> HdType {
        if self.defined.iter().all(|d| !d) {
            return HdType::Reflector;
        }
        if self.is_defined(Center::Sacral) {
            if self.motor_to_throat(&MOTORS) {
                HdType::ManifestingGenerator
            } else {
                HdType::Generator
            }
        } else if self.motor_to_throat(&[Center::Heart, Center::SolarPlexus, Center::Root]) {
            HdType::Manifestor
        } else {
            HdType::Projector
        }
    }

    pub fn authority(&self) -> Authority {
        if self.is_defined(Center::SolarPlexus) {
            Authority::Emotional
        } else if self.is_defined(Center::Sacral) {
            Authority::Sacral
        } else if self.is_defined(Center::Spleen) {
            Authority::Splenic
        } else if self.is_defined(Center::Heart) {
            Authority::Ego
        } else if self.connected(Center::G, Center::Throat) {
            Authority::SelfProjected
        } else if self.is_defined(Center::Head) || self.is_defined(Center::Ajna) {
            Authority::Environmental
        } else if self.defined.iter().all(|d| !d) {
            Authority::Lunar
        } else {
            Authority::None
        }
    }
}
