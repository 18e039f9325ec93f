//! The 36 channels. A channel is active when both of its gates are.

use serde::{Deserialize, Serialize};

use crate::centers::Center;

/// A channel between two gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel {
    /// The two gates, lower number first.
    pub gates: (u8, u8),
    pub name: &'static str,
    /// Centers owning `gates.0` and `gates.1`.
    pub centers: (Center, Center),
}

impl Channel {
    /// `"a-b"` key with the lower gate first.
    pub fn key(&self) -> String {
        format!("{}-{}", self.gates.0, self.gates.1)
    }

    pub fn is_active(&self, active: impl Fn(u8) -> bool) -> bool {
        active(self.gates.0) && active(self.gates.1)
    }
}

#[rustfmt::skip]
pub static CHANNELS: [Channel; 36] = [
    Channel { gates: (1, 8),    name: "Inspiration",     centers: (Center::G, Center::Throat) },
    Channel { gates: (2, 14),   name: "The Beat",        centers: (Center::G, Center::Sacral) },
    Channel { gates: (3, 60),   name: "Mutation",        centers: (Center::Sacral, Center::Root) },
    Channel { gates: (4, 63),   name: "Logic",           centers: (Center::Ajna, Center::Head) },
    Channel { gates: (5, 15),   name: "Rhythm",          centers: (Center::Sacral, Center::G) },
    Channel { gates: (6, 59),   name: "Mating",          centers: (Center::SolarPlexus, Center::Sacral) },
    Channel { gates: (7, 31),   name: "The Alpha",       centers: (Center::G, Center::Throat) },
    Channel { gates: (9, 52),   name: "Concentration",   centers: (Center::Sacral, Center::Root) },
    Channel { gates: (10, 20),  name: "Awakening",       centers: (Center::G, Center::Throat) },
    Channel { gates: (10, 34),  name: "Exploration",     centers: (Center::G, Center::Sacral) },
    Channel { gates: (10, 57),  name: "Perfected Form",  centers: (Center::G, Center::Spleen) },
    Channel { gates: (11, 56),  name: "Curiosity",       centers: (Center::Ajna, Center::Throat) },
    Channel { gates: (12, 22),  name: "Openness",        centers: (Center::Throat, Center::SolarPlexus) },
    Channel { gates: (13, 33),  name: "The Prodigal",    centers: (Center::G, Center::Throat) },
    Channel { gates: (16, 48),  name: "The Wavelength",  centers: (Center::Throat, Center::Spleen) },
    Channel { gates: (17, 62),  name: "Acceptance",      centers: (Center::Ajna, Center::Throat) },
    Channel { gates: (18, 58),  name: "Judgment",        centers: (Center::Spleen, Center::Root) },
    Channel { gates: (19, 49),  name: "Synthesis",       centers: (Center::Root, Center::SolarPlexus) },
    Channel { gates: (20, 34),  name: "Charisma",        centers: (Center::Throat, Center::Sacral) },
    Channel { gates: (20, 57),  name: "The Brainwave",   centers: (Center::Throat, Center::Spleen) },
    Channel { gates: (21, 45),  name: "Money",           centers: (Center::Heart, Center::Throat) },
    Channel { gates: (23, 43),  name: "Structuring",     centers: (Center::Throat, Center::Ajna) },
    Channel { gates: (24, 61),  name: "Awareness",       centers: (Center::Ajna, Center::Head) },
    Channel { gates: (25, 51),  name: "Initiation",      centers: (Center::G, Center::Heart) },
    Channel { gates: (26, 44),  name: "Surrender",       centers: (Center::Heart, Center::Spleen) },
    Channel { gates: (27, 50),  name: "Preservation",    centers: (Center::Sacral, Center::Spleen) },
    Channel { gates: (28, 38),  name: "Struggle",        centers: (Center::Spleen, Center::Root) },
    Channel { gates: (29, 46),  name: "Discovery",       centers: (Center::Sacral, Center::G) },
    Channel { gates: (30, 41),  name: "Recognition",     centers: (Center::SolarPlexus, Center::Root) },
    Channel { gates: (32, 54),  name: "Transformation",  centers: (Center::Spleen, Center::Root) },
    Channel { gates: (34, 57),  name: "Power",           centers: (Center::Sacral, Center::Spleen) },
    Channel { gates: (35, 36),  name: "Transitoriness",  centers: (Center::Throat, Center::SolarPlexus) },
    Channel { gates: (37, 40),  name: "Community",       centers: (Center::SolarPlexus, Center::Heart) },
    Channel { gates: (39, 55),  name: "Emoting",         centers: (Center::Root, Center::SolarPlexus) },
    Channel { gates: (42, 53),  name: "Maturation",      centers: (Center::Sacral, Center::Root) },
    Channel { gates: (47, 64),  name: "Abstraction",     centers: (Center::Ajna, Center::Head) },
];

/// An active channel as it appears in a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveChannel {
    pub gates: [u8; 2],
    pub name: String,
    pub centers: [Center; 2],
}

impl From<&Channel> for ActiveChannel {
    fn from(ch: &Channel) -> Self {
        let (a, b) = ch.centers;
        Self {
            gates: [ch.gates.0, ch.gates.1],
            name: ch.name.to_string(),
            centers: [a, b],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_channel_joins_two_distinct_centers() {
        for ch in &CHANNELS {
            let a = Center::of_gate(ch.gates.0);
            let b = Center::of_gate(ch.gates.1);
            assert_eq!(a, Some(ch.centers.0), "{}", ch.key());
            assert_eq!(b, Some(ch.centers.1), "{}", ch.key());
            assert_ne!(a, b, "{}", ch.key());
            assert!(ch.gates.0 < ch.gates.1, "{}", ch.key());
        }
    }

    #[test]
    fn channels_are_unique() {
        let keys: HashSet<String> = CHANNELS.iter().map(|c| c.key()).collect();
        assert_eq!(keys.len(), 36);
    }

    #[test]
    fn every_center_has_a_channel() {
        for c in crate::centers::ALL_CENTERS {
            assert!(
                CHANNELS.iter().any(|ch| {
                    let (a, b) = ch.centers;
                    a == c || b == c
                }),
                "{c}"
            );
        }
    }

    #[test]
    fn activity_needs_both_gates() {
        let ch = &CHANNELS[18];
        assert_eq!(ch.name, "Charisma");
        assert!(ch.is_active(|g| g == 20 || g == 34));
        assert!(!ch.is_active(|g| g == 20));
    }
}
