//! Incarnation cross and the four variable arrows.

use serde::{Deserialize, Serialize};

use crate::gates::wheel_index_of;

/// Cross angle, fixed by the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrossAngle {
    #[serde(rename = "Right Angle")]
    Right,
    #[serde(rename = "Left Angle")]
    Left,
    Juxtaposition,
}

impl CrossAngle {
    /// Angle for a `conscious/unconscious` profile.
    pub const fn from_profile(conscious: u8, unconscious: u8) -> Self {
        if conscious >= 5 {
            Self::Left
        } else if conscious == 4 && unconscious == 1 {
            Self::Juxtaposition
        } else {
            Self::Right
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Right => "Right Angle",
            Self::Left => "Left Angle",
            Self::Juxtaposition => "Juxtaposition",
        }
    }
}

/// Right Angle cross names by quarter position (`wheel_index mod 16`).
///
/// The four Sun gates sharing a position mod 16 share a Right Angle cross.
pub const RIGHT_ANGLE_NAMES: [&str; 16] = [
    "the Unexpected",
    "the Four Ways",
    "the Sphinx",
    "Explanation",
    "Contagion",
    "the Sleeping Phoenix",
    "Planning",
    "Consciousness",
    "Rulership",
    "Eden",
    "the Vessel of Love",
    "Service",
    "Tension",
    "Penetration",
    "Maya",
    "Laws",
];

/// Left Angle cross names by half-wheel position (`wheel_index mod 32`).
///
/// A Sun gate and the gate across the wheel share a Left Angle cross.
#[rustfmt::skip]
pub const LEFT_ANGLE_NAMES: [&str; 32] = [
    "Alpha", "Refinement", "Masks", "Revolution",
    "Industry", "Spirit", "Migration", "Dominion",
    "Informing", "the Plane", "Healing", "Upheaval",
    "Endeavor", "the Clarion", "Limitation", "Wishes",
    "Alignment", "Incarnation", "Defiance", "Dedication",
    "Uncertainty", "Duality", "Identification", "Separation",
    "Confrontation", "Education", "Prevention", "Demands",
    "Individualism", "Cycles", "Obscuration", "Distraction",
];

/// Juxtaposition cross names, indexed by personality Sun gate − 1.
#[rustfmt::skip]
pub const JUXTAPOSITION_NAMES: [&str; 64] = [
    "Self-Expression", "the Driver", "Mutation", "Formulization",
    "Habits", "Conflict", "Interaction", "Contribution",
    "Focus", "Behavior", "Ideas", "Articulation",
    "Listening", "Empowering", "Extremes", "Experimentation",
    "Opinions", "Correction", "Need", "the Now",
    "Control", "Grace", "Assimilation", "Rationalization",
    "Innocence", "the Trickster", "Caring", "Risks",
    "Commitment", "Fates", "Influence", "Conservation",
    "Retreat", "Power", "Experience", "Crisis",
    "Bargains", "Opposition", "Provocation", "Denial",
    "Fantasy", "Completion", "Insight", "Alertness",
    "Possession", "Serendipity", "Oppression", "Depth",
    "Principles", "Values", "Shock", "Stillness",
    "Beginnings", "Ambition", "Moods", "Stimulation",
    "Intuition", "Vitality", "Strategy", "Limitation",
    "Thinking", "Detail", "Doubts", "Confusion",
];

/// Incarnation cross with its four defining gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncarnationCross {
    pub angle: CrossAngle,
    /// Cross name; `None` only when the Sun gate is outside 1-64.
    pub name: Option<String>,
    /// Personality Sun, personality Earth, design Sun, design Earth.
    pub gates: [u8; 4],
    /// Full label, e.g. `Right Angle Cross of Tension (38/39 | 48/21)`.
    pub label: String,
}

impl IncarnationCross {
    pub fn new(profile: (u8, u8), gates: [u8; 4]) -> Self {
        let angle = CrossAngle::from_profile(profile.0, profile.1);
        let name = cross_name(angle, gates[0]).map(str::to_string);
        let head = match &name {
            Some(n) => format!("{} Cross of {n}", angle.name()),
            None => format!("{} Cross", angle.name()),
        };
        let label = format!(
            "{head} ({}/{} | {}/{})",
            gates[0], gates[1], gates[2], gates[3]
        );
        Self {
            angle,
            name,
            gates,
            label,
        }
    }
}

/// Cross name for an angle and personality Sun gate.
pub fn cross_name(angle: CrossAngle, sun_gate: u8) -> Option<&'static str> {
    let index = wheel_index_of(sun_gate)? as usize;
    Some(match angle {
        CrossAngle::Right => RIGHT_ANGLE_NAMES[index % 16],
        CrossAngle::Left => LEFT_ANGLE_NAMES[index % 32],
        CrossAngle::Juxtaposition => JUXTAPOSITION_NAMES[sun_gate as usize - 1],
    })
}

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arrow {
    Left,
    Right,
}

impl Arrow {
    /// Tones 1-3 point left, 4-6 right.
    pub const fn from_tone(tone: u8) -> Self {
        if tone <= 3 { Self::Left } else { Self::Right }
    }
}

/// The four variable arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variables {
    /// Personality Sun.
    pub motivation: Arrow,
    /// Design Sun.
    pub determination: Arrow,
    /// Personality North Node.
    pub perspective: Arrow,
    /// Design North Node.
    pub environment: Arrow,
}

impl Variables {
    /// From the tones of personality Sun, design Sun, personality North
    /// Node and design North Node.
    pub const fn from_tones(tones: [u8; 4]) -> Self {
        Self {
            motivation: Arrow::from_tone(tones[0]),
            determination: Arrow::from_tone(tones[1]),
            perspective: Arrow::from_tone(tones[2]),
            environment: Arrow::from_tone(tones[3]),
        }
    }

    /// Arrows in the order personality Sun, design Sun, personality Node,
    /// design Node.
    pub const fn arrows(&self) -> [Arrow; 4] {
        [
            self.motivation,
            self.determination,
            self.perspective,
            self.environment,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_from_profile() {
        assert_eq!(CrossAngle::from_profile(1, 3), CrossAngle::Right);
        assert_eq!(CrossAngle::from_profile(4, 6), CrossAngle::Right);
        assert_eq!(CrossAngle::from_profile(4, 1), CrossAngle::Juxtaposition);
        assert_eq!(CrossAngle::from_profile(5, 1), CrossAngle::Left);
        assert_eq!(CrossAngle::from_profile(6, 3), CrossAngle::Left);
    }

    #[test]
    fn tension_cross_label() {
        let x = IncarnationCross::new((1, 4), [38, 39, 48, 21]);
        assert_eq!(x.label, "Right Angle Cross of Tension (38/39 | 48/21)");
        assert_eq!(x.name.as_deref(), Some("Tension"));
    }

    #[test]
    fn four_ways_quarter_group() {
        for sun in [24, 33, 19, 44] {
            let x = IncarnationCross::new((2, 4), [sun, 0, 0, 0]);
            assert_eq!(x.name.as_deref(), Some("the Four Ways"), "sun gate {sun}");
        }
    }

    #[test]
    fn left_angle_names() {
        let x = IncarnationCross::new((5, 1), [38, 39, 48, 21]);
        assert_eq!(x.label, "Left Angle Cross of Individualism (38/39 | 48/21)");
        // Opposite Sun gates share the cross.
        assert_eq!(cross_name(CrossAngle::Left, 2), Some("Defiance"));
        assert_eq!(cross_name(CrossAngle::Left, 1), Some("Defiance"));
        assert_eq!(cross_name(CrossAngle::Left, 41), Some("Alpha"));
        assert_eq!(cross_name(CrossAngle::Left, 31), Some("Alpha"));
    }

    #[test]
    fn juxtaposition_names() {
        let x = IncarnationCross::new((4, 1), [11, 12, 46, 25]);
        assert_eq!(x.label, "Juxtaposition Cross of Ideas (11/12 | 46/25)");
        assert_eq!(cross_name(CrossAngle::Juxtaposition, 1), Some("Self-Expression"));
        assert_eq!(cross_name(CrossAngle::Juxtaposition, 64), Some("Confusion"));
    }

    #[test]
    fn every_gate_named_for_every_angle() {
        for angle in [CrossAngle::Right, CrossAngle::Left, CrossAngle::Juxtaposition] {
            for gate in 1..=64u8 {
                assert!(cross_name(angle, gate).is_some(), "{angle:?} {gate}");
            }
            assert_eq!(cross_name(angle, 0), None);
            assert_eq!(cross_name(angle, 65), None);
        }
        let x = IncarnationCross::new((6, 2), [0, 0, 0, 0]);
        assert_eq!(x.label, "Left Angle Cross (0/0 | 0/0)");
    }

    #[test]
    fn arrows_from_tones() {
        let v = Variables::from_tones([1, 6, 3, 4]);
        assert_eq!(v.arrows(), [Arrow::Left, Arrow::Right, Arrow::Left, Arrow::Right]);
    }
}
