//! The thirteen bodies of a bodygraph.

use serde::{Deserialize, Serialize};

/// A body whose longitude activates a gate.
///
/// Declaration order is the conventional bodygraph listing order and is the
/// index order of [`LongitudeSet`](crate::LongitudeSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Body {
    Sun,
    Earth,
    NorthNode,
    SouthNode,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All bodies in listing order.
pub const ALL_BODIES: [Body; 13] = [
    Body::Sun,
    Body::Earth,
    Body::NorthNode,
    Body::SouthNode,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Earth => "Earth",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based position in [`ALL_BODIES`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// All bodies in listing order.
    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_array_position() {
        for (i, b) in ALL_BODIES.iter().enumerate() {
            assert_eq!(b.index(), i, "{b}");
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Body::Sun.name(), "Sun");
        assert_eq!(Body::NorthNode.name(), "North Node");
        assert_eq!(Body::SouthNode.to_string(), "South Node");
    }
}
