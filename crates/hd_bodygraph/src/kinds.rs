//! Type, authority and definition classifications.

use serde::{Deserialize, Serialize};

/// Energy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HdType {
    Generator,
    #[serde(rename = "Manifesting Generator")]
    ManifestingGenerator,
    Projector,
    Manifestor,
    Reflector,
}

impl HdType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generator => "Generator",
            Self::ManifestingGenerator => "Manifesting Generator",
            Self::Projector => "Projector",
            Self::Manifestor => "Manifestor",
            Self::Reflector => "Reflector",
        }
    }

    pub const fn strategy(self) -> &'static str {
        match self {
            Self::Generator | Self::ManifestingGenerator => "To Respond",
            Self::Projector => "Wait for the Invitation",
            Self::Manifestor => "To Inform",
            Self::Reflector => "Wait a Lunar Cycle",
        }
    }

    pub const fn signature(self) -> &'static str {
        match self {
            Self::Generator | Self::ManifestingGenerator => "Satisfaction",
            Self::Projector => "Success",
            Self::Manifestor => "Peace",
            Self::Reflector => "Surprise",
        }
    }

    pub const fn not_self_theme(self) -> &'static str {
        match self {
            Self::Generator | Self::ManifestingGenerator => "Frustration",
            Self::Projector => "Bitterness",
            Self::Manifestor => "Anger",
            Self::Reflector => "Disappointment",
        }
    }
}

/// Inner authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    Ego,
    #[serde(rename = "Self-Projected")]
    SelfProjected,
    #[serde(rename = "Environmental (Mental)")]
    Environmental,
    Lunar,
    None,
}

impl Authority {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emotional => "Emotional",
            Self::Sacral => "Sacral",
            Self::Splenic => "Splenic",
            Self::Ego => "Ego",
            Self::SelfProjected => "Self-Projected",
            Self::Environmental => "Environmental (Mental)",
            Self::Lunar => "Lunar",
            Self::None => "None",
        }
    }
}

/// How many separate groups the defined centers form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Definition {
    None,
    Single,
    Split,
    #[serde(rename = "Triple Split")]
    TripleSplit,
    #[serde(rename = "Quadruple Split")]
    QuadrupleSplit,
}

impl Definition {
    /// Classification for a number of connected components.
    ///
    /// Nine centers with at least two per component cap the count at four.
    pub const fn from_components(count: usize) -> Self {
        match count {
            0 => Self::None,
            1 => Self::Single,
            2 => Self::Split,
            3 => Self::TripleSplit,
            _ => Self::QuadrupleSplit,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Single => "Single",
            Self::Split => "Split",
            Self::TripleSplit => "Triple Split",
            Self::QuadrupleSplit => "Quadruple Split",
        }
    }
}

macro_rules! display_by_name {
    ($($t:ty),*) => {$(
        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    )*};
}

display_by_name!(HdType, Authority, Definition);
