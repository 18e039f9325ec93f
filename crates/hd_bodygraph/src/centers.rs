//! The nine centers and the gates each one owns.

use serde::{Deserialize, Serialize};

/// A bodygraph center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    Heart,
    Spleen,
    #[serde(rename = "Solar Plexus")]
    SolarPlexus,
    Sacral,
    Root,
}

/// All nine centers, top to bottom.
pub const ALL_CENTERS: [Center; 9] = [
    Center::Head,
    Center::Ajna,
    Center::Throat,
    Center::G,
    Center::Heart,
    Center::Spleen,
    Center::SolarPlexus,
    Center::Sacral,
    Center::Root,
];

/// Centers that are energy sources.
pub const MOTORS: [Center; 4] = [Center::Sacral, Center::Heart, Center::SolarPlexus, Center::Root];

impl Center {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Ajna => "Ajna",
            Self::Throat => "Throat",
            Self::G => "G",
            Self::Heart => "Heart",
            Self::Spleen => "Spleen",
            Self::SolarPlexus => "Solar Plexus",
            Self::Sacral => "Sacral",
            Self::Root => "Root",
        }
    }

    /// 0-based index in [`ALL_CENTERS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_motor(self) -> bool {
        matches!(
            self,
            Self::Sacral | Self::Heart | Self::SolarPlexus | Self::Root
        )
    }

    /// Gates owned by this center.
    pub const fn gates(self) -> &'static [u8] {
        match self {
            Self::Head => &[64, 61, 63],
            Self::Ajna => &[47, 24, 4, 17, 43, 11],
            Self::Throat => &[62, 23, 56, 35, 12, 45, 33, 8, 31, 20, 16],
            Self::G => &[1, 13, 25, 46, 2, 15, 10, 7],
            Self::Heart => &[21, 40, 26, 51],
            Self::Spleen => &[48, 57, 44, 50, 32, 28, 18],
            Self::SolarPlexus => &[6, 37, 22, 36, 30, 55, 49],
            Self::Sacral => &[5, 14, 29, 59, 9, 3, 42, 27, 34],
            Self::Root => &[58, 38, 54, 53, 60, 52, 19, 39, 41],
        }
    }

    /// The center that owns `gate`, or `None` outside 1-64.
    pub fn of_gate(gate: u8) -> Option<Center> {
        ALL_CENTERS.into_iter().find(|c| c.gates().contains(&gate))
    }
}

impl std::fmt::Display for Center {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
