//! The resolved bodygraph profile.

use hd_ephem::Body;
use serde::{Deserialize, Serialize};

use crate::activation::{ActivationSet, GateActivation};
use crate::analysis::Bodygraph;
use crate::centers::{ALL_CENTERS, Center};
use crate::channels::ActiveChannel;
use crate::cross::{IncarnationCross, Variables};
use crate::kinds::{Authority, Definition, HdType};

/// Profile line names, indexed by line − 1.
pub const LINE_NAMES: [&str; 6] = [
    "Investigator",
    "Hermit",
    "Martyr",
    "Opportunist",
    "Heretic",
    "Role Model",
];

/// Conscious (personality Sun) and unconscious (design Sun) lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLines {
    pub conscious: u8,
    pub unconscious: u8,
    /// e.g. `1/4 Investigator/Opportunist`.
    pub label: String,
}

impl ProfileLines {
    pub fn new(conscious: u8, unconscious: u8) -> Self {
        let name = |line: u8| LINE_NAMES[(line.clamp(1, 6) - 1) as usize];
        Self {
            conscious,
            unconscious,
            label: format!(
                "{conscious}/{unconscious} {}/{}",
                name(conscious),
                name(unconscious)
            ),
        }
    }
}

impl std::fmt::Display for ProfileLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.conscious, self.unconscious)
    }
}

/// One center's state in a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterState {
    pub center: Center,
    pub defined: bool,
    /// Active gates the center owns, ascending.
    pub gates: Vec<u8>,
}

/// A complete, immutable bodygraph profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HdProfile {
    #[serde(rename = "type")]
    pub hd_type: HdType,
    pub strategy: String,
    pub signature: String,
    pub not_self_theme: String,
    pub authority: Authority,
    pub profile: ProfileLines,
    pub definition: Definition,
    /// All nine centers, top to bottom.
    pub centers: Vec<CenterState>,
    /// Active gates, ascending.
    pub gates: Vec<u8>,
    pub channels: Vec<ActiveChannel>,
    pub incarnation_cross: IncarnationCross,
    pub variables: Variables,
    /// Personality activations in body listing order.
    pub personality: Vec<GateActivation>,
    /// Design activations in body listing order.
    pub design: Vec<GateActivation>,
    /// Birth instant, ISO-8601 UTC.
    pub personality_utc: String,
    /// Design instant, ISO-8601 UTC.
    pub design_utc: String,
}

impl HdProfile {
    /// Names of the defined centers, top to bottom.
    pub fn defined_centers(&self) -> Vec<Center> {
        self.centers
            .iter()
            .filter(|c| c.defined)
            .map(|c| c.center)
            .collect()
    }
}

/// Resolve a profile from the personality and design activation sets.
pub fn resolve(personality: &ActivationSet, design: &ActivationSet) -> HdProfile {
    let bodygraph = Bodygraph::from_gates(personality.gates().chain(design.gates()));
    let hd_type = bodygraph.hd_type();

    let p_sun = personality.get(Body::Sun);
    let p_earth = personality.get(Body::Earth);
    let d_sun = design.get(Body::Sun);
    let d_earth = design.get(Body::Earth);

    let centers = ALL_CENTERS
        .into_iter()
        .map(|c| CenterState {
            center: c,
            defined: bodygraph.is_defined(c),
            gates: bodygraph.center_gates(c),
        })
        .collect();

    HdProfile {
        hd_type,
        strategy: hd_type.strategy().to_string(),
        signature: hd_type.signature().to_string(),
        not_self_theme: hd_type.not_self_theme().to_string(),
        authority: bodygraph.authority(),
        profile: ProfileLines::new(p_sun.line, d_sun.line),
        definition: bodygraph.definition(),
        centers,
        gates: bodygraph.gates().iter().copied().collect(),
        channels: bodygraph
            .channels()
            .iter()
            .map(|ch| ActiveChannel::from(*ch))
            .collect(),
        incarnation_cross: IncarnationCross::new(
            (p_sun.line, d_sun.line),
            [p_sun.gate, p_earth.gate, d_sun.gate, d_earth.gate],
        ),
        variables: Variables::from_tones([
            p_sun.tone,
            d_sun.tone,
            personality.get(Body::NorthNode).tone,
            design.get(Body::NorthNode).tone,
        ]),
        personality: personality.as_slice().to_vec(),
        design: design.as_slice().to_vec(),
        personality_utc: personality.instant().to_string(),
        design_utc: design.instant().to_string(),
    }
}
