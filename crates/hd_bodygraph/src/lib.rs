//! Bodygraph resolution.
//!
//! Maps ecliptic longitudes onto the 64-gate wheel and resolves the two
//! activation sets (personality and design) into a profile: channels,
//! defined centers, definition, type, authority, profile lines,
//! incarnation cross and variables.

pub mod activation;
pub mod analysis;
pub mod centers;
pub mod channels;
pub mod cross;
pub mod gates;
pub mod kinds;
pub mod profile;

pub use activation::{ActivationSet, GateActivation, Source};
pub use analysis::Bodygraph;
pub use centers::{ALL_CENTERS, Center, MOTORS};
pub use channels::{ActiveChannel, CHANNELS, Channel};
pub use cross::{
    Arrow, CrossAngle, IncarnationCross, JUXTAPOSITION_NAMES, LEFT_ANGLE_NAMES, RIGHT_ANGLE_NAMES,
    Variables, cross_name,
};
pub use gates::{
    BASE_SPAN, COLOR_SPAN, GATE_SPAN, GATE_WHEEL, GatePosition, LINE_SPAN, TONE_SPAN,
    WHEEL_START_DEG, gate_and_line, gate_position, opposite_gate, wheel_index_of,
};
pub use kinds::{Authority, Definition, HdType};
pub use profile::{CenterState, HdProfile, LINE_NAMES, ProfileLines, resolve};
