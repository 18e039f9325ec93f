//! Longitude → gate, line, color, tone, base on the 64-gate wheel.
//!
//! The wheel starts with gate 41 at 302° tropical longitude (2° Aquarius)
//! and runs in a fixed non-sequential order. Each gate spans 5.625°, each
//! line 0.9375°. Lines subdivide into 6 colors, colors into 6 tones and
//! tones into 5 bases.

/// Tropical longitude where the wheel (gate 41, line 1) begins.
pub const WHEEL_START_DEG: f64 = 302.0;

/// Span of one gate: 360/64 degrees.
pub const GATE_SPAN: f64 = 360.0 / 64.0;

/// Span of one line: gate/6.
pub const LINE_SPAN: f64 = GATE_SPAN / 6.0;

/// Span of one color: line/6.
pub const COLOR_SPAN: f64 = LINE_SPAN / 6.0;

/// Span of one tone: color/6.
pub const TONE_SPAN: f64 = COLOR_SPAN / 6.0;

/// Span of one base: tone/5.
pub const BASE_SPAN: f64 = TONE_SPAN / 5.0;

/// Gate numbers in wheel order from [`WHEEL_START_DEG`].
#[rustfmt::skip]
pub const GATE_WHEEL: [u8; 64] = [
    41, 19, 13, 49, 30, 55, 37, 63, 22, 36, 25, 17, 21, 51, 42,  3,
    27, 24,  2, 23,  8, 20, 16, 35, 45, 12, 15, 52, 39, 53, 62, 56,
    31, 33,  7,  4, 29, 59, 40, 64, 47,  6, 46, 18, 48, 57, 32, 50,
    28, 44,  1, 43, 14, 34,  9,  5, 26, 11, 10, 58, 38, 54, 61, 60,
];

/// Full subdivision of a longitude on the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GatePosition {
    /// Gate number, 1-64.
    pub gate: u8,
    /// Line, 1-6.
    pub line: u8,
    /// Color, 1-6.
    pub color: u8,
    /// Tone, 1-6.
    pub tone: u8,
    /// Base, 1-5.
    pub base: u8,
    /// 0-based position of the gate on the wheel.
    pub wheel_index: u8,
    /// Degrees into the gate [0, 5.625).
    pub degrees_in_gate: f64,
}

/// Normalize onto the wheel: degrees past [`WHEEL_START_DEG`], [0, 360).
fn wheel_offset(lon_deg: f64) -> f64 {
    let r = (lon_deg - WHEEL_START_DEG).rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Split `value` into a 0-based segment index (clamped to `count − 1`) and
/// the residual within that segment.
fn segment(value: f64, span: f64, count: u8) -> (u8, f64) {
    let idx = ((value / span).floor().max(0.0) as u8).min(count - 1);
    (idx, (value - idx as f64 * span).max(0.0))
}

/// Map a tropical longitude to its full wheel position.
pub fn gate_position(lon_deg: f64) -> GatePosition {
    let w = wheel_offset(lon_deg);
    let (wheel_index, r_gate) = segment(w, GATE_SPAN, 64);
    let (line_idx, r_line) = segment(r_gate, LINE_SPAN, 6);
    let (color_idx, r_color) = segment(r_line, COLOR_SPAN, 6);
    let (tone_idx, r_tone) = segment(r_color, TONE_SPAN, 6);
    let (base_idx, _) = segment(r_tone, BASE_SPAN, 5);

    GatePosition {
        gate: GATE_WHEEL[wheel_index as usize],
        line: line_idx + 1,
        color: color_idx + 1,
        tone: tone_idx + 1,
        base: base_idx + 1,
        wheel_index,
        degrees_in_gate: r_gate,
    }
}

/// Map a tropical longitude to `(gate, line)`.
pub fn gate_and_line(lon_deg: f64) -> (u8, u8) {
    let p = gate_position(lon_deg);
    (p.gate, p.line)
}

/// 0-based wheel position of a gate, or `None` outside 1-64.
pub fn wheel_index_of(gate: u8) -> Option<u8> {
    GATE_WHEEL.iter().position(|g| *g == gate).map(|i| i as u8)
}

/// The gate directly across the wheel (180° away), or `None` outside 1-64.
pub fn opposite_gate(gate: u8) -> Option<u8> {
    wheel_index_of(gate).map(|i| GATE_WHEEL[(i as usize + 32) % 64])
}
