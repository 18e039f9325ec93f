//! Analytic ephemeris for bodygraph calculations.
//!
//! Provides apparent geocentric ecliptic longitudes (equinox of date) for the
//! thirteen bodies a bodygraph uses, and the search for the design instant
//! (88° of solar arc before birth).
//!
//! Every position is a closed-form series evaluation; no kernel files are
//! read. Accuracy is a few arc-minutes for the planets and better than 0.01°
//! for the Sun, which is what gate/line assignment needs.

pub mod body;
pub mod design;
pub mod error;
pub mod moon;
pub mod nodes;
pub mod planets;
pub mod provider;
pub mod sun;

pub use body::{ALL_BODIES, Body};
pub use design::{DesignConfig, DesignInstant, find_design_instant};
pub use error::EphemError;
pub use provider::{AnalyticEphemeris, Ephemeris, LongitudeSet};
