//! The pure calculation pipeline.
//!
//! BirthData → UTC instant → personality longitudes → design instant →
//! design longitudes → activation sets → resolved profile.

use std::sync::Arc;

use hd_bodygraph::{ActivationSet, HdProfile, Source, resolve};
use hd_ephem::{
    AnalyticEphemeris, DesignConfig, DesignInstant, Ephemeris, LongitudeSet, find_design_instant,
};
use hd_time::{UtcTime, civil_to_utc};
use tracing::debug;

use crate::birth::BirthData;
use crate::error::CalcError;

/// Stateless pipeline over an ephemeris.
#[derive(Clone)]
pub struct Calculator {
    ephem: Arc<dyn Ephemeris>,
    design: DesignConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            ephem: Arc::new(AnalyticEphemeris::new()),
            design: DesignConfig::default(),
        }
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("design", &self.design)
            .finish_non_exhaustive()
    }
}

impl Calculator {
    pub fn new(ephem: Arc<dyn Ephemeris>, design: DesignConfig) -> Result<Self, CalcError> {
        design.validate().map_err(CalcError::InvalidConfig)?;
        Ok(Self { ephem, design })
    }

    pub fn design_config(&self) -> &DesignConfig {
        &self.design
    }

    /// Birth instant in UTC. Unresolvable date/time/timezone is `InvalidInput`.
    pub fn personality_instant(&self, birth: &BirthData) -> Result<UtcTime, CalcError> {
        Ok(civil_to_utc(
            &birth.date,
            &birth.time,
            &birth.location.timezone,
        )?)
    }

    /// The 13 longitudes at a UTC instant.
    pub fn longitudes(&self, at: &UtcTime) -> Result<LongitudeSet, CalcError> {
        Ok(self.ephem.longitudes_at(at.to_jd_ut())?)
    }

    /// Design instant for a birth instant.
    pub fn design_instant(&self, personality: &UtcTime) -> Result<DesignInstant, CalcError> {
        Ok(find_design_instant(
            self.ephem.as_ref(),
            personality.to_jd_ut(),
            &self.design,
        )?)
    }

    /// Personality and design activation sets.
    pub fn activations(
        &self,
        birth: &BirthData,
    ) -> Result<(ActivationSet, ActivationSet), CalcError> {
        let p_utc = self.personality_instant(birth)?;
        let p_lons = self.longitudes(&p_utc)?;
        let design = self.design_instant(&p_utc)?;
        let d_lons = self.ephem.longitudes_at(design.jd_ut)?;

        debug!(
            personality = %p_utc,
            design = %design.utc,
            iterations = design.iterations,
            "design instant located"
        );

        Ok((
            ActivationSet::from_longitudes(&p_lons, Source::Personality, p_utc),
            ActivationSet::from_longitudes(&d_lons, Source::Design, design.utc),
        ))
    }

    /// Run the whole pipeline.
    pub fn compute(&self, birth: &BirthData) -> Result<HdProfile, CalcError> {
        let (personality, design) = self.activations(birth)?;
        Ok(resolve(&personality, &design))
    }
}
