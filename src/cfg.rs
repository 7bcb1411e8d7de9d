use crate::constants::CRUSTAL_DENSITY_G_CM3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Drift values reference
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DriftReference {
    /// Drift is expressed relative to the base station visit
    /// opening each segment. Every opening visit has zero drift.
    #[default]
    Segment,
    /// Drift accumulates across segments and is expressed relative to the
    /// very first base station visit. All base station readings then reduce
    /// to the first one.
    Survey,
}

/// Behavior for readings taken before the first base station visit,
/// or after the last one.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutsideSegment {
    /// Abort with [Error::OutsideDriftSegment](crate::prelude::Error::OutsideDriftSegment)
    #[default]
    Reject,
    /// Extrapolate the drift rate of the first (or last) segment
    Extrapolate,
}

/// Drift correction options
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriftOpts {
    #[cfg_attr(feature = "serde", serde(default))]
    pub reference: DriftReference,
    #[cfg_attr(feature = "serde", serde(default))]
    pub outside: OutsideSegment,
}

fn default_density() -> f64 {
    CRUSTAL_DENSITY_G_CM3
}

/// Survey reduction [Config]uration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Bouguer reduction density (g/cm³)
    #[cfg_attr(feature = "serde", serde(default = "default_density"))]
    pub density: f64,
    /// Drift correction options
    #[cfg_attr(feature = "serde", serde(default))]
    pub drift: DriftOpts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            density: default_density(),
            drift: DriftOpts::default(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with desired Bouguer density (g/cm³)
    pub fn with_density(&self, density: f64) -> Self {
        let mut s = *self;
        s.density = density;
        s
    }

    /// Copies and returns [Config] with desired [DriftReference]
    pub fn with_drift_reference(&self, reference: DriftReference) -> Self {
        let mut s = *self;
        s.drift.reference = reference;
        s
    }

    /// Copies and returns [Config] with desired [OutsideSegment] policy
    pub fn with_outside_segment(&self, outside: OutsideSegment) -> Self {
        let mut s = *self;
        s.drift.outside = outside;
        s
    }
}
