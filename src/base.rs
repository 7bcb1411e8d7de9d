#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [BaseStation] is the reference point periodically revisited
/// during the survey. It is identified by its station name and
/// located by its latitude (geographic mode) and/or northing (projected mode).
/// Latitude correction needs the base latitude in both modes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BaseStation {
    name: String,
    latitude: Option<f64>,
    northing: Option<f64>,
}

impl BaseStation {
    /// Defines a new [BaseStation] by name, with unknown coordinates.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            latitude: None,
            northing: None,
        }
    }

    /// Copies and returns [BaseStation] with latitude in decimal degrees
    pub fn with_latitude(&self, latitude_deg: f64) -> Self {
        let mut s = self.clone();
        s.latitude = Some(latitude_deg);
        s
    }

    /// Copies and returns [BaseStation] with projected northing in meters
    pub fn with_northing(&self, northing_m: f64) -> Self {
        let mut s = self.clone();
        s.northing = Some(northing_m);
        s
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in decimal degrees
    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    /// Northing in meters
    pub fn northing(&self) -> Option<f64> {
        self.northing
    }
}
