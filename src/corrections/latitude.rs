//! Latitude correction.
//!
//! The normal gravity gradient is 0.811·sin(2φ₀) mGal per kilometer of
//! north-south offset from the base station (φ₀ being the base latitude).
//! All offsets handled here are therefore expressed in kilometers.
use crate::constants::{EARTH_MEAN_RADIUS_KM, LATITUDE_GRADIENT_MGAL_KM, METERS_PER_DEGREE};

/// Latitude correction (mGal) for each north-south offset from the base
/// station, in kilometers (positive northward).
pub fn latitude_correction(base_latitude_deg: f64, offsets_km: &[f64]) -> Vec<f64> {
    let gradient = LATITUDE_GRADIENT_MGAL_KM * (2.0 * base_latitude_deg.to_radians()).sin();
    offsets_km.iter().map(|dy| gradient * dy).collect()
}

/// North-south offsets (km) from projected northings (m).
pub fn northing_offsets_km(northings_m: &[f64], base_northing_m: f64) -> Vec<f64> {
    northings_m
        .iter()
        .map(|n| (n - base_northing_m) / 1000.0)
        .collect()
}

/// North-south offsets (km) along the meridian, from geographic
/// latitudes (decimal degrees).
pub fn great_circle_offsets_km(latitudes_deg: &[f64], base_latitude_deg: f64) -> Vec<f64> {
    latitudes_deg
        .iter()
        .map(|lat| EARTH_MEAN_RADIUS_KM * (lat - base_latitude_deg).to_radians())
        .collect()
}

/// Approximate station latitude (decimal degrees) from its
/// north-south offset to the base station, in meters.
pub fn latitude_from_offset(base_latitude_deg: f64, offset_m: f64) -> f64 {
    base_latitude_deg + offset_m / METERS_PER_DEGREE
}
