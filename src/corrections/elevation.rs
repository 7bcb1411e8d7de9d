use crate::constants::{BOUGUER_SLAB_FACTOR, FREE_AIR_GRADIENT_MGAL_M};

/// Free-air correction (mGal) for each elevation (m).
pub fn air_correction(elevations_m: &[f64]) -> Vec<f64> {
    elevations_m
        .iter()
        .map(|h| FREE_AIR_GRADIENT_MGAL_M * h)
        .collect()
}

/// Bouguer slab correction (mGal) for each elevation (m),
/// for given slab density (g/cm³).
pub fn bouguer_correction(density: f64, elevations_m: &[f64]) -> Vec<f64> {
    elevations_m
        .iter()
        .map(|h| BOUGUER_SLAB_FACTOR * density * h)
        .collect()
}
