use crate::constants::{GRS67_EQUATORIAL_GRAVITY_MGAL, GRS67_SIN2_COEFF, GRS67_SIN_2PHI_COEFF};

/// GRS67 theoretical (sea level) gravity in mGal, at given latitude in decimal degrees.
pub fn normal_gravity(latitude_deg: f64) -> f64 {
    let phi = latitude_deg.to_radians();
    GRS67_EQUATORIAL_GRAVITY_MGAL
        * (1.0 + GRS67_SIN2_COEFF * phi.sin().powi(2) - GRS67_SIN_2PHI_COEFF * (2.0 * phi).sin())
}

/// [normal_gravity] for each latitude (decimal degrees).
pub fn normal_gravity_sequence(latitudes_deg: &[f64]) -> Vec<f64> {
    latitudes_deg.iter().map(|lat| normal_gravity(*lat)).collect()
}
