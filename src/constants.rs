/// GRS67 normal gravity at the equator (mGal)
pub const GRS67_EQUATORIAL_GRAVITY_MGAL: f64 = 978031.846;

/// GRS67 sin²(φ) coefficient
pub const GRS67_SIN2_COEFF: f64 = 0.0053024;

/// GRS67 sin(2φ) coefficient
pub const GRS67_SIN_2PHI_COEFF: f64 = 0.0000058;

/// North-south normal gravity gradient, scaled by sin(2φ) (mGal/km)
pub const LATITUDE_GRADIENT_MGAL_KM: f64 = 0.811;

/// Mean Earth radius used to convert latitude differences into distances (km)
pub const EARTH_MEAN_RADIUS_KM: f64 = 6367.44;

/// Free-air gradient (mGal/m)
pub const FREE_AIR_GRADIENT_MGAL_M: f64 = -0.3086;

/// Bouguer slab factor 2πG, in mGal/m per g/cm³
pub const BOUGUER_SLAB_FACTOR: f64 = 0.04192;

/// Mean crustal density (g/cm³)
pub const CRUSTAL_DENSITY_G_CM3: f64 = 2.67;

/// Approximate length of one degree of latitude (m)
pub const METERS_PER_DEGREE: f64 = 111.0E3;
