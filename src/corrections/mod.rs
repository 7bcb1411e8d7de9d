//! Gravity corrections. Each one is a pure function over
//! row-aligned sequences; corrections are combined by the caller.
mod drift;
mod elevation;
mod latitude;
mod normal;
mod relative;

pub use drift::{drift_correction, drift_segments, Segment};
pub use elevation::{air_correction, bouguer_correction};
pub use latitude::{
    great_circle_offsets_km, latitude_correction, latitude_from_offset, northing_offsets_km,
};
pub use normal::{normal_gravity, normal_gravity_sequence};
pub use relative::relative_gravity;
