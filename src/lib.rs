#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod aggregate;
mod averager;
mod base;
mod binding;
mod cfg;
mod corrections;
mod error;
mod survey;
mod table;
mod time;

#[cfg(feature = "csv")]
mod ingest;

#[cfg(test)]
mod tests;

// public modules
pub mod constants;

// prelude
pub mod prelude {
    pub use crate::aggregate::group_by;
    pub use crate::base::BaseStation;
    pub use crate::binding::{Bindings, Role, TimeFormat};
    pub use crate::cfg::{Config, DriftOpts, DriftReference, OutsideSegment};
    pub use crate::corrections::{
        air_correction, bouguer_correction, drift_correction, drift_segments,
        great_circle_offsets_km, latitude_correction, latitude_from_offset, normal_gravity,
        normal_gravity_sequence, northing_offsets_km, relative_gravity, Segment,
    };
    pub use crate::error::{Error, ErrorKind};
    pub use crate::survey::{Coordinates, Survey};
    pub use crate::table::{Column, ColumnData, Table};
    pub use crate::time::hms_to_hours;
    // re-export
    pub use hifitime::{Duration, Epoch};
}
