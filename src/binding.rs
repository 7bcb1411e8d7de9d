use crate::prelude::{Error, Table};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Semantic [Role] a [Table] column may be bound to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    /// Station identifier
    Station,
    /// Time of day
    Time,
    /// Date, including time of day
    Date,
    /// Raw gravimeter reading
    Gravity,
    /// Geographic latitude (degrees)
    Latitude,
    /// Projected easting (meters)
    Easting,
    /// Projected northing (meters)
    Northing,
    /// Station height (meters)
    Elevation,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Station => write!(f, "station"),
            Self::Time => write!(f, "time"),
            Self::Date => write!(f, "date"),
            Self::Gravity => write!(f, "gravity"),
            Self::Latitude => write!(f, "latitude"),
            Self::Easting => write!(f, "easting"),
            Self::Northing => write!(f, "northing"),
            Self::Elevation => write!(f, "elevation"),
        }
    }
}

/// How time of day is expressed in the [Role::Time] column.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeFormat {
    /// "HH:MM:SS" or "HH:MM" readable clock
    #[default]
    Clock,
    /// Decimal hours (HH.hh)
    DecimalHours,
}

/// Maps semantic [Role]s onto [Table] column indexes.
/// The table itself is never renamed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    station: Option<usize>,
    time: Option<usize>,
    date: Option<usize>,
    gravity: Option<usize>,
    latitude: Option<usize>,
    easting: Option<usize>,
    northing: Option<usize>,
    elevation: Option<usize>,
    /// [TimeFormat] of [Role::Time]
    pub time_format: TimeFormat,
}

impl Bindings {
    fn slot(&self, role: Role) -> &Option<usize> {
        match role {
            Role::Station => &self.station,
            Role::Time => &self.time,
            Role::Date => &self.date,
            Role::Gravity => &self.gravity,
            Role::Latitude => &self.latitude,
            Role::Easting => &self.easting,
            Role::Northing => &self.northing,
            Role::Elevation => &self.elevation,
        }
    }

    fn slot_mut(&mut self, role: Role) -> &mut Option<usize> {
        match role {
            Role::Station => &mut self.station,
            Role::Time => &mut self.time,
            Role::Date => &mut self.date,
            Role::Gravity => &mut self.gravity,
            Role::Latitude => &mut self.latitude,
            Role::Easting => &mut self.easting,
            Role::Northing => &mut self.northing,
            Role::Elevation => &mut self.elevation,
        }
    }

    /// Binds `role` to the column named `name` in `table`.
    pub fn bind(&mut self, table: &Table, role: Role, name: &str) -> Result<(), Error> {
        let index = table
            .index(name)
            .ok_or(Error::UnknownColumn(name.to_string()))?;
        *self.slot_mut(role) = Some(index);
        Ok(())
    }

    /// Releases `role`
    pub fn unbind(&mut self, role: Role) {
        *self.slot_mut(role) = None;
    }

    /// True if `role` is currently bound
    pub fn is_bound(&self, role: Role) -> bool {
        self.slot(role).is_some()
    }

    /// Column index of `role`
    pub fn index(&self, role: Role) -> Result<usize, Error> {
        self.slot(role).ok_or(Error::UnboundField(role))
    }

    /// All currently bound [Role]s and their column index
    pub fn bound(&self) -> Vec<(Role, usize)> {
        [
            Role::Station,
            Role::Time,
            Role::Date,
            Role::Gravity,
            Role::Latitude,
            Role::Easting,
            Role::Northing,
            Role::Elevation,
        ]
        .into_iter()
        .filter_map(|role| self.slot(role).map(|index| (role, index)))
        .collect()
    }

    /// True when projected coordinates are in use
    pub fn is_projected(&self) -> bool {
        self.is_bound(Role::Northing)
    }

    /// True when geographic coordinates are in use
    pub fn is_geographic(&self) -> bool {
        self.is_bound(Role::Latitude)
    }
}
