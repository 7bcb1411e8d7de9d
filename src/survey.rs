use log::{debug, warn};

use crate::{
    aggregate::group_by,
    binding::{Bindings, Role, TimeFormat},
    corrections::{
        air_correction, bouguer_correction, drift_correction, great_circle_offsets_km,
        latitude_correction, latitude_from_offset, normal_gravity_sequence, northing_offsets_km,
        relative_gravity,
    },
    prelude::{BaseStation, Config, Error, Table},
    time::{date_hours, time_hours},
};

/// Station [Coordinates] columns. Geographic and projected
/// modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinates<'a> {
    /// Latitude column (decimal degrees)
    Geographic { latitude: &'a str },
    /// Easting and northing columns (meters)
    Projected { easting: &'a str, northing: &'a str },
}

/// [Survey] gathers the [Table] of gravimeter readings,
/// the [Role] each column plays, the [BaseStation] reference and
/// the reduction [Config]. Corrections never modify the table:
/// they are returned as sequences aligned with the table rows, to be
/// summed by the caller.
/// ```
/// use gravity_survey::prelude::{BaseStation, Coordinates, Survey, Table, TimeFormat};
///
/// let table = Table::new()
///     .with_column("Station", vec!["Base", "S1", "Base"]).unwrap()
///     .with_column("Time", vec![0.0, 5.0, 10.0]).unwrap()
///     .with_column("Obs_grav", vec![100.0, 98.0, 105.0]).unwrap()
///     .with_column("Elev", vec![0.0, 50.0, 0.0]).unwrap()
///     .with_column("Lat", vec![45.0, 45.01, 45.0]).unwrap();
///
/// let mut survey = Survey::new(table);
/// survey.set_stations("Station").unwrap();
/// survey.set_time("Time", TimeFormat::DecimalHours).unwrap();
/// survey.set_gravity("Obs_grav").unwrap();
/// survey.set_elevation("Elev").unwrap();
/// survey.set_coordinates(Coordinates::Geographic { latitude: "Lat" }).unwrap();
/// survey.set_base_station(BaseStation::new("Base").with_latitude(45.0));
///
/// assert_eq!(survey.relative_gravity().unwrap(), vec![0.0, -2.0, 5.0]);
/// assert_eq!(survey.drift_correction().unwrap()[1], 2.5);
/// ```
#[derive(Debug, Clone)]
pub struct Survey {
    table: Table,
    bindings: Bindings,
    base: Option<BaseStation>,
    cfg: Config,
}

impl Survey {
    /// Creates a new [Survey] from loaded [Table], with default [Config].
    pub fn new(table: Table) -> Self {
        Self::with_config(table, Config::default())
    }

    /// Creates a new [Survey] from loaded [Table] and desired [Config].
    pub fn with_config(table: Table, cfg: Config) -> Self {
        Self {
            table,
            cfg,
            base: None,
            bindings: Bindings::default(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn base_station(&self) -> Option<&BaseStation> {
        self.base.as_ref()
    }

    fn bind(&mut self, role: Role, name: &str) -> Result<(), Error> {
        self.bindings.bind(&self.table, role, name)?;
        debug!("{} bound to \"{}\"", role, name);
        Ok(())
    }

    /// Binds raw gravimeter readings to column `name`
    pub fn set_gravity(&mut self, name: &str) -> Result<(), Error> {
        self.bind(Role::Gravity, name)
    }

    /// Binds time of day to column `name`, expressed in given [TimeFormat].
    pub fn set_time(&mut self, name: &str, format: TimeFormat) -> Result<(), Error> {
        self.bind(Role::Time, name)?;
        self.bindings.time_format = format;
        Ok(())
    }

    /// Binds measurement dates (including time of day) to column `name`.
    /// Dates take precedence over [Role::Time] in the drift correction.
    pub fn set_date(&mut self, name: &str) -> Result<(), Error> {
        self.bind(Role::Date, name)
    }

    /// Binds station identifiers to column `name`
    pub fn set_stations(&mut self, name: &str) -> Result<(), Error> {
        self.bind(Role::Station, name)
    }

    /// Binds station heights (m) to column `name`
    pub fn set_elevation(&mut self, name: &str) -> Result<(), Error> {
        self.bind(Role::Elevation, name)
    }

    /// Binds station [Coordinates]. Releases the previous coordinates mode.
    pub fn set_coordinates(&mut self, coordinates: Coordinates) -> Result<(), Error> {
        let mut bindings = self.bindings.clone();
        match coordinates {
            Coordinates::Geographic { latitude } => {
                bindings.bind(&self.table, Role::Latitude, latitude)?;
                bindings.unbind(Role::Easting);
                bindings.unbind(Role::Northing);
            },
            Coordinates::Projected { easting, northing } => {
                bindings.bind(&self.table, Role::Easting, easting)?;
                bindings.bind(&self.table, Role::Northing, northing)?;
                bindings.unbind(Role::Latitude);
            },
        }
        debug!("coordinates: {:?}", coordinates);
        self.bindings = bindings;
        Ok(())
    }

    /// Defines the [BaseStation] reference.
    pub fn set_base_station(&mut self, base: BaseStation) {
        debug!("base station: {:?}", base);
        self.base = Some(base);
    }

    /// Collapses repeated visits: the table is replaced by one row per station,
    /// in first-occurrence order, with averaged numerical columns.
    /// Text columns other than the station column are dropped, and roles they
    /// were bound to are released. Drift correction requires the chronological
    /// visits: compute it prior grouping.
    pub fn group_stations(&mut self) -> Result<(), Error> {
        let key = self
            .bindings
            .index(Role::Station)
            .map_err(|_| Error::UnboundGroupingKey)?;

        let grouped = group_by(&self.table, key)?;

        let mut bindings = Bindings::default();
        bindings.time_format = self.bindings.time_format;

        for (role, index) in self.bindings.bound() {
            let name = self
                .table
                .column(index)
                .map(|c| c.name())
                .ok_or(Error::UnboundField(role))?;

            if grouped.index(name).is_some() {
                bindings.bind(&grouped, role, name)?;
            } else {
                warn!("{} released: column \"{}\" was dropped", role, name);
            }
        }

        self.table = grouped;
        self.bindings = bindings;
        Ok(())
    }

    /// Numerical column bound to `role`
    fn floats(&self, role: Role) -> Result<&[f64], Error> {
        let index = self.bindings.index(role)?;
        let column = self.table.column(index).ok_or(Error::UnboundField(role))?;
        column.data().as_floats().ok_or(Error::ColumnType {
            column: column.name().to_string(),
            role,
        })
    }

    fn base(&self) -> Result<&BaseStation, Error> {
        self.base.as_ref().ok_or(Error::UndefinedBaseStation)
    }

    /// Station identifiers
    pub fn stations(&self) -> Result<Vec<String>, Error> {
        let index = self.bindings.index(Role::Station)?;
        let column = self
            .table
            .column(index)
            .ok_or(Error::UnboundField(Role::Station))?;
        Ok((0..column.len()).map(|row| column.data().cell(row)).collect())
    }

    /// Raw gravimeter readings
    pub fn gravity(&self) -> Result<&[f64], Error> {
        self.floats(Role::Gravity)
    }

    /// Station latitudes (decimal degrees)
    pub fn latitudes(&self) -> Result<&[f64], Error> {
        self.floats(Role::Latitude)
    }

    /// Station eastings (m)
    pub fn eastings(&self) -> Result<&[f64], Error> {
        self.floats(Role::Easting)
    }

    /// Station northings (m)
    pub fn northings(&self) -> Result<&[f64], Error> {
        self.floats(Role::Northing)
    }

    /// Station heights (m)
    pub fn elevations(&self) -> Result<&[f64], Error> {
        self.floats(Role::Elevation)
    }

    /// Measurement times, in hours. [Role::Date] is preferred
    /// over [Role::Time] when both are bound.
    pub fn hours(&self) -> Result<Vec<f64>, Error> {
        if let Ok(index) = self.bindings.index(Role::Date) {
            let column = self
                .table
                .column(index)
                .ok_or(Error::UnboundField(Role::Date))?;
            return date_hours(column);
        }

        let index = self.bindings.index(Role::Time)?;
        let column = self
            .table
            .column(index)
            .ok_or(Error::UnboundField(Role::Time))?;
        time_hours(column, self.bindings.time_format)
    }

    /// Approximate station latitudes (decimal degrees), from projected
    /// northings and the [BaseStation] latitude and northing.
    pub fn estimated_latitudes(&self) -> Result<Vec<f64>, Error> {
        let base = self.base()?;
        let base_lat = base.latitude().ok_or(Error::UndefinedBaseLatitude)?;
        let base_northing = base.northing().ok_or(Error::UndefinedBaseNorthing)?;
        Ok(self
            .northings()?
            .iter()
            .map(|n| latitude_from_offset(base_lat, n - base_northing))
            .collect())
    }

    /// Readings relative to the first row (in current row order).
    pub fn relative_gravity(&self) -> Result<Vec<f64>, Error> {
        Ok(relative_gravity(self.gravity()?))
    }

    /// GRS67 normal gravity (mGal) at each station latitude.
    pub fn normal_gravity(&self) -> Result<Vec<f64>, Error> {
        Ok(normal_gravity_sequence(self.latitudes()?))
    }

    /// Instrument drift of each reading, interpolated between consecutive
    /// [BaseStation] visits. Requires chronological (non grouped) readings.
    pub fn drift_correction(&self) -> Result<Vec<f64>, Error> {
        let gravity = self.gravity()?;
        let base = self.base()?;
        let stations = self.stations()?;
        let hours = self.hours()?;
        drift_correction(&stations, &hours, gravity, base.name(), &self.cfg.drift)
    }

    /// Latitude correction (mGal) of each station.
    /// North-south offsets to the base station may be provided in kilometers.
    /// Otherwise, they are derived from projected northings when bound,
    /// or from geographic latitudes.
    pub fn latitude_correction(&self, offsets_km: Option<&[f64]>) -> Result<Vec<f64>, Error> {
        let base = self.base()?;
        let base_lat = base.latitude().ok_or(Error::UndefinedBaseLatitude)?;

        let offsets_km = match offsets_km {
            Some(offsets) => {
                if offsets.len() != self.table.len() {
                    return Err(Error::LengthMismatch(self.table.len(), offsets.len()));
                }
                offsets.to_vec()
            },
            None => {
                if self.bindings.is_projected() {
                    let base_northing = base.northing().ok_or(Error::UndefinedBaseNorthing)?;
                    northing_offsets_km(self.northings()?, base_northing)
                } else if self.bindings.is_geographic() {
                    great_circle_offsets_km(self.latitudes()?, base_lat)
                } else {
                    return Err(Error::UnboundCoordinates);
                }
            },
        };

        Ok(latitude_correction(base_lat, &offsets_km))
    }

    /// Free-air correction (mGal) of each station
    pub fn air_correction(&self) -> Result<Vec<f64>, Error> {
        Ok(air_correction(self.elevations()?))
    }

    /// Bouguer slab correction (mGal) of each station, using the [Config] density
    pub fn bouguer_correction(&self) -> Result<Vec<f64>, Error> {
        self.bouguer_correction_density(self.cfg.density)
    }

    /// Bouguer slab correction (mGal) of each station, for given density (g/cm³)
    pub fn bouguer_correction_density(&self, density: f64) -> Result<Vec<f64>, Error> {
        Ok(bouguer_correction(density, self.elevations()?))
    }
}
