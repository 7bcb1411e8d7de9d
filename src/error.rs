use thiserror::Error;

use crate::binding::Role;

/// Classification of every [Error], so applications may decide
/// how to present or recover from them without matching each variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field or reference was never bound.
    /// Bind it and retry.
    Precondition,
    /// A bound column does not exist or holds unusable content.
    Configuration,
    /// Undefined numerical operation.
    Arithmetic,
    /// A row does not belong to any drift segment.
    Boundary,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Correction requested prior binding this [Role] to a column.
    #[error("{0} field is not bound")]
    UnboundField(Role),

    /// Base station reference was never defined.
    #[error("base station is not defined")]
    UndefinedBaseStation,

    /// Latitude correction requires the base station latitude,
    /// whatever the coordinates mode.
    #[error("base station latitude is not defined")]
    UndefinedBaseLatitude,

    /// Projected latitude correction requires the base station northing.
    #[error("base station northing is not defined")]
    UndefinedBaseNorthing,

    /// Latitude correction requires either geographic or projected
    /// station coordinates.
    #[error("neither latitude nor northing coordinates are bound")]
    UnboundCoordinates,

    /// Drift correction requires the base station to be visited
    /// at least twice.
    #[error("base station \"{name}\" visited {visits} time(s), at least 2 needed")]
    NotEnoughBaseVisits { name: String, visits: usize },

    /// Station aggregation requires the station field to be bound first.
    #[error("station field must be bound before grouping")]
    UnboundGroupingKey,

    #[error("unknown column \"{0}\"")]
    UnknownColumn(String),

    #[error("duplicate column \"{0}\"")]
    DuplicateColumn(String),

    /// All [Column](crate::prelude::Column)s of a [Table](crate::prelude::Table)
    /// have the same length.
    #[error("column \"{name}\" has {len} rows, table has {expected}")]
    ColumnLength {
        name: String,
        len: usize,
        expected: usize,
    },

    /// Bound column content does not fit the [Role].
    #[error("column \"{column}\" cannot be used as {role}")]
    ColumnType { column: String, role: Role },

    /// Time (or date) value we could not interprete.
    #[error("invalid time \"{value}\" at row {row}")]
    InvalidTime { row: usize, value: String },

    #[error("unsupported file format \"{0}\"")]
    UnsupportedFormat(String),

    #[error("i/o error: {0}")]
    Io(String),

    #[error("csv error: {0}")]
    Csv(String),

    /// Two consecutive base station visits share the same time,
    /// or one of them has non finite time or reading: the drift rate is undefined.
    #[error("drift segment (rows {opening}..{closing}) has zero or undefined span")]
    DegenerateDriftSegment { opening: usize, closing: usize },

    /// Row is not surrounded by two base station visits.
    #[error("row {row} (station \"{station}\") lies outside any drift segment")]
    OutsideDriftSegment { row: usize, station: String },

    /// Sequences that should be aligned row by row are not.
    #[error("sequence length mismatch: {0} versus {1}")]
    LengthMismatch(usize, usize),
}

impl Error {
    /// Returns the [ErrorKind] of this [Error].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnboundField(_)
            | Self::UndefinedBaseStation
            | Self::UndefinedBaseLatitude
            | Self::UndefinedBaseNorthing
            | Self::UnboundCoordinates
            | Self::NotEnoughBaseVisits { .. } => ErrorKind::Precondition,
            Self::UnboundGroupingKey
            | Self::UnknownColumn(_)
            | Self::DuplicateColumn(_)
            | Self::ColumnLength { .. }
            | Self::ColumnType { .. }
            | Self::InvalidTime { .. }
            | Self::UnsupportedFormat(_)
            | Self::Io(_)
            | Self::Csv(_) => ErrorKind::Configuration,
            Self::DegenerateDriftSegment { .. } | Self::LengthMismatch(_, _) => {
                ErrorKind::Arithmetic
            },
            Self::OutsideDriftSegment { .. } => ErrorKind::Boundary,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};
    use crate::binding::Role;

    #[test]
    fn error_kinds() {
        assert_eq!(
            Error::UnboundField(Role::Gravity).kind(),
            ErrorKind::Precondition
        );
        assert_eq!(Error::UnboundGroupingKey.kind(), ErrorKind::Configuration);
        assert_eq!(
            Error::DegenerateDriftSegment {
                opening: 0,
                closing: 2
            }
            .kind(),
            ErrorKind::Arithmetic
        );
        assert_eq!(
            Error::OutsideDriftSegment {
                row: 4,
                station: "S4".to_string(),
            }
            .kind(),
            ErrorKind::Boundary
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(
            Error::UnboundField(Role::Elevation).to_string(),
            "elevation field is not bound"
        );
        assert_eq!(
            Error::NotEnoughBaseVisits {
                name: "Base".to_string(),
                visits: 1
            }
            .to_string(),
            "base station \"Base\" visited 1 time(s), at least 2 needed"
        );
    }
}
