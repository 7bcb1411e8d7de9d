use crate::{
    binding::{Role, TimeFormat},
    prelude::{Column, ColumnData, Epoch, Error},
};

use std::str::FromStr;

/// Converts readable "HH:MM:SS" (or "HH:MM") clock into decimal hours.
/// Seconds may be fractional.
/// ```
/// use gravity_survey::prelude::hms_to_hours;
///
/// assert_eq!(hms_to_hours("10:30:00"), Some(10.5));
/// assert_eq!(hms_to_hours("07:15"), Some(7.25));
/// assert_eq!(hms_to_hours("7h15"), None);
/// ```
pub fn hms_to_hours(clock: &str) -> Option<f64> {
    let mut items = clock.trim().split(':');

    let hours = items.next()?.trim().parse::<u32>().ok()?;
    let minutes = items.next()?.trim().parse::<u32>().ok()?;

    let seconds = match items.next() {
        Some(s) => s.trim().parse::<f64>().ok()?,
        None => 0.0,
    };

    if items.next().is_some() || minutes > 59 || !(0.0..60.0).contains(&seconds) {
        return None;
    }

    Some(hours as f64 + minutes as f64 / 60.0 + seconds / 3600.0)
}

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Hours elapsed since the first timestamp
fn elapsed_hours(epochs: &[Epoch]) -> Vec<f64> {
    match epochs.first() {
        Some(t0) => epochs
            .iter()
            .map(|t| (*t - *t0).to_seconds() / SECONDS_PER_HOUR)
            .collect(),
        None => Vec::new(),
    }
}

fn parse_epochs(values: &[String]) -> Result<Vec<Epoch>, Error> {
    values
        .iter()
        .enumerate()
        .map(|(row, value)| {
            Epoch::from_str(value.trim()).map_err(|_| Error::InvalidTime {
                row,
                value: value.clone(),
            })
        })
        .collect()
}

/// Resolves the [Role::Time] column into decimal hours.
pub(crate) fn time_hours(column: &Column, format: TimeFormat) -> Result<Vec<f64>, Error> {
    match (column.data(), format) {
        (ColumnData::Float(hours), TimeFormat::DecimalHours) => hours
            .iter()
            .enumerate()
            .map(|(row, h)| {
                if h.is_finite() {
                    Ok(*h)
                } else {
                    Err(Error::InvalidTime {
                        row,
                        value: h.to_string(),
                    })
                }
            })
            .collect(),
        (ColumnData::Text(values), TimeFormat::DecimalHours) => values
            .iter()
            .enumerate()
            .map(|(row, value)| match value.trim().parse::<f64>() {
                Ok(h) if h.is_finite() => Ok(h),
                _ => Err(Error::InvalidTime {
                    row,
                    value: value.clone(),
                }),
            })
            .collect(),
        (ColumnData::Text(values), TimeFormat::Clock) => values
            .iter()
            .enumerate()
            .map(|(row, value)| {
                hms_to_hours(value).ok_or(Error::InvalidTime {
                    row,
                    value: value.clone(),
                })
            })
            .collect(),
        (ColumnData::Epoch(epochs), _) => Ok(elapsed_hours(epochs)),
        (ColumnData::Float(_), TimeFormat::Clock) => Err(Error::ColumnType {
            column: column.name().to_string(),
            role: Role::Time,
        }),
    }
}

/// Resolves the [Role::Date] column into hours elapsed since the first row.
pub(crate) fn date_hours(column: &Column) -> Result<Vec<f64>, Error> {
    match column.data() {
        ColumnData::Epoch(epochs) => Ok(elapsed_hours(epochs)),
        ColumnData::Text(values) => Ok(elapsed_hours(&parse_epochs(values)?)),
        ColumnData::Float(_) => Err(Error::ColumnType {
            column: column.name().to_string(),
            role: Role::Date,
        }),
    }
}

#[cfg(test)]
mod test {
    use super::{date_hours, hms_to_hours, time_hours};
    use crate::{
        binding::{Role, TimeFormat},
        prelude::{Column, ColumnData, Epoch, Error},
    };
    use std::str::FromStr;

    #[test]
    fn clock_parsing() {
        for (clock, expected) in [
            ("00:00:00", Some(0.0)),
            ("12:00", Some(12.0)),
            ("08:45:00", Some(8.75)),
            (" 9:06:36 ", Some(9.11)),
            ("23:59:60", None),
            ("10:60:00", None),
            ("10:00:00:00", None),
            ("10", None),
            ("", None),
            ("ab:cd", None),
        ] {
            match expected {
                Some(expected) => {
                    let hours = hms_to_hours(clock).unwrap();
                    assert!((hours - expected).abs() < 1.0E-9, "\"{}\"", clock);
                },
                None => assert!(hms_to_hours(clock).is_none(), "\"{}\"", clock),
            }
        }
    }

    #[test]
    fn time_column() {
        let column = Column::new("Time", ColumnData::from(vec!["08:00:00", "08:30:00"]));
        assert_eq!(time_hours(&column, TimeFormat::Clock), Ok(vec![8.0, 8.5]));

        let column = Column::new("Time", ColumnData::from(vec!["08:00:00", "8h30"]));
        assert_eq!(
            time_hours(&column, TimeFormat::Clock),
            Err(Error::InvalidTime {
                row: 1,
                value: "8h30".to_string()
            })
        );

        let column = Column::new("Time", ColumnData::from(vec![8.0, 8.25]));
        assert_eq!(
            time_hours(&column, TimeFormat::DecimalHours),
            Ok(vec![8.0, 8.25])
        );
        assert_eq!(
            time_hours(&column, TimeFormat::Clock),
            Err(Error::ColumnType {
                column: "Time".to_string(),
                role: Role::Time,
            })
        );

        let column = Column::new("Time", ColumnData::from(vec!["8.0", "8.5"]));
        assert_eq!(
            time_hours(&column, TimeFormat::DecimalHours),
            Ok(vec![8.0, 8.5])
        );

        let column = Column::new("Time", ColumnData::from(vec!["8.0", "NaN"]));
        assert_eq!(
            time_hours(&column, TimeFormat::DecimalHours),
            Err(Error::InvalidTime {
                row: 1,
                value: "NaN".to_string()
            })
        );

        let column = Column::new("Time", ColumnData::from(vec![8.0, f64::INFINITY]));
        assert!(matches!(
            time_hours(&column, TimeFormat::DecimalHours),
            Err(Error::InvalidTime { row: 1, .. })
        ));
    }

    #[test]
    fn date_column() {
        let column = Column::new(
            "Date",
            ColumnData::from(vec![
                "2023-05-11T21:00:00 UTC",
                "2023-05-11T22:30:00 UTC",
                "2023-05-12T00:00:00 UTC",
            ]),
        );
        assert_eq!(date_hours(&column), Ok(vec![0.0, 1.5, 3.0]));

        let t0 = Epoch::from_str("2023-05-11T21:00:00 UTC").unwrap();
        let t1 = Epoch::from_str("2023-05-11T21:15:00 UTC").unwrap();
        let column = Column::new("Date", ColumnData::from(vec![t0, t1]));
        assert_eq!(date_hours(&column), Ok(vec![0.0, 0.25]));

        let column = Column::new("Date", ColumnData::from(vec!["yesterday"]));
        assert!(matches!(
            date_hours(&column),
            Err(Error::InvalidTime { row: 0, .. })
        ));
    }
}
