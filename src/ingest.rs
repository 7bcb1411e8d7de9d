use std::{io::Read, path::Path};

use csv::{ReaderBuilder, Trim};
use log::debug;

use crate::prelude::{Column, ColumnData, Error, Table};

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e.to_string())
    }
}

impl Table {
    /// Loads a [Table] from delimited text, with header line.
    /// Columns that only contain numbers are numerical, others are text.
    /// Timestamps are loaded as text: bind them with
    /// [Survey::set_date](crate::prelude::Survey::set_date).
    pub fn from_csv_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .trim(Trim::All)
            .from_reader(reader);

        let names = reader
            .headers()?
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();

        let mut cells = vec![Vec::<String>::new(); names.len()];

        for record in reader.records() {
            let record = record?;
            for (i, cell) in record.iter().enumerate() {
                if let Some(column) = cells.get_mut(i) {
                    column.push(cell.to_string());
                }
            }
        }

        let mut table = Table::new();

        for (name, values) in names.iter().zip(cells.into_iter()) {
            let floats = values
                .iter()
                .map(|v| v.parse::<f64>())
                .collect::<Result<Vec<_>, _>>();

            let data = match floats {
                Ok(floats) if !floats.is_empty() => ColumnData::Float(floats),
                _ => ColumnData::Text(values),
            };

            table.push(Column::new(name, data))?;
        }

        debug!("loaded {} rows: {:?}", table.len(), table.names());
        Ok(table)
    }

    /// Loads a [Table] from a comma separated (.csv) file.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if extension != "csv" {
            return Err(Error::UnsupportedFormat(path.display().to_string()));
        }

        let fd = std::fs::File::open(path)?;
        Self::from_csv_reader(fd, b',')
    }
}
