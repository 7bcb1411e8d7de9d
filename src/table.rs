use crate::prelude::{Epoch, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Content of a single [Column]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColumnData {
    /// Free text (station names, clock times..)
    Text(Vec<String>),
    /// Numerical values
    Float(Vec<f64>),
    /// Timestamps
    Epoch(Vec<Epoch>),
}

impl ColumnData {
    /// Number of rows
    pub fn len(&self) -> usize {
        match self {
            Self::Text(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::Epoch(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for data we know how to average
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    /// Returns numerical values, if this is a [ColumnData::Float].
    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Returns text content, if this is a [ColumnData::Text].
    pub fn as_text(&self) -> Option<&[String]> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Returns timestamps, if this is a [ColumnData::Epoch].
    pub fn as_epochs(&self) -> Option<&[Epoch]> {
        match self {
            Self::Epoch(v) => Some(v),
            _ => None,
        }
    }

    /// Readable representation of a single cell, `row` being in bounds.
    pub(crate) fn cell(&self, row: usize) -> String {
        match self {
            Self::Text(v) => v[row].clone(),
            Self::Float(v) => v[row].to_string(),
            Self::Epoch(v) => v[row].to_string(),
        }
    }

    /// Builds a new [ColumnData] of the same type from a subset of rows.
    pub(crate) fn select(&self, rows: &[usize]) -> Self {
        match self {
            Self::Text(v) => Self::Text(rows.iter().map(|i| v[*i].clone()).collect()),
            Self::Float(v) => Self::Float(rows.iter().map(|i| v[*i]).collect()),
            Self::Epoch(v) => Self::Epoch(rows.iter().map(|i| v[*i]).collect()),
        }
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(v: Vec<f64>) -> Self {
        Self::Float(v)
    }
}

impl From<Vec<String>> for ColumnData {
    fn from(v: Vec<String>) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<&str>> for ColumnData {
    fn from(v: Vec<&str>) -> Self {
        Self::Text(v.into_iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<Epoch>> for ColumnData {
    fn from(v: Vec<Epoch>) -> Self {
        Self::Epoch(v)
    }
}

/// Named [Column] of a [Table]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: &str, data: ColumnData) -> Self {
        Self {
            name: name.to_string(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Measurement [Table]: one row per gravimeter reading,
/// stored column wise. Column names are unique and all columns
/// have the same number of rows.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Creates an empty [Table]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies and returns [Table] with one more [Column].
    /// ```
    /// use gravity_survey::prelude::Table;
    ///
    /// let table = Table::new()
    ///     .with_column("station", vec!["B", "S1", "B"])
    ///     .unwrap()
    ///     .with_column("gravity", vec![100.0, 98.0, 105.0])
    ///     .unwrap();
    ///
    /// assert_eq!(table.len(), 3);
    /// assert_eq!(table.names(), vec!["station", "gravity"]);
    /// ```
    pub fn with_column<D: Into<ColumnData>>(&self, name: &str, data: D) -> Result<Self, Error> {
        let mut s = self.clone();
        s.push(Column::new(name, data.into()))?;
        Ok(s)
    }

    /// Appends a new [Column] to this [Table].
    pub fn push(&mut self, column: Column) -> Result<(), Error> {
        if self.index(column.name()).is_some() {
            return Err(Error::DuplicateColumn(column.name().to_string()));
        }
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(Error::ColumnLength {
                    name: column.name().to_string(),
                    len: column.len(),
                    expected: first.len(),
                });
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column names, in table order
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Index of the [Column] named `name`
    pub fn index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// [Column] at `index`
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// [Column] named `name`
    pub fn column_by_name(&self, name: &str) -> Result<&Column, Error> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or(Error::UnknownColumn(name.to_string()))
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter()
    }
}
