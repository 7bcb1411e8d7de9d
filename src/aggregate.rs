use std::collections::HashMap;

use log::debug;

use crate::{
    averager::Averager,
    prelude::{Column, ColumnData, Duration, Epoch, Error, Table},
};

/// Groups rows by value of the `key` column: one row per distinct key,
/// in first-occurrence order. Numerical and timestamp columns are averaged
/// over the group, the key column retains its first value, other
/// text columns are dropped.
pub fn group_by(table: &Table, key: usize) -> Result<Table, Error> {
    let key_column = table.column(key).ok_or(Error::UnboundGroupingKey)?;

    let mut groups = Vec::<Vec<usize>>::new();
    let mut lookup = HashMap::<String, usize>::new();

    for row in 0..key_column.len() {
        let value = key_column.data().cell(row);
        match lookup.get(&value) {
            Some(group) => groups[*group].push(row),
            None => {
                lookup.insert(value, groups.len());
                groups.push(vec![row]);
            },
        }
    }

    debug!(
        "grouping {} rows by \"{}\": {} groups",
        table.len(),
        key_column.name(),
        groups.len()
    );

    let mut grouped = Table::new();

    for (index, column) in table.columns().enumerate() {
        let data = if index == key {
            let firsts = groups.iter().map(|rows| rows[0]).collect::<Vec<_>>();
            column.data().select(&firsts)
        } else {
            match column.data() {
                ColumnData::Float(values) => ColumnData::Float(
                    groups
                        .iter()
                        .map(|rows| {
                            let mut avg = Averager::new();
                            for row in rows {
                                avg.add(values[*row]);
                            }
                            avg.mean
                        })
                        .collect(),
                ),
                ColumnData::Epoch(values) => ColumnData::Epoch(
                    groups
                        .iter()
                        .map(|rows| mean_epoch(values, rows))
                        .collect(),
                ),
                ColumnData::Text(_) => {
                    debug!("dropping non numerical column \"{}\"", column.name());
                    continue;
                },
            }
        };

        grouped.push(Column::new(column.name(), data))?;
    }

    Ok(grouped)
}

/// Mean [Epoch], expressed as mean offset to the first one
fn mean_epoch(values: &[Epoch], rows: &[usize]) -> Epoch {
    let t0 = values[rows[0]];
    let mut avg = Averager::new();
    for row in rows {
        avg.add((values[*row] - t0).to_seconds());
    }
    t0 + Duration::from_seconds(avg.mean)
}
