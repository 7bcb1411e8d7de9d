

use log::LevelFilter;
use std::sync::Once;

use crate::prelude::Table;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Single loop survey: base, one station, base
pub fn single_loop_table() -> Table {
    Table::new()
        .with_column("Station", vec!["Base", "S1", "Base"])
        .unwrap()
        .with_column("Time", vec![0.0, 5.0, 10.0])
        .unwrap()
        .with_column("Obs_grav", vec![100.0, 98.0, 105.0])
        .unwrap()
        .with_column("Elev", vec![0.0, 50.0, 0.0])
        .unwrap()
        .with_column("Lat", vec![45.0, 45.01, 45.0])
        .unwrap()
}

/// Projected survey with clock times and repeated stations
pub fn projected_table() -> Table {
    Table::new()
        .with_column("Station", vec!["BS", "P1", "P2", "BS", "P1", "P3", "BS"])
        .unwrap()
        .with_column(
            "Time",
            vec![
                "08:00:00", "08:15:00", "08:30:00", "09:00:00", "09:20:00", "09:40:00",
                "10:00:00",
            ],
        )
        .unwrap()
        .with_column(
            "Obs_grav",
            vec![2500.0, 2490.0, 2480.0, 2500.5, 2491.0, 2470.0, 2501.0],
        )
        .unwrap()
        .with_column(
            "NAD83_E",
            vec![
                500000.0, 500100.0, 500200.0, 500000.0, 500100.0, 500300.0, 500000.0,
            ],
        )
        .unwrap()
        .with_column(
            "NAD83_N",
            vec![
                4500000.0, 4500500.0, 4501000.0, 4500000.0, 4500500.0, 4501500.0, 4500000.0,
            ],
        )
        .unwrap()
        .with_column("NAVD88", vec![10.0, 20.0, 30.0, 10.0, 20.0, 40.0, 10.0])
        .unwrap()
}
