use itertools::Itertools;
use log::debug;

use crate::{
    cfg::{DriftOpts, DriftReference, OutsideSegment},
    prelude::Error,
};

/// Drift [Segment] bounded by two consecutive base station visits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Row index of the opening visit
    pub opening: usize,
    /// Row index of the closing visit
    pub closing: usize,
    /// Opening time (hours)
    pub t0: f64,
    /// Drift rate (reading units per hour)
    pub rate: f64,
    /// Drift accumulated by all previous segments
    pub accumulated: f64,
}

impl Segment {
    /// Drift at time `t` (hours)
    fn drift(&self, t: f64, reference: DriftReference) -> f64 {
        let drift = self.rate * (t - self.t0);
        match reference {
            DriftReference::Segment => drift,
            DriftReference::Survey => drift + self.accumulated,
        }
    }
}

/// Builds the drift [Segment]s defined by the base station visits.
/// `times` are expressed in hours, readings in instrument units.
pub fn drift_segments<S: AsRef<str>>(
    stations: &[S],
    times: &[f64],
    gravity: &[f64],
    base: &str,
) -> Result<Vec<Segment>, Error> {
    if stations.len() != times.len() {
        return Err(Error::LengthMismatch(stations.len(), times.len()));
    }
    if stations.len() != gravity.len() {
        return Err(Error::LengthMismatch(stations.len(), gravity.len()));
    }

    let visits = stations
        .iter()
        .map(AsRef::<str>::as_ref)
        .positions(|station| station == base)
        .collect::<Vec<_>>();

    if visits.len() < 2 {
        return Err(Error::NotEnoughBaseVisits {
            name: base.to_string(),
            visits: visits.len(),
        });
    }

    let mut accumulated = 0.0;
    let mut segments = Vec::with_capacity(visits.len() - 1);

    for (opening, closing) in visits.into_iter().tuple_windows() {
        let dt = times[closing] - times[opening];
        let dg = gravity[closing] - gravity[opening];

        if dt == 0.0 || !dt.is_finite() || !dg.is_finite() {
            return Err(Error::DegenerateDriftSegment { opening, closing });
        }

        let segment = Segment {
            opening,
            closing,
            t0: times[opening],
            rate: dg / dt,
            accumulated,
        };

        debug!(
            "drift segment [{}; {}] - dt={}h dg={} rate={}",
            opening, closing, dt, dg, segment.rate
        );

        accumulated += dg;
        segments.push(segment);
    }

    Ok(segments)
}

/// Computes the drift of every reading, by linear interpolation
/// between consecutive base station visits.
/// `times` are expressed in hours, and must be chronological.
/// Drift is returned in reading units: subtract it from the readings.
/// ```
/// use gravity_survey::prelude::{drift_correction, DriftOpts};
///
/// let stations = ["Base", "S1", "Base"];
/// let times = [0.0, 5.0, 10.0];
/// let gravity = [100.0, 98.0, 105.0];
///
/// let drift = drift_correction(&stations, &times, &gravity, "Base", &DriftOpts::default())
///     .unwrap();
///
/// assert_eq!(drift, vec![0.0, 2.5, 5.0]);
/// ```
pub fn drift_correction<S: AsRef<str>>(
    stations: &[S],
    times: &[f64],
    gravity: &[f64],
    base: &str,
    opts: &DriftOpts,
) -> Result<Vec<f64>, Error> {
    let segments = drift_segments(stations, times, gravity, base)?;

    if let Some(row) = times.iter().position(|t| !t.is_finite()) {
        return Err(Error::InvalidTime {
            row,
            value: times[row].to_string(),
        });
    }

    // at least one segment exists
    let (first, last) = (segments[0], segments[segments.len() - 1]);

    let mut k = 0;
    let mut drift = Vec::with_capacity(times.len());

    for (row, t) in times.iter().enumerate() {
        let segment = if row < first.opening || row > last.closing {
            match opts.outside {
                OutsideSegment::Reject => {
                    return Err(Error::OutsideDriftSegment {
                        row,
                        station: AsRef::<str>::as_ref(&stations[row]).to_string(),
                    });
                },
                OutsideSegment::Extrapolate => {
                    if row < first.opening {
                        first
                    } else {
                        last
                    }
                },
            }
        } else {
            // closing visit of the last segment belongs to it
            while row >= segments[k].closing && k + 1 < segments.len() {
                k += 1;
            }
            segments[k]
        };

        drift.push(segment.drift(*t, opts.reference));
    }

    Ok(drift)
}

#[cfg(test)]
mod test {
    use super::{drift_correction, drift_segments};
    use crate::{
        cfg::{DriftOpts, DriftReference, OutsideSegment},
        prelude::{Error, ErrorKind},
    };

    fn survey_opts() -> DriftOpts {
        DriftOpts {
            reference: DriftReference::Survey,
            outside: OutsideSegment::Reject,
        }
    }

    #[test]
    fn single_segment() {
        let drift = drift_correction(
            &["Base", "S1", "Base"],
            &[0.0, 5.0, 10.0],
            &[100.0, 98.0, 105.0],
            "Base",
            &DriftOpts::default(),
        )
        .unwrap();

        assert_eq!(drift, vec![0.0, 2.5, 5.0]);
    }

    #[test]
    fn multiple_segments() {
        let stations = ["B", "S1", "S2", "B", "S3", "B"];
        let times = [0.0, 1.0, 2.0, 4.0, 5.0, 6.0];
        let gravity = [100.0, 90.0, 91.0, 102.0, 80.0, 101.0];

        let segments = drift_segments(&stations, &times, &gravity, "B").unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!((segments[0].opening, segments[0].closing), (0, 3));
        assert_eq!((segments[1].opening, segments[1].closing), (3, 5));
        assert_eq!(segments[0].rate, 0.5);
        assert_eq!(segments[1].rate, -0.5);
        assert_eq!(segments[1].accumulated, 2.0);

        let drift =
            drift_correction(&stations, &times, &gravity, "B", &DriftOpts::default()).unwrap();
        assert_eq!(drift, vec![0.0, 0.5, 1.0, 0.0, -0.5, -1.0]);

        let drift = drift_correction(&stations, &times, &gravity, "B", &survey_opts()).unwrap();
        assert_eq!(drift, vec![0.0, 0.5, 1.0, 2.0, 1.5, 1.0]);

        // every base reading reduces to the first one
        for i in [0, 3, 5] {
            assert_eq!(gravity[i] - drift[i], 100.0);
        }
    }

    #[test]
    fn consecutive_base_visits() {
        let drift = drift_correction(
            &["B", "B", "S1", "B"],
            &[0.0, 1.0, 2.0, 3.0],
            &[10.0, 11.0, 0.0, 13.0],
            "B",
            &DriftOpts::default(),
        )
        .unwrap();

        assert_eq!(drift, vec![0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn zero_time_span() {
        let err = drift_correction(
            &["B", "S1", "B"],
            &[3.0, 3.0, 3.0],
            &[100.0, 98.0, 105.0],
            "B",
            &DriftOpts::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            Error::DegenerateDriftSegment {
                opening: 0,
                closing: 2
            }
        );
    }

    #[test]
    fn non_finite_values() {
        for times in [[0.0, 5.0, f64::NAN], [0.0, 5.0, f64::INFINITY]] {
            let err = drift_correction(
                &["B", "S1", "B"],
                &times,
                &[100.0, 98.0, 105.0],
                "B",
                &DriftOpts::default(),
            )
            .unwrap_err();

            assert_eq!(
                err,
                Error::DegenerateDriftSegment {
                    opening: 0,
                    closing: 2
                }
            );
            assert_eq!(err.kind(), ErrorKind::Arithmetic);
        }

        let err = drift_correction(
            &["B", "S1", "B"],
            &[0.0, 5.0, 10.0],
            &[100.0, 98.0, f64::NAN],
            "B",
            &DriftOpts::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);

        // undefined time between two valid base visits
        let err = drift_correction(
            &["B", "S1", "B"],
            &[0.0, f64::NAN, 10.0],
            &[100.0, 98.0, 105.0],
            "B",
            &DriftOpts::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidTime { row: 1, .. }));
    }

    #[test]
    fn not_enough_visits() {
        for stations in [["S1", "S2", "S3"], ["S1", "B", "S3"]] {
            let err = drift_correction(
                &stations,
                &[0.0, 1.0, 2.0],
                &[1.0, 2.0, 3.0],
                "B",
                &DriftOpts::default(),
            )
            .unwrap_err();

            assert!(matches!(err, Error::NotEnoughBaseVisits { .. }));
        }
    }

    #[test]
    fn outside_segments() {
        let stations = ["S0", "B", "S1", "B", "S2"];
        let times = [0.0, 1.0, 2.0, 3.0, 4.0];
        let gravity = [0.0, 10.0, 0.0, 12.0, 0.0];

        assert_eq!(
            drift_correction(&stations, &times, &gravity, "B", &DriftOpts::default()),
            Err(Error::OutsideDriftSegment {
                row: 0,
                station: "S0".to_string()
            })
        );

        let opts = DriftOpts {
            reference: DriftReference::Segment,
            outside: OutsideSegment::Extrapolate,
        };

        let drift = drift_correction(&stations, &times, &gravity, "B", &opts).unwrap();
        assert_eq!(drift, vec![-1.0, 0.0, 1.0, 2.0, 3.0]);

        let drift = drift_correction(
            &stations[1..],
            &times[1..],
            &gravity[1..],
            "B",
            &DriftOpts::default(),
        );
        assert_eq!(
            drift,
            Err(Error::OutsideDriftSegment {
                row: 3,
                station: "S2".to_string()
            })
        );
    }

    #[test]
    fn length_mismatch() {
        assert_eq!(
            drift_correction(&["B", "B"], &[0.0], &[1.0, 2.0], "B", &DriftOpts::default()),
            Err(Error::LengthMismatch(2, 1))
        );
    }
}
