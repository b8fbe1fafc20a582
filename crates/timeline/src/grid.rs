//! Sub-daily sample grids.

use chrono::{Duration, NaiveDateTime};

use crate::error::TimelineError;
use crate::span::DateSpan;

/// A regular grid of measurement timestamps over a [`DateSpan`].
///
/// The `i`-th timestamp is always computed as `start + i * interval`, never
/// by accumulating an interval onto a running value, so long grids do not
/// drift and the final inclusive sample is never lost.
///
/// An interval of 0 hours is the degenerate single-instant grid carrying
/// exactly one sample at the span start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    span: DateSpan,
    interval_hours: f64,
}

impl SampleGrid {
    /// Creates a grid over `span` stepped by `interval_hours`.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::InvalidInterval`] if the interval is
    /// negative or not finite.
    pub fn new(span: DateSpan, interval_hours: f64) -> Result<Self, TimelineError> {
        if !interval_hours.is_finite() || interval_hours < 0.0 {
            return Err(TimelineError::InvalidInterval {
                hours: interval_hours,
            });
        }
        Ok(Self {
            span,
            interval_hours,
        })
    }

    /// Returns the underlying span.
    pub fn span(&self) -> &DateSpan {
        &self.span
    }

    /// Returns the interval in hours.
    pub fn interval_hours(&self) -> f64 {
        self.interval_hours
    }

    /// Returns the number of samples, both endpoints included:
    /// `floor(duration / interval) + 1`.
    ///
    /// The degenerate zero-interval grid has exactly one sample.
    pub fn n_samples(&self) -> usize {
        if self.interval_hours == 0.0 {
            return 1;
        }
        let duration_secs = self.span.duration_seconds() as f64;
        let interval_secs = self.interval_hours * 3600.0;
        // The epsilon tolerates float shortfall when the duration is an
        // exact multiple of the interval.
        (duration_secs / interval_secs + 1e-9).floor() as usize + 1
    }

    /// Returns the `i`-th timestamp, `start + i * interval`.
    pub fn timestamp(&self, i: usize) -> NaiveDateTime {
        let millis = (i as f64 * self.interval_hours * 3_600_000.0).round() as i64;
        self.span.start() + Duration::milliseconds(millis)
    }

    /// Iterates over all grid timestamps in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        (0..self.n_samples()).map(|i| self.timestamp(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn span(start: NaiveDateTime, end: NaiveDateTime) -> DateSpan {
        DateSpan::new(start, end).unwrap()
    }

    #[test]
    fn hourly_over_one_day_is_25_samples() {
        let grid = SampleGrid::new(span(dt(2024, 1, 1, 0), dt(2024, 1, 2, 0)), 1.0).unwrap();
        assert_eq!(grid.n_samples(), 25);
        assert_eq!(grid.timestamp(0), dt(2024, 1, 1, 0));
        assert_eq!(grid.timestamp(24), dt(2024, 1, 2, 0));
    }

    #[test]
    fn negative_interval_rejected() {
        let err = SampleGrid::new(span(dt(2024, 1, 1, 0), dt(2024, 1, 2, 0)), -1.0).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidInterval { .. }));
    }

    #[test]
    fn nan_interval_rejected() {
        let err =
            SampleGrid::new(span(dt(2024, 1, 1, 0), dt(2024, 1, 2, 0)), f64::NAN).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidInterval { .. }));
    }

    #[test]
    fn zero_interval_is_single_instant() {
        let grid = SampleGrid::new(span(dt(2024, 1, 1, 0), dt(2024, 1, 2, 0)), 0.0).unwrap();
        assert_eq!(grid.n_samples(), 1);
        assert_eq!(grid.timestamp(0), dt(2024, 1, 1, 0));
    }

    #[test]
    fn same_day_24h_interval_single_sample() {
        let grid = SampleGrid::new(span(dt(2024, 1, 1, 0), dt(2024, 1, 1, 0)), 24.0).unwrap();
        assert_eq!(grid.n_samples(), 1);
    }

    #[test]
    fn interval_longer_than_span() {
        let grid = SampleGrid::new(span(dt(2024, 1, 1, 0), dt(2024, 1, 1, 6)), 12.0).unwrap();
        assert_eq!(grid.n_samples(), 1);
    }

    #[test]
    fn fractional_interval() {
        // 6 hours at 1.5h steps: 0, 1.5, 3, 4.5, 6 -> 5 samples.
        let grid = SampleGrid::new(span(dt(2024, 1, 1, 0), dt(2024, 1, 1, 6)), 1.5).unwrap();
        assert_eq!(grid.n_samples(), 5);
        let last = grid.timestamp(4);
        assert_eq!(last, dt(2024, 1, 1, 6));
    }

    #[test]
    fn non_dividing_interval_stays_inside_span() {
        // 24 hours at 7h steps: 0, 7, 14, 21 -> 4 samples, all <= end.
        let grid = SampleGrid::new(span(dt(2024, 1, 1, 0), dt(2024, 1, 2, 0)), 7.0).unwrap();
        assert_eq!(grid.n_samples(), 4);
        for ts in grid.iter() {
            assert!(ts <= grid.span().end());
        }
    }

    #[test]
    fn no_drift_over_long_grid() {
        // A year of 0.5h samples: the i-th timestamp must be exact.
        let grid =
            SampleGrid::new(span(dt(2024, 1, 1, 0), dt(2024, 12, 31, 0)), 0.5).unwrap();
        let n = grid.n_samples();
        assert_eq!(n, 365 * 48 + 1);
        let last = grid.timestamp(n - 1);
        assert_eq!(last, dt(2024, 12, 31, 0));
    }

    #[test]
    fn iter_matches_indexing() {
        let grid = SampleGrid::new(span(dt(2024, 1, 1, 0), dt(2024, 1, 1, 12)), 3.0).unwrap();
        let collected: Vec<_> = grid.iter().collect();
        assert_eq!(collected.len(), grid.n_samples());
        for (i, ts) in collected.iter().enumerate() {
            assert_eq!(*ts, grid.timestamp(i));
        }
    }

    #[test]
    fn count_is_maximal_within_span() {
        // n_samples must cover every timestamp inside the span and nothing
        // beyond it, for dividing and non-dividing intervals alike.
        for &hours in &[0.25, 0.7, 1.0, 2.5, 5.0, 11.0, 23.0, 24.0, 36.0] {
            let grid =
                SampleGrid::new(span(dt(2024, 3, 1, 0), dt(2024, 3, 11, 0)), hours).unwrap();
            let n = grid.n_samples();
            assert!(
                grid.timestamp(n - 1) <= grid.span().end(),
                "interval {hours}h: last sample past span end"
            );
            assert!(
                grid.timestamp(n) > grid.span().end(),
                "interval {hours}h: final in-span sample dropped"
            );
        }
    }
}
