//! Per-station measurement series.

use chrono::NaiveDateTime;

/// The resampled measurement series of one monitoring station.
///
/// Samples are ordered by ascending timestamp, values already rounded to
/// the configured precision. Consumed by an export writer; the CSV path
/// writes each station out as soon as it is produced, the spreadsheet path
/// buffers one `StationSeries` per sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct StationSeries {
    id: String,
    samples: Vec<(NaiveDateTime, f64)>,
}

impl StationSeries {
    /// Creates a station series (crate-internal constructor).
    pub(crate) fn new(id: String, samples: Vec<(NaiveDateTime, f64)>) -> Self {
        Self { id, samples }
    }

    /// Returns the station identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the `(timestamp, value)` samples, timestamp ascending.
    pub fn samples(&self) -> &[(NaiveDateTime, f64)] {
        &self.samples
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn accessors() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let series = StationSeries::new("Br. 1".to_string(), vec![(ts, 10.0)]);
        assert_eq!(series.id(), "Br. 1");
        assert_eq!(series.len(), 1);
        assert!(!series.is_empty());
        assert_eq!(series.samples()[0], (ts, 10.0));
    }

    #[test]
    fn empty_series() {
        let series = StationSeries::new("S".to_string(), vec![]);
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }

    #[test]
    fn series_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<StationSeries>();
    }
}
