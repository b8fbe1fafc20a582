//! Expansion of the daily series onto station timestamp grids.

use chrono::NaiveDateTime;
use rand::Rng;

use poseidon_model::DailySeries;
use poseidon_timeline::SampleGrid;

use crate::config::ResampleConfig;
use crate::error::ResampleError;
use crate::result::StationSeries;
use crate::stations::{station_offset, validate_station_ids};

/// Expands the daily series into the measurement series of one station.
///
/// For every grid timestamp the daily value is looked up by clamped day
/// index, shifted by the station's constant offset, optionally jittered
/// uniformly within the configured half-width, and rounded.
///
/// Callers are expected to have validated `config` and the station list;
/// this function itself is total.
pub fn expand_station(
    series: &DailySeries,
    grid: &SampleGrid,
    station_index: usize,
    n_stations: usize,
    config: &ResampleConfig,
    rng: &mut impl Rng,
) -> Vec<(NaiveDateTime, f64)> {
    let offset = station_offset(station_index, n_stations, config.station_spacing());
    let jitter = config.jitter_half_width();
    let n_samples = grid.n_samples();

    let mut samples = Vec::with_capacity(n_samples);
    for i in 0..n_samples {
        let ts = grid.timestamp(i);
        let day_index = grid.span().day_index_of(ts);
        let mut value = series.value_at_clamped(day_index) + offset;
        if jitter > 0.0 {
            value += rng.random_range(-jitter..=jitter);
        }
        samples.push((ts, poseidon_stats::round_to(value, config.decimals())));
    }
    samples
}

/// Expands the daily series into one [`StationSeries`] per station.
///
/// Stations are produced in the caller-supplied order, timestamps ascending
/// within each station. `progress` is invoked with
/// `(samples_emitted, samples_total)` every `config.progress_every()`
/// emitted samples and once more after the final sample.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidConfig`] for an out-of-range
/// configuration, and [`ResampleError::EmptyStationList`] or
/// [`ResampleError::DuplicateStation`] for a bad station list. All
/// validation happens before any expansion work.
pub fn expand_all(
    series: &DailySeries,
    grid: &SampleGrid,
    station_ids: &[String],
    config: &ResampleConfig,
    rng: &mut impl Rng,
    mut progress: impl FnMut(usize, usize),
) -> Result<Vec<StationSeries>, ResampleError> {
    config.validate()?;
    validate_station_ids(station_ids)?;

    let n_stations = station_ids.len();
    let total = grid.n_samples() * n_stations;
    let mut emitted = 0usize;

    let mut result = Vec::with_capacity(n_stations);
    for (k, id) in station_ids.iter().enumerate() {
        let samples = expand_station(series, grid, k, n_stations, config, rng);
        for _ in 0..samples.len() {
            emitted += 1;
            if emitted % config.progress_every() == 0 {
                progress(emitted, total);
            }
        }
        result.push(StationSeries::new(id.clone(), samples));
    }
    progress(emitted, total);

    Ok(result)
}
