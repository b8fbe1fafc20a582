//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use poseidon_io::CsvWriterConfig;
use poseidon_model::{ModelParameters, SmoothingConfig};
use poseidon_resample::ResampleConfig;
use poseidon_timeline::{DateSpan, SampleGrid, parse_datetime_flexible};

use crate::config::{IoToml, ModelToml, ResampleToml, RunConfig, SmoothingToml};

/// Builds [`ModelParameters`] from the TOML model configuration.
pub fn build_model_params(model: &ModelToml) -> ModelParameters {
    ModelParameters::new()
        .with_baseline(model.baseline)
        .with_amplitude(model.amplitude)
        .with_period(model.period)
        .with_frequency(model.frequency)
        .with_phase(model.phase)
        .with_rise_time(model.rise_time)
        .with_decay_time(model.decay_time)
        .with_noise_scale(model.noise_scale)
        .with_trend_per_year(model.trend_per_year)
        .with_waveform_variability(model.waveform_variability)
        .with_secondary_wave_frequency(model.secondary_wave_frequency)
}

/// Builds the optional [`SmoothingConfig`] from the TOML smoothing section.
///
/// Returns `None` when the stage is disabled. Explicit `passes`/`window`
/// override the noise-derived defaults field by field.
pub fn build_smoothing_config(
    smoothing: &SmoothingToml,
    noise_scale: f64,
) -> Option<SmoothingConfig> {
    if !smoothing.enabled {
        return None;
    }
    let mut cfg = SmoothingConfig::from_noise_scale(noise_scale);
    if let Some(passes) = smoothing.passes {
        cfg = cfg.with_passes(passes);
    }
    if let Some(window) = smoothing.window {
        cfg = cfg.with_window(window);
    }
    Some(cfg)
}

/// Builds a [`ResampleConfig`] from the TOML resample configuration.
///
/// When `jitter` is set, the jitter half-width follows the original tool's
/// convention of `noise_scale * station_spacing`.
pub fn build_resample_config(resample: &ResampleToml, noise_scale: f64) -> ResampleConfig {
    let jitter_half_width = if resample.jitter {
        noise_scale.max(0.0) * resample.station_spacing
    } else {
        0.0
    };
    ResampleConfig::new()
        .with_station_spacing(resample.station_spacing)
        .with_jitter_half_width(jitter_half_width)
        .with_decimals(resample.decimals)
        .with_progress_every(resample.progress_every)
}

/// Builds a [`CsvWriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoToml, decimals: u8) -> Result<CsvWriterConfig> {
    let delimiter = match io.delimiter.as_bytes() {
        [b] => *b,
        _ => bail!("delimiter must be a single character, got {:?}", io.delimiter),
    };
    Ok(CsvWriterConfig::new()
        .with_delimiter(delimiter)
        .with_decimal_comma(io.decimal_comma)
        .with_timestamp_format(&io.timestamp_format)
        .with_decimals(decimals))
}

/// Builds the sample grid from the TOML run configuration.
///
/// Parses both dates, checks their order, and validates the interval.
pub fn build_sample_grid(run: &RunConfig) -> Result<SampleGrid> {
    let start = parse_datetime_flexible(&run.start)?;
    let end = parse_datetime_flexible(&run.end)?;
    let span = DateSpan::new(start, end)?;
    Ok(SampleGrid::new(span, run.interval_hours)?)
}
