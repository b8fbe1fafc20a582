use std::path::PathBuf;

use serde::Deserialize;

/// Top-level poseidon configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoseidonConfig {
    /// Global RNG seed. Unset means a fresh OS-entropy seed per run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Run settings: date range, interval, stations.
    pub run: RunConfig,

    /// Model parameter settings.
    #[serde(default)]
    pub model: ModelToml,

    /// Smoothing stage settings.
    #[serde(default)]
    pub smoothing: SmoothingToml,

    /// Resampler settings.
    #[serde(default)]
    pub resample: ResampleToml,

    /// Output settings.
    #[serde(default)]
    pub io: IoToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Start of the span, `dd.mm.yyyy` or `dd.mm.yy`, optional `HH:MM[:SS]`.
    pub start: String,
    /// End of the span, inclusive, same formats as `start`.
    pub end: String,
    /// Measurement interval in hours. 0 means a single instant.
    #[serde(default = "default_interval_hours")]
    pub interval_hours: f64,
    /// Monitoring station identifiers, unique, in output order.
    pub stations: Vec<String>,
}

fn default_interval_hours() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_baseline")]
    pub baseline: f64,
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    #[serde(default = "default_period")]
    pub period: f64,
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    #[serde(default = "default_phase")]
    pub phase: f64,
    #[serde(default = "default_rise_time")]
    pub rise_time: f64,
    #[serde(default = "default_decay_time")]
    pub decay_time: f64,
    #[serde(default = "default_noise_scale")]
    pub noise_scale: f64,
    #[serde(default)]
    pub trend_per_year: f64,
    #[serde(default)]
    pub waveform_variability: f64,
    #[serde(default)]
    pub secondary_wave_frequency: f64,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
            amplitude: default_amplitude(),
            period: default_period(),
            frequency: default_frequency(),
            phase: default_phase(),
            rise_time: default_rise_time(),
            decay_time: default_decay_time(),
            noise_scale: default_noise_scale(),
            trend_per_year: 0.0,
            waveform_variability: 0.0,
            secondary_wave_frequency: 0.0,
        }
    }
}

fn default_baseline() -> f64 {
    10.0
}
fn default_amplitude() -> f64 {
    0.5
}
fn default_period() -> f64 {
    365.0
}
fn default_frequency() -> f64 {
    1.0
}
fn default_phase() -> f64 {
    60.0
}
fn default_rise_time() -> f64 {
    45.0
}
fn default_decay_time() -> f64 {
    120.0
}
fn default_noise_scale() -> f64 {
    0.05
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SmoothingToml {
    /// Whether the smoothing stage runs at all.
    #[serde(default)]
    pub enabled: bool,
    /// Explicit pass count; unset derives it from the noise scale.
    #[serde(default)]
    pub passes: Option<usize>,
    /// Explicit window width; unset derives it from the noise scale.
    #[serde(default)]
    pub window: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResampleToml {
    #[serde(default = "default_station_spacing")]
    pub station_spacing: f64,
    /// Adds uniform sub-daily jitter of `noise_scale * station_spacing`.
    #[serde(default)]
    pub jitter: bool,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    #[serde(default = "default_progress_every")]
    pub progress_every: usize,
}

impl Default for ResampleToml {
    fn default() -> Self {
        Self {
            station_spacing: default_station_spacing(),
            jitter: false,
            decimals: default_decimals(),
            progress_every: default_progress_every(),
        }
    }
}

fn default_station_spacing() -> f64 {
    0.02
}
fn default_decimals() -> u8 {
    2
}
fn default_progress_every() -> usize {
    200
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Directory the CSV files are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// File name prefix, `<base>_<station>.csv`.
    #[serde(default = "default_base_name")]
    pub base_name: String,
    /// Field delimiter, a single character.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_true")]
    pub decimal_comma: bool,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            base_name: default_base_name(),
            delimiter: default_delimiter(),
            decimal_comma: true,
            timestamp_format: default_timestamp_format(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_base_name() -> String {
    "levels".to_string()
}
fn default_delimiter() -> String {
    ";".to_string()
}
fn default_true() -> bool {
    true
}
fn default_timestamp_format() -> String {
    "%d.%m.%Y %H:%M:%S".to_string()
}
