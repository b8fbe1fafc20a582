//! Configuration for station fan-out and sub-daily expansion.

use crate::error::ResampleError;

/// Configuration for the sub-daily resampler.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use poseidon_resample::ResampleConfig;
///
/// let config = ResampleConfig::new()
///     .with_station_spacing(0.05)
///     .with_decimals(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResampleConfig {
    station_spacing: f64,
    jitter_half_width: f64,
    decimals: u8,
    progress_every: usize,
}

impl ResampleConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `station_spacing = 0.02` m, `jitter_half_width = 0.0`
    /// (jitter off), `decimals = 2`, `progress_every = 200`.
    pub fn new() -> Self {
        Self {
            station_spacing: 0.02,
            jitter_half_width: 0.0,
            decimals: 2,
            progress_every: 200,
        }
    }

    /// Sets the offset spacing between adjacent stations, in meters.
    pub fn with_station_spacing(mut self, spacing: f64) -> Self {
        self.station_spacing = spacing;
        self
    }

    /// Sets the half-width of the per-sample uniform jitter, in meters.
    ///
    /// 0 disables jitter.
    pub fn with_jitter_half_width(mut self, half_width: f64) -> Self {
        self.jitter_half_width = half_width;
        self
    }

    /// Sets the number of fractional digits values are rounded to.
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    /// Sets how many emitted samples lie between progress callbacks.
    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }

    // --- Accessors ---

    /// Returns the station offset spacing in meters.
    pub fn station_spacing(&self) -> f64 {
        self.station_spacing
    }

    /// Returns the jitter half-width in meters.
    pub fn jitter_half_width(&self) -> f64 {
        self.jitter_half_width
    }

    /// Returns the rounding precision in fractional digits.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Returns the progress callback cadence in samples.
    pub fn progress_every(&self) -> usize {
        self.progress_every
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::InvalidConfig`] if any value is out of range.
    pub fn validate(&self) -> Result<(), ResampleError> {
        if !self.station_spacing.is_finite() || self.station_spacing < 0.0 {
            return Err(ResampleError::InvalidConfig {
                reason: format!(
                    "station_spacing must be finite and >= 0, got {}",
                    self.station_spacing
                ),
            });
        }
        if !self.jitter_half_width.is_finite() || self.jitter_half_width < 0.0 {
            return Err(ResampleError::InvalidConfig {
                reason: format!(
                    "jitter_half_width must be finite and >= 0, got {}",
                    self.jitter_half_width
                ),
            });
        }
        if self.decimals > 6 {
            return Err(ResampleError::InvalidConfig {
                reason: format!("decimals must be <= 6, got {}", self.decimals),
            });
        }
        if self.progress_every == 0 {
            return Err(ResampleError::InvalidConfig {
                reason: "progress_every must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self::new()
    }
}
