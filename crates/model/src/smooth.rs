//! Repeated moving-average smoothing for the daily series.

use crate::series::DailySeries;

/// Configuration for the optional smoothing stage.
///
/// The defaults derive both knobs from the model's noise scale: higher noise
/// means fewer passes and a narrower window, so high-noise curves keep their
/// wilder character.
///
/// # Example
///
/// ```
/// use poseidon_model::SmoothingConfig;
///
/// let config = SmoothingConfig::from_noise_scale(0.12);
/// assert!(config.passes() >= 1);
/// assert!(config.window() % 2 == 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmoothingConfig {
    passes: usize,
    window: usize,
}

impl SmoothingConfig {
    /// Creates a configuration with an explicit pass count and window width.
    ///
    /// A zero pass count is kept as given (the stage becomes a no-op); the
    /// window is forced odd and at least 1 when applied.
    pub fn new(passes: usize, window: usize) -> Self {
        Self { passes, window }
    }

    /// Derives passes and window from the model noise scale.
    ///
    /// `passes = clamp(floor(4 - 3*noise_scale), 1, 4)` and
    /// `window = clamp(floor(17*(1 - 0.7*noise_scale)), 3, 23)` forced odd.
    pub fn from_noise_scale(noise_scale: f64) -> Self {
        let ns = if noise_scale.is_finite() {
            noise_scale.max(0.0)
        } else {
            0.0
        };
        let passes = (4.0 - 3.0 * ns).floor().clamp(1.0, 4.0) as usize;
        let mut window = (17.0 * (1.0 - 0.7 * ns)).floor().clamp(3.0, 23.0) as usize;
        if window % 2 == 0 {
            window += 1;
        }
        Self { passes, window }
    }

    /// Sets the number of sequential passes.
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    /// Sets the window width (forced odd when applied).
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Returns the number of passes.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns the configured window width.
    pub fn window(&self) -> usize {
        self.window
    }
}

/// Applies repeated centered moving-average passes to a daily series.
///
/// Each pass replaces every value with the mean of a centered window clipped
/// to the array bounds; the window width is forced odd. Pure function of the
/// input series and the configuration, with no randomness.
pub fn smooth_series(series: &DailySeries, config: &SmoothingConfig) -> DailySeries {
    let n = series.len();
    if n == 0 || config.passes == 0 {
        return series.clone();
    }

    let window = config.window.max(1) | 1;
    let half = window / 2;

    let mut current = series.as_slice().to_vec();
    let mut next = vec![0.0; n];
    for _ in 0..config.passes {
        for i in 0..n {
            let start = i.saturating_sub(half);
            let end = (i + half + 1).min(n);
            next[i] = poseidon_stats::mean(&current[start..end]);
        }
        std::mem::swap(&mut current, &mut next);
    }

    DailySeries::new(current)
}
