//! # poseidon-model
//!
//! Stochastic groundwater-level series synthesis: an equilibrium-seeking
//! random walk with deterministic seasonal forcing.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["ModelParameters"] -->|"generate_daily()"| B["DailySeries"]
//!     B -->|"smooth_series()"| C["smoothed DailySeries"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use poseidon_model::{ModelParameters, generate_daily};
//!
//! let params = ModelParameters::new()
//!     .with_baseline(12.0)
//!     .with_amplitude(1.0)
//!     .with_noise_scale(0.12);
//! let mut rng = StdRng::seed_from_u64(42);
//! let series = generate_daily(&params, 1000, &mut rng);
//! assert_eq!(series.len(), 1000);
//! ```

mod params;
mod series;
mod smooth;

pub use params::ModelParameters;
pub use series::{DailySeries, generate_daily};
pub use smooth::{SmoothingConfig, smooth_series};
