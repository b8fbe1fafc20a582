//! # poseidon-resample
//!
//! Expands a daily groundwater series into per-station, sub-daily
//! measurement series: one deterministically offset copy of the daily curve
//! per monitoring station, resampled onto the requested timestamp grid.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["DailySeries"] -->|"expand_station()"| B["StationSeries k"]
//!     A -->|"expand_all()"| C["Vec of StationSeries"]
//!     C -->|"progress callback"| D["(emitted, total)"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use poseidon_model::DailySeries;
//! use poseidon_timeline::{DateSpan, SampleGrid, parse_datetime_flexible};
//! use poseidon_resample::{ResampleConfig, expand_all};
//!
//! let series = DailySeries::new(vec![10.0, 10.5]);
//! let span = DateSpan::new(
//!     parse_datetime_flexible("01.01.2024").unwrap(),
//!     parse_datetime_flexible("02.01.2024").unwrap(),
//! ).unwrap();
//! let grid = SampleGrid::new(span, 6.0).unwrap();
//! let ids = vec!["Br. 1".to_string(), "Br. 2".to_string()];
//! let mut rng = StdRng::seed_from_u64(42);
//! let stations = expand_all(
//!     &series, &grid, &ids, &ResampleConfig::new(), &mut rng, |_, _| {},
//! ).unwrap();
//! assert_eq!(stations.len(), 2);
//! ```

mod config;
mod error;
mod expand;
mod result;
mod stations;

pub use config::ResampleConfig;
pub use error::ResampleError;
pub use expand::{expand_all, expand_station};
pub use result::StationSeries;
pub use stations::{station_offset, validate_station_ids};
