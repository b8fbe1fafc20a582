//! # poseidon-timeline
//!
//! Calendar arithmetic for the groundwater generator: inclusive date spans,
//! day indexing, and drift-free sub-daily sample grids.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["start/end datetimes"] -->|"DateSpan::new()"| B["DateSpan"]
//!     B -->|".n_days()"| C["daily series length"]
//!     B -->|"SampleGrid::new()"| D["SampleGrid"]
//!     D -->|".timestamp(i)"| E["i-th measurement time"]
//!     D -->|".n_samples()"| F["samples per station"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use poseidon_timeline::{DateSpan, SampleGrid, parse_datetime_flexible};
//!
//! let start = parse_datetime_flexible("01.01.2024").unwrap();
//! let end = parse_datetime_flexible("02.01.2024").unwrap();
//! let span = DateSpan::new(start, end).unwrap();
//! assert_eq!(span.n_days(), 2);
//!
//! let grid = SampleGrid::new(span, 1.0).unwrap();
//! assert_eq!(grid.n_samples(), 25);
//! ```

mod error;
mod grid;
mod parse;
mod span;

pub use error::TimelineError;
pub use grid::SampleGrid;
pub use parse::parse_datetime_flexible;
pub use span::DateSpan;
