//! # poseidon-io
//!
//! Export writing for the groundwater generator: semicolon-delimited CSV
//! files (one per station) with day-first timestamps and decimal-comma
//! values, plus the name sanitization rules shared with spreadsheet hosts.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use poseidon_io::{CsvWriterConfig, write_station_csv};
//!
//! let samples = vec![];
//! write_station_csv(
//!     Path::new("levels_Br_1.csv"),
//!     "Br. 1",
//!     &samples,
//!     &CsvWriterConfig::new(),
//! )?;
//! # Ok::<(), poseidon_io::ExportError>(())
//! ```

mod csv_write;
mod error;
mod names;
mod writer;

pub use csv_write::{CsvWriterConfig, write_station_csv};
pub use error::ExportError;
pub use names::{sanitize_sheet_name, station_file_name};
pub use writer::write_csv_dir;
