//! Error types for the poseidon-timeline crate.

use chrono::NaiveDateTime;

/// Error type for all fallible operations in the poseidon-timeline crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    /// Returned when the end of a span precedes its start.
    #[error("end {end} precedes start {start}")]
    EndBeforeStart {
        /// Start of the requested span.
        start: NaiveDateTime,
        /// End of the requested span.
        end: NaiveDateTime,
    },

    /// Returned when a sampling interval is negative or not a number.
    #[error("invalid interval: {hours} hours (must be finite and >= 0)")]
    InvalidInterval {
        /// The rejected interval in hours.
        hours: f64,
    },

    /// Returned when a date string matches none of the accepted formats.
    #[error("invalid date '{input}': expected dd.mm.yy or dd.mm.yyyy, optionally with HH:MM[:SS]")]
    InvalidDate {
        /// The rejected input string.
        input: String,
    },
}
