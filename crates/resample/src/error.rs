//! Error types for the poseidon-resample crate.

/// Error type for all fallible operations in the poseidon-resample crate.
///
/// Every variant is raised during validation, before any series expansion
/// starts, so partial output is never produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResampleError {
    /// Returned when the station list is empty.
    #[error("no stations given")]
    EmptyStationList,

    /// Returned when a station identifier appears more than once.
    #[error("duplicate station identifier: {name:?}")]
    DuplicateStation {
        /// The first identifier seen twice.
        name: String,
    },

    /// Returned when a configuration value is out of range.
    #[error("invalid resample config: {reason}")]
    InvalidConfig {
        /// Human-readable description of the rejected value.
        reason: String,
    },
}
