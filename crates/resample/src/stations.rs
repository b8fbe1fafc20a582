//! Station list validation and deterministic offsets.

use std::collections::HashSet;

use crate::error::ResampleError;

/// Validates a caller-supplied station identifier list.
///
/// # Errors
///
/// Returns [`ResampleError::EmptyStationList`] for an empty list and
/// [`ResampleError::DuplicateStation`] naming the first identifier that
/// appears twice. Runs before any generation work.
pub fn validate_station_ids(ids: &[String]) -> Result<(), ResampleError> {
    if ids.is_empty() {
        return Err(ResampleError::EmptyStationList);
    }
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(ResampleError::DuplicateStation { name: id.clone() });
        }
    }
    Ok(())
}

/// Returns the constant level offset of station `k` among `n_stations`.
///
/// Offsets are centered around the station list midpoint:
/// `(k - n/2) * spacing`. The fan-out keeps station curves visually
/// distinguishable; it carries no physical meaning.
pub fn station_offset(k: usize, n_stations: usize, spacing: f64) -> f64 {
    (k as f64 - n_stations as f64 / 2.0) * spacing
}
