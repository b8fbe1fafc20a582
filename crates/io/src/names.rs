//! File and sheet name sanitization.

/// Maximum sheet name length imposed by spreadsheet applications.
const MAX_SHEET_NAME_LEN: usize = 31;

/// Builds a per-station CSV file name: `<base>_<sanitized-id>.csv`.
///
/// Non-alphanumeric characters in the station identifier fold to `_`; an
/// identifier that sanitizes to nothing falls back to `Station_<k+1>`.
pub fn station_file_name(base: &str, station_id: &str, station_index: usize) -> String {
    let safe: String = station_id
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if safe.chars().all(|c| c == '_') || safe.is_empty() {
        format!("{base}_Station_{}.csv", station_index + 1)
    } else {
        format!("{base}_{safe}.csv")
    }
}

/// Sanitizes a station identifier into a spreadsheet sheet name.
///
/// Keeps alphanumerics, spaces, underscores, and hyphens; truncates to 31
/// characters; falls back to `Station_<k+1>` when nothing survives.
pub fn sanitize_sheet_name(station_id: &str, station_index: usize) -> String {
    let kept: String = station_id
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_' || *c == '-')
        .collect();
    let trimmed: String = kept.trim().chars().take(MAX_SHEET_NAME_LEN).collect();
    if trimmed.is_empty() {
        format!("Station_{}", station_index + 1)
    } else {
        trimmed
    }
}
