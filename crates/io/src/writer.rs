//! Directory-level export orchestration.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::csv_write::{CsvWriterConfig, write_station_csv};
use crate::error::ExportError;
use crate::names::station_file_name;

/// Writes one CSV file per station into `dir` and returns the created paths.
///
/// File names are `<base>_<sanitized-station-id>.csv`. Stations are written
/// in the given order.
///
/// # Errors
///
/// Returns [`ExportError::DirectoryNotFound`] if `dir` does not exist, or
/// the underlying write error of the first station that fails.
pub fn write_csv_dir(
    dir: &Path,
    base: &str,
    stations: &[(String, Vec<(NaiveDateTime, f64)>)],
    config: &CsvWriterConfig,
) -> Result<Vec<PathBuf>, ExportError> {
    if !dir.is_dir() {
        return Err(ExportError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut paths = Vec::with_capacity(stations.len());
    for (k, (id, samples)) in stations.iter().enumerate() {
        let path = dir.join(station_file_name(base, id, k));
        write_station_csv(&path, id, samples, config)?;
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_stations() -> Vec<(String, Vec<(NaiveDateTime, f64)>)> {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        vec![
            ("Br. 1".to_string(), vec![(ts, 10.01)]),
            ("Br. 2".to_string(), vec![(ts, 10.03)]),
        ]
    }

    #[test]
    fn writes_one_file_per_station() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_csv_dir(
            dir.path(),
            "levels",
            &sample_stations(),
            &CsvWriterConfig::new(),
        )
        .unwrap();

        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("levels_Br__1.csv"));
        assert!(paths[1].ends_with("levels_Br__2.csv"));
        for p in &paths {
            assert!(p.exists());
        }
    }

    #[test]
    fn missing_directory_rejected() {
        let err = write_csv_dir(
            Path::new("/nonexistent/poseidon-out"),
            "levels",
            &sample_stations(),
            &CsvWriterConfig::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::DirectoryNotFound { .. }));
    }
}
