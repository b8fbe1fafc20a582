//! Error types for poseidon-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the poseidon-io crate.
///
/// Covers file-system failures and CSV serialization errors; the writer
/// boundary is fallible by design and callers must not assume file-system
/// success.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Returned when the output directory does not exist.
    #[error("output directory not found: {}", path.display())]
    DirectoryNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an I/O error from the file system.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a writer configuration value is out of range.
    #[error("invalid writer config: {reason}")]
    InvalidConfig {
        /// Human-readable description of the rejected value.
        reason: String,
    },
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io {
            reason: e.to_string(),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_directory_not_found() {
        let err = ExportError::DirectoryNotFound {
            path: PathBuf::from("/tmp/missing"),
        };
        assert_eq!(err.to_string(), "output directory not found: /tmp/missing");
    }

    #[test]
    fn display_io() {
        let err = ExportError::Io {
            reason: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "io error: disk full");
    }

    #[test]
    fn display_csv() {
        let err = ExportError::Csv {
            reason: "bad record".to_string(),
        };
        assert_eq!(err.to_string(), "csv error: bad record");
    }

    #[test]
    fn display_invalid_config() {
        let err = ExportError::InvalidConfig {
            reason: "delimiter must be a single byte".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid writer config: delimiter must be a single byte"
        );
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<ExportError>();
    }
}
