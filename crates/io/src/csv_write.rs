//! Per-station CSV serialization.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::ExportError;

/// Configuration for CSV output.
///
/// Defaults match the legacy import format of the downstream database:
/// `;` delimiter, `dd.mm.yyyy HH:MM:SS` timestamps, two fractional digits
/// with a decimal comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvWriterConfig {
    delimiter: u8,
    timestamp_format: String,
    decimals: u8,
    decimal_comma: bool,
}

impl CsvWriterConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `delimiter = b';'`, `timestamp_format = "%d.%m.%Y %H:%M:%S"`,
    /// `decimals = 2`, `decimal_comma = true`.
    pub fn new() -> Self {
        Self {
            delimiter: b';',
            timestamp_format: "%d.%m.%Y %H:%M:%S".to_string(),
            decimals: 2,
            decimal_comma: true,
        }
    }

    /// Sets the field delimiter byte.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the chrono format string for timestamps.
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Sets the number of fractional digits written per value.
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    /// Sets whether values use a decimal comma instead of a point.
    pub fn with_decimal_comma(mut self, yes: bool) -> Self {
        self.decimal_comma = yes;
        self
    }

    /// Returns the field delimiter byte.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the timestamp format string.
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Returns the number of fractional digits.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Returns `true` if values use a decimal comma.
    pub fn decimal_comma(&self) -> bool {
        self.decimal_comma
    }

    /// Formats a single value according to this configuration.
    pub(crate) fn format_value(&self, value: f64) -> String {
        let s = format!("{value:.prec$}", prec = usize::from(self.decimals));
        if self.decimal_comma {
            s.replace('.', ",")
        } else {
            s
        }
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidConfig`] if `decimals` exceeds 6 or the
    /// delimiter collides with the decimal comma.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.decimals > 6 {
            return Err(ExportError::InvalidConfig {
                reason: format!("decimals must be <= 6, got {}", self.decimals),
            });
        }
        if self.decimal_comma && self.delimiter == b',' {
            return Err(ExportError::InvalidConfig {
                reason: "comma delimiter conflicts with decimal comma values".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CsvWriterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes one station's samples to a CSV file.
///
/// Rows are `station;timestamp;value` under a `Station;Timestamp;Value`
/// header, in sample order.
///
/// # Errors
///
/// Returns [`ExportError::InvalidConfig`] for a bad configuration and
/// [`ExportError::Csv`]/[`ExportError::Io`] if serialization or file I/O
/// fails.
pub fn write_station_csv(
    path: &Path,
    station_id: &str,
    samples: &[(NaiveDateTime, f64)],
    config: &CsvWriterConfig,
) -> Result<(), ExportError> {
    config.validate()?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter())
        .from_path(path)?;

    writer.write_record(["Station", "Timestamp", "Value"])?;
    for &(ts, value) in samples {
        let timestamp = ts.format(config.timestamp_format()).to_string();
        let value = config.format_value(value);
        writer.write_record([station_id, timestamp.as_str(), value.as_str()])?;
    }
    writer.flush().map_err(ExportError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = CsvWriterConfig::new();
        assert_eq!(config.delimiter(), b';');
        assert_eq!(config.timestamp_format(), "%d.%m.%Y %H:%M:%S");
        assert_eq!(config.decimals(), 2);
        assert!(config.decimal_comma());
    }

    #[test]
    fn builder_methods() {
        let config = CsvWriterConfig::new()
            .with_delimiter(b'\t')
            .with_timestamp_format("%Y-%m-%d %H:%M")
            .with_decimals(3)
            .with_decimal_comma(false);
        assert_eq!(config.delimiter(), b'\t');
        assert_eq!(config.timestamp_format(), "%Y-%m-%d %H:%M");
        assert_eq!(config.decimals(), 3);
        assert!(!config.decimal_comma());
    }

    #[test]
    fn format_value_decimal_comma() {
        let config = CsvWriterConfig::new();
        assert_eq!(config.format_value(10.5), "10,50");
        assert_eq!(config.format_value(-0.125), "-0,12");
    }

    #[test]
    fn format_value_decimal_point() {
        let config = CsvWriterConfig::new().with_decimal_comma(false);
        assert_eq!(config.format_value(10.5), "10.50");
    }

    #[test]
    fn format_value_zero_decimals() {
        let config = CsvWriterConfig::new().with_decimals(0);
        assert_eq!(config.format_value(10.5), "10");
    }

    #[test]
    fn validate_ok() {
        assert!(CsvWriterConfig::new().validate().is_ok());
    }

    #[test]
    fn validate_too_many_decimals() {
        let err = CsvWriterConfig::new().with_decimals(9).validate().unwrap_err();
        assert!(matches!(err, ExportError::InvalidConfig { .. }));
    }

    #[test]
    fn validate_comma_delimiter_with_comma_values() {
        let err = CsvWriterConfig::new()
            .with_delimiter(b',')
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("decimal comma"));
    }

    #[test]
    fn validate_comma_delimiter_with_point_values() {
        assert!(
            CsvWriterConfig::new()
                .with_delimiter(b',')
                .with_decimal_comma(false)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn config_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CsvWriterConfig>();
    }
}
