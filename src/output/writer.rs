//! Delimited-file writer

use super::table::Table;
use crate::error::Result;
use std::path::Path;

/// Configuration for the CSV writer
#[derive(Debug, Clone)]
pub struct CsvWriterConfig {
    delimiter: u8,
    write_headers: bool,
}

impl Default for CsvWriterConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            write_headers: true,
        }
    }
}

impl CsvWriterConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Disable the header row
    #[must_use]
    pub fn without_headers(mut self) -> Self {
        self.write_headers = false;
        self
    }
}

/// Write a table to a delimited file, returning the number of data rows
///
/// An empty table still writes the header row, so downstream consumers
/// see the column set even for a zero-record run.
pub fn write_table_to_csv(
    path: impl AsRef<Path>,
    table: &Table,
    config: Option<&CsvWriterConfig>,
) -> Result<usize> {
    let default_config = CsvWriterConfig::default();
    let config = config.unwrap_or(&default_config);

    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_path(path.as_ref())?;

    if config.write_headers {
        writer.write_record(table.columns())?;
    }

    for row in table.rows() {
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(table.len())
}
