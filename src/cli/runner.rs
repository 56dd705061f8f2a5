//! CLI runner - one extraction run per invocation

use crate::cli::commands::Cli;
use crate::config::{Credentials, FetchConfig};
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::output::{default_columns, observed_columns, write_table_to_csv, CsvWriterConfig, Table};
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run one extraction
    pub async fn run(&self) -> Result<()> {
        // Credentials are resolved before any network activity so a
        // missing key fails fast with a configuration error.
        let credentials = Credentials::from_env()?;
        let config = self.fetch_config();

        let fetcher = Fetcher::new(config, credentials)?;
        let results = fetcher.fetch_all().await?;

        let columns = if self.cli.all_columns {
            observed_columns(results.records())
        } else {
            default_columns()
        };
        let table = Table::from_records(results.records(), columns);

        match &self.cli.output {
            Some(path) => {
                let writer_config = CsvWriterConfig::new().with_delimiter(self.delimiter()?);
                let rows = write_table_to_csv(path, &table, Some(&writer_config))?;
                info!("wrote {rows} rows to {}", path.display());
                println!("{rows} rows written to {}", path.display());
            }
            None => {
                println!(
                    "{} rows, {} columns: {}",
                    table.len(),
                    table.columns().len(),
                    table.columns().join(", ")
                );
            }
        }

        Ok(())
    }

    fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig::new()
            .with_base_url(&self.cli.base_url)
            .with_endpoint(&self.cli.endpoint)
            .with_page_size(self.cli.page_size)
            .with_timeout(Duration::from_secs(self.cli.timeout_secs));

        if let Some(max) = self.cli.max_records {
            config = config.with_max_records(max);
        }
        if let Some(since) = &self.cli.modified_since {
            config = config.with_modified_since(since);
        }

        config
    }

    fn delimiter(&self) -> Result<u8> {
        if self.cli.delimiter.is_ascii() {
            Ok(self.cli.delimiter as u8)
        } else {
            Err(Error::config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.cli.delimiter
            )))
        }
    }
}
