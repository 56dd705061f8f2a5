//! CLI argument parsing

use crate::config::DEFAULT_BASE_URL;
use clap::Parser;
use std::path::PathBuf;

/// Extract the character catalog into a tabular dataset
///
/// Credentials are read from the `PUBLIC_KEY` and `PRIVATE_KEY`
/// environment variables.
#[derive(Parser, Debug)]
#[command(name = "comicfetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Write the dataset to this CSV file (prints a summary otherwise)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Records per page (the server maximum is 100)
    #[arg(long, default_value_t = 100)]
    pub page_size: u64,

    /// Stop after this many records
    #[arg(long)]
    pub max_records: Option<usize>,

    /// Catalog API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Resource endpoint under the base URL
    #[arg(long, default_value = "characters")]
    pub endpoint: String,

    /// Only fetch records modified since this ISO-8601 date
    #[arg(long)]
    pub modified_since: Option<String>,

    /// Field delimiter for the output file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Emit every observed field instead of the default character columns
    #[arg(long)]
    pub all_columns: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
