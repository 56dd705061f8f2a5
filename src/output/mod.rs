//! Table materialization and CSV export
//!
//! Consumes a completed [`ResultSet`](crate::fetch::ResultSet) and renders
//! it as rows and columns, optionally persisted as a delimited file. The
//! fetch loop never calls into this module; the CLI runner hands the
//! finished records across.

mod table;
mod writer;

pub use table::{default_columns, observed_columns, Table};
pub use writer::{write_table_to_csv, CsvWriterConfig};
