pub mod args;
mod database;
mod file;

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

pub use database::DatabaseDataSource;
pub use file::FileDataSource;

/// Which backing store a data source reads from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Database,
    File,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Database => f.write_str("database"),
            SourceKind::File => f.write_str("file"),
        }
    }
}

/// Trait for data sources that hand report data to a report.
pub trait DataSource {
    /// Retrieves the source's data. Always the same string for a given source.
    fn fetch(&self) -> &str;

    /// The tag of this source.
    fn kind(&self) -> SourceKind;
}

/// Creates a data source for the given kind.
pub fn create_data_source(kind: SourceKind) -> Box<dyn DataSource> {
    match kind {
        SourceKind::Database => Box::new(DatabaseDataSource),
        SourceKind::File => Box::new(FileDataSource),
    }
}
