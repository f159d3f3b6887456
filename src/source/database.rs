use super::{DataSource, SourceKind};

/// Data source backed by the database.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseDataSource;

impl DataSource for DatabaseDataSource {
    fn fetch(&self) -> &str {
        "Data from database"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Database
    }
}
