use super::{DataSource, SourceKind};

/// Data source backed by a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDataSource;

impl DataSource for FileDataSource {
    fn fetch(&self) -> &str {
        "Data from file"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::File
    }
}
