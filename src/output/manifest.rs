use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::commands::stats::RunStats;
use crate::output::errors::OutputError;

/// Manifest layout: the per-report entries followed by the run totals.
#[derive(Serialize)]
struct Manifest<'a> {
    #[serde(flatten)]
    stats: &'a RunStats,
    reports_generated: usize,
    total_lines: usize,
}

impl<'a> From<&'a RunStats> for Manifest<'a> {
    fn from(stats: &'a RunStats) -> Self {
        Self {
            stats,
            reports_generated: stats.reports_generated(),
            total_lines: stats.total_lines(),
        }
    }
}

fn file_error(action: &str, path: &Path, e: impl std::fmt::Display) -> OutputError {
    OutputError::FileError(format!("failed to {} {}: {}", action, path.display(), e))
}

/// Writes `stats` as a pretty-printed JSON manifest at `path`.
///
/// Missing parent directories are created.
pub fn write_manifest(path: &Path, stats: &RunStats) -> Result<(), OutputError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| file_error("create directory", dir, e))?;
    }

    let file = File::create(path).map_err(|e| file_error("create manifest", path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &Manifest::from(stats))
        .map_err(|e| file_error("serialize manifest", path, e))?;
    writeln!(writer).map_err(|e| file_error("write manifest", path, e))?;
    writer
        .flush()
        .map_err(|e| file_error("write manifest", path, e))
}
