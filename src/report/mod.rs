pub mod args;
pub mod errors;

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use tracing::debug;

use crate::source::DataSource;
use errors::ReportError;

/// Number of lines a single `Report::generate` call writes.
pub const LINES_PER_REPORT: usize = 3;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Html,
}

impl ReportFormat {
    /// Name used in the formatting step, e.g. "PDF".
    pub fn label(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Html => "HTML",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Pdf => f.write_str("pdf"),
            ReportFormat::Html => f.write_str("html"),
        }
    }
}

/// A report bound to one data source for its whole lifetime.
///
/// `generate` always runs fetch, format and print in that order. Only the
/// format step depends on the report's format.
pub struct Report<'a> {
    source: &'a dyn DataSource,
    format: ReportFormat,
}

impl<'a> Report<'a> {
    pub fn new(source: &'a dyn DataSource, format: ReportFormat) -> Self {
        Self { source, format }
    }

    pub fn source(&self) -> &'a dyn DataSource {
        self.source
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Writes the report to `out` and returns the number of lines written.
    pub fn generate(&self, out: &mut dyn Write) -> Result<usize, ReportError> {
        debug!(format = %self.format, source = %self.source.kind(), "generating report");
        let mut out = LineCounter::new(out);
        self.fetch_data(&mut out)?;
        self.format_report(&mut out)?;
        self.print_report(&mut out)?;
        Ok(out.lines)
    }

    fn fetch_data(&self, out: &mut dyn Write) -> Result<(), ReportError> {
        writeln!(out, "Fetching data: {}", self.source.fetch())?;
        Ok(())
    }

    fn format_report(&self, out: &mut dyn Write) -> Result<(), ReportError> {
        writeln!(out, "Formatting {} Report", self.format.label())?;
        Ok(())
    }

    fn print_report(&self, out: &mut dyn Write) -> Result<(), ReportError> {
        writeln!(out, "Printing report")?;
        Ok(())
    }
}

/// Counts newlines in the bytes the inner writer accepted.
struct LineCounter<'w> {
    inner: &'w mut dyn Write,
    lines: usize,
}

impl<'w> LineCounter<'w> {
    fn new(inner: &'w mut dyn Write) -> Self {
        Self { inner, lines: 0 }
    }
}

impl Write for LineCounter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.lines += buf[..written].iter().filter(|&&b| b == b'\n').count();
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
