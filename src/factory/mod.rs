use crate::report::{Report, ReportFormat};
use crate::source::DataSource;

/// Builds reports of one fixed format.
pub trait ReportFactory {
    /// The format every report from this factory has.
    fn format(&self) -> ReportFormat;

    /// Creates a new report bound to `source`.
    fn create_report<'a>(&self, source: &'a dyn DataSource) -> Report<'a>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReportFactory;

impl ReportFactory for PdfReportFactory {
    fn format(&self) -> ReportFormat {
        ReportFormat::Pdf
    }

    fn create_report<'a>(&self, source: &'a dyn DataSource) -> Report<'a> {
        Report::new(source, ReportFormat::Pdf)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReportFactory;

impl ReportFactory for HtmlReportFactory {
    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }

    fn create_report<'a>(&self, source: &'a dyn DataSource) -> Report<'a> {
        Report::new(source, ReportFormat::Html)
    }
}

/// Creates the factory for a report format.
pub fn create_factory(format: ReportFormat) -> Box<dyn ReportFactory> {
    match format {
        ReportFormat::Pdf => Box::new(PdfReportFactory),
        ReportFormat::Html => Box::new(HtmlReportFactory),
    }
}
