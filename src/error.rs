use thiserror::Error;

use crate::output::errors::OutputError;
use crate::report::ReportFormat;
use crate::report::errors::ReportError;
use crate::source::SourceKind;

#[derive(Debug, Error)]
pub enum ReportGenError {
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("Failed to write run statistics: {0}.")]
    Stats(#[source] std::io::Error),

    #[error("While generating {format} report from {source_kind}: {source}")]
    InReport {
        format: ReportFormat,
        source_kind: SourceKind,
        #[source]
        source: ReportError,
    },
}
