use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report output: {0}.")]
    Write(#[from] std::io::Error),
}
