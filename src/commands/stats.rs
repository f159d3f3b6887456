use std::time::Duration;

use serde::Serialize;

use crate::report::ReportFormat;
use crate::source::SourceKind;

#[derive(Debug, Clone, Serialize)]
pub struct ReportStat {
    pub format: ReportFormat,
    pub source: SourceKind,
    pub lines: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    #[serde(rename = "reports")]
    pub report_stats: Vec<ReportStat>,
    #[serde(skip)]
    pub total_duration: Duration,
}

impl RunStats {
    pub fn reports_generated(&self) -> usize {
        self.report_stats.len()
    }

    pub fn total_lines(&self) -> usize {
        self.report_stats.iter().map(|s| s.lines).sum()
    }
}
