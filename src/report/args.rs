use clap::Args;

use super::ReportFormat;

/// Report selection for a run.
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT[,FORMAT...]",
        value_enum,
        value_delimiter = ',',
        default_values_t = [ReportFormat::Pdf, ReportFormat::Html],
        help = "Report formats to generate, in run order"
    )]
    pub formats: Vec<ReportFormat>,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            formats: vec![ReportFormat::Pdf, ReportFormat::Html],
        }
    }
}

impl ReportArgs {
    /// Requested formats with repeats removed, first occurrence wins.
    pub fn get_format_list(&self) -> Vec<ReportFormat> {
        let mut seen = Vec::with_capacity(self.formats.len());
        for format in &self.formats {
            if !seen.contains(format) {
                seen.push(*format);
            }
        }
        seen
    }
}
