use std::path::PathBuf;

use clap::Args;

/// Output configuration for a run.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write a JSON manifest of the generated reports.
    #[arg(
        long,
        value_name = "FILE",
        help = "Write a JSON manifest of the generated reports to FILE"
    )]
    pub manifest: Option<PathBuf>,

    /// Show run statistics after the reports.
    #[arg(long, help = "Show run statistics after the reports")]
    pub stats: bool,

    /// Suppress report output.
    #[arg(short = 'q', long, help = "Suppress report output")]
    pub quiet: bool,
}
