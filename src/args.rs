use crate::output::args::OutputArgs;
use crate::report::args::ReportArgs;
use crate::source::args::SourceArgs;
use clap::Parser;

// Top-level CLI parser. Sub-sections are flattened from sub-Args structs.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    author,
    version,
    about = "Generate PDF and HTML reports from database and file data sources"
)]
pub struct Args {
    #[command(flatten)]
    pub report: ReportArgs,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}
