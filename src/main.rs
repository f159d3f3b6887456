use std::io;

use clap::Parser;

use report_gen::args::Args;
use report_gen::commands;
use report_gen::error::ReportGenError;
use report_gen::logging;
use report_gen::visuals;

fn main() -> Result<(), ReportGenError> {
    let args = Args::parse();
    logging::init();

    let mut out = io::stdout().lock();
    let stats = commands::run(&args, &mut out)?;

    if args.output.stats {
        visuals::print_detailed(&stats, &mut out).map_err(ReportGenError::Stats)?;
    }

    Ok(())
}
