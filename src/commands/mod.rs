pub mod stats;

use std::io::{self, Write};
use std::time::Instant;

use tracing::{info, warn};

use crate::args::Args;
use crate::error::ReportGenError;
use crate::factory::{ReportFactory, create_factory};
use crate::output::manifest::write_manifest;
use crate::report::errors::ReportError;
use crate::source::{DataSource, create_data_source};
use stats::{ReportStat, RunStats};

/// Runs every (format, source) pairing and writes the reports to `out`.
///
/// Formats form the outer loop and sources the inner one, both in the order
/// given on the command line.
pub fn run(args: &Args, out: &mut dyn Write) -> Result<RunStats, ReportGenError> {
    let start_time = Instant::now();

    let sources: Vec<Box<dyn DataSource>> = args
        .source
        .get_source_list()
        .into_iter()
        .map(create_data_source)
        .collect();
    let factories: Vec<Box<dyn ReportFactory>> = args
        .report
        .get_format_list()
        .into_iter()
        .map(create_factory)
        .collect();

    if sources.is_empty() || factories.is_empty() {
        warn!("no report format or data source selected, nothing to generate");
    }

    let mut sink = io::sink();
    let target: &mut dyn Write = if args.output.quiet { &mut sink } else { out };

    let mut stats = RunStats::default();
    for factory in &factories {
        for source in &sources {
            let report = factory.create_report(source.as_ref());
            let lines = report
                .generate(&mut *target)
                .map_err(|e| ReportGenError::InReport {
                    format: factory.format(),
                    source_kind: source.kind(),
                    source: e,
                })?;

            stats.report_stats.push(ReportStat {
                format: factory.format(),
                source: source.kind(),
                lines,
            });
        }
    }
    target.flush().map_err(ReportError::from)?;

    stats.total_duration = start_time.elapsed();
    info!(
        reports = stats.reports_generated(),
        lines = stats.total_lines(),
        "run finished"
    );

    if let Some(path) = &args.output.manifest {
        write_manifest(path, &stats)?;
        info!(path = %path.display(), "manifest written");
    }

    Ok(stats)
}
