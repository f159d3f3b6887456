use std::io::{self, Write};
use std::time::Duration;

use crate::commands::stats::RunStats;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{}µs", micros)
    } else {
        format!("{:.2}ms", duration.as_secs_f64() * 1_000.0)
    }
}

/// Writes the run summary and per-report tables to `out`.
pub fn print_detailed(stats: &RunStats, out: &mut dyn Write) -> io::Result<()> {
    let mut summary_table = Table::new();
    summary_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Run Summary")
                .add_attribute(Attribute::Bold)
                .set_alignment(comfy_table::CellAlignment::Left),
            Cell::new(""),
        ]);

    summary_table.add_row(vec!["Run Time", &format_duration(stats.total_duration)]);
    summary_table.add_row(vec![
        "Reports Generated",
        &format!("{}", stats.reports_generated()),
    ]);
    summary_table.add_row(vec!["Lines Written", &format!("{}", stats.total_lines())]);

    writeln!(out, "{summary_table}\n")?;

    let mut detail_table = Table::new();
    detail_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Format").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Lines").add_attribute(Attribute::Bold),
        ]);

    for report in &stats.report_stats {
        detail_table.add_row(vec![
            Cell::new(report.format.label()),
            Cell::new(report.source),
            Cell::new(report.lines),
        ]);
    }

    writeln!(out, "{detail_table}")?;
    out.flush()
}
