use std::io::{self, Write};

use report_gen::args::Args;
use report_gen::commands;
use report_gen::error::ReportGenError;
use report_gen::report::ReportFormat;
use report_gen::report::args::ReportArgs;
use report_gen::source::SourceKind;
use report_gen::visuals;

#[path = "common/mod.rs"]
mod common;

#[test]
fn default_run_writes_all_four_pairings_in_order() {
    let (lines, stats) = common::run_captured(&Args::default());

    let expected: Vec<&str> = [
        common::PDF_DATABASE,
        common::PDF_FILE,
        common::HTML_DATABASE,
        common::HTML_FILE,
    ]
    .concat();

    assert_eq!(lines.len(), 12);
    assert_eq!(lines, expected);
    assert_eq!(stats.reports_generated(), 4);
    assert_eq!(stats.total_lines(), 12);
}

#[test]
fn parsed_defaults_match_default_args() {
    let args = common::parse_args(&[]);
    assert_eq!(
        args.report.get_format_list(),
        [ReportFormat::Pdf, ReportFormat::Html]
    );
    assert_eq!(
        args.source.get_source_list(),
        [SourceKind::Database, SourceKind::File]
    );
    assert!(!args.output.quiet);
    assert!(args.output.manifest.is_none());
}

#[test]
fn format_and_source_filters_restrict_the_run() {
    let args = common::parse_args(&["--format", "html", "--source", "file"]);
    let (lines, stats) = common::run_captured(&args);

    assert_eq!(lines, common::HTML_FILE);
    assert_eq!(stats.reports_generated(), 1);
}

#[test]
fn cli_order_controls_pairing_order() {
    let args = common::parse_args(&["-f", "html,pdf", "-s", "file,database"]);
    let (lines, _) = common::run_captured(&args);

    let expected: Vec<&str> = [
        common::HTML_FILE,
        common::HTML_DATABASE,
        common::PDF_FILE,
        common::PDF_DATABASE,
    ]
    .concat();
    assert_eq!(lines, expected);
}

#[test]
fn repeated_values_run_once() {
    let args = common::parse_args(&["-f", "pdf,pdf", "-s", "database"]);
    let (lines, stats) = common::run_captured(&args);

    assert_eq!(lines, common::PDF_DATABASE);
    assert_eq!(stats.reports_generated(), 1);
}

#[test]
fn quiet_run_writes_nothing_but_still_counts() {
    let args = common::parse_args(&["--quiet"]);
    let (lines, stats) = common::run_captured(&args);

    assert!(lines.is_empty());
    assert_eq!(stats.reports_generated(), 4);
}

#[test]
fn unknown_format_is_rejected() {
    let argv = ["report-gen", "--format", "docx"];
    assert!(<Args as clap::Parser>::try_parse_from(argv).is_err());
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_names_the_failing_report() {
    let err = commands::run(&Args::default(), &mut FailingWriter).unwrap_err();

    match &err {
        ReportGenError::InReport {
            format,
            source_kind,
            ..
        } => {
            assert_eq!(*format, ReportFormat::Pdf);
            assert_eq!(*source_kind, SourceKind::Database);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("pdf report from database"));
}

#[test]
fn empty_format_selection_generates_nothing() {
    let args = Args {
        report: ReportArgs { formats: vec![] },
        ..Args::default()
    };
    let (lines, stats) = common::run_captured(&args);

    assert!(lines.is_empty());
    assert_eq!(stats.reports_generated(), 0);
    assert_eq!(stats.total_lines(), 0);
}

#[test]
fn recorded_line_counts_match_captured_output() {
    let args = common::parse_args(&["-f", "html", "-s", "database,file"]);
    let (lines, stats) = common::run_captured(&args);

    assert_eq!(stats.total_lines(), lines.len());
    assert!(stats.report_stats.iter().all(|s| s.lines == 3));
}

#[test]
fn quiet_run_still_measures_lines() {
    let args = common::parse_args(&["-q", "-f", "pdf", "-s", "file"]);
    let (lines, stats) = common::run_captured(&args);

    assert!(lines.is_empty());
    assert_eq!(stats.total_lines(), 3);
}

#[test]
fn stats_write_failure_becomes_an_error() {
    let (_, stats) = common::run_captured(&Args::default());

    let err = visuals::print_detailed(&stats, &mut FailingWriter)
        .map_err(ReportGenError::Stats)
        .unwrap_err();

    assert!(matches!(err, ReportGenError::Stats(_)));
    assert!(err.to_string().contains("run statistics"));
}
