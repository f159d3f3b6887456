#![allow(dead_code)]

use std::fs;

use clap::Parser;
use report_gen::args::Args;
use report_gen::commands::{self, stats::RunStats};

pub const PDF_DATABASE: [&str; 3] = [
    "Fetching data: Data from database",
    "Formatting PDF Report",
    "Printing report",
];

pub const PDF_FILE: [&str; 3] = [
    "Fetching data: Data from file",
    "Formatting PDF Report",
    "Printing report",
];

pub const HTML_DATABASE: [&str; 3] = [
    "Fetching data: Data from database",
    "Formatting HTML Report",
    "Printing report",
];

pub const HTML_FILE: [&str; 3] = [
    "Fetching data: Data from file",
    "Formatting HTML Report",
    "Printing report",
];

pub fn ensure_out_dir() {
    fs::create_dir_all("out").unwrap();
}

pub fn parse_args(extra: &[&str]) -> Args {
    let argv = std::iter::once("report-gen").chain(extra.iter().copied());
    Args::try_parse_from(argv).expect("args parse")
}

/// Runs the driver and returns the captured stdout lines alongside the stats.
pub fn run_captured(args: &Args) -> (Vec<String>, RunStats) {
    let mut buf: Vec<u8> = Vec::new();
    let stats = commands::run(args, &mut buf).expect("run succeeds");
    let text = String::from_utf8(buf).expect("utf8 output");
    (text.lines().map(str::to_string).collect(), stats)
}

pub fn render_lines(buf: Vec<u8>) -> Vec<String> {
    String::from_utf8(buf)
        .expect("utf8 output")
        .lines()
        .map(str::to_string)
        .collect()
}
