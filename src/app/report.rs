//! User-facing output for the CLI subcommands.
//!
//! Everything here writes to stdout. JSON shapes mirror the responses the
//! web front end consumes.

use anyhow::Result;
use serde::Serialize;

use crate::engine::{InputFileInfo, OutputFileInfo, ProcessReport, WorkspaceStats};
use crate::error_handling::ProcessError;

/// JSON body for a `process` call, successful or not.
#[derive(Debug, Serialize)]
pub struct ProcessResponse<'a> {
    pub success: bool,
    #[serde(flatten)]
    pub report: Option<&'a ProcessReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> ProcessResponse<'a> {
    pub fn from_result(result: &'a Result<ProcessReport, ProcessError>) -> Self {
        match result {
            Ok(report) => Self {
                success: true,
                report: Some(report),
                error: None,
            },
            Err(e) => Self {
                success: false,
                report: None,
                error: Some(e.to_string()),
            },
        }
    }
}

pub fn print_process_json(result: &Result<ProcessReport, ProcessError>) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&ProcessResponse::from_result(result))?
    );
    Ok(())
}

pub fn print_process_report(report: &ProcessReport) {
    let stats = &report.stats;
    let new = &report.new_entries.counts;

    println!("✅ Wrote {}", report.path.display());
    println!(
        "   {} raw entr{} read, {} written ({} IPs, {} domains, {} URLs)",
        report.total_urls_processed,
        if report.total_urls_processed == 1 { "y" } else { "ies" },
        stats.total,
        stats.ips,
        stats.domains,
        stats.urls
    );
    println!(
        "   {} new since earlier files ({} IPs, {} domains, {} URLs)",
        new.total, new.ips, new.domains, new.urls
    );
    if report.skipped_files > 0 {
        println!("   {} unreadable file(s) skipped", report.skipped_files);
    }
}

pub fn print_workspace_stats(stats: &WorkspaceStats, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("Input files:     {}", stats.input_files);
    println!("Disavow files:   {}", stats.output_files);
    println!(
        "Disavowed:       {} IPs, {} domains, {} URLs",
        stats.total_ips, stats.total_domains, stats.total_urls
    );
    println!("Whitelisted:     {}", stats.whitelist_count);
    match &stats.last_output {
        Some(last) => println!(
            "Latest output:   {} ({} bytes, {})",
            last.filename, last.size, last.created
        ),
        None => println!("Latest output:   none"),
    }
    Ok(())
}

pub fn print_input_files(files: &[InputFileInfo]) {
    if files.is_empty() {
        println!("No input files");
        return;
    }
    for file in files {
        println!(
            "{:<5} {:>10}  {}  {}",
            file.kind, file.size, file.modified, file.name
        );
    }
}

pub fn print_output_files(files: &[OutputFileInfo]) {
    if files.is_empty() {
        println!("No disavow files");
        return;
    }
    for file in files {
        println!(
            "{}  {}  {} IPs, {} domains, {} URLs",
            file.created, file.name, file.counts.ips, file.counts.domains, file.counts.urls
        );
    }
}
