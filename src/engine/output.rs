//! Disavow file generation.
//!
//! Renders a [`CategorizedResult`] in the layout accepted by Google Search
//! Console's disavow tool and writes it under a fresh, collision-free name.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::debug;
use serde::Serialize;

use crate::config::{
    ARTIFACT_HEADER_TIMESTAMP_FORMAT, ARTIFACT_NAME_TIMESTAMP_FORMAT, ARTIFACT_PREFIX,
    ARTIFACT_SUFFIX, DOMAIN_DIRECTIVE, SECTION_RULE,
};
use crate::error_handling::ProcessError;

use super::CategorizedResult;

/// Attempts at finding an unused file name before giving up.
const MAX_NAME_ATTEMPTS: usize = 5;

/// Per-category counts read back from a disavow file header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactCounts {
    pub ips: usize,
    pub domains: usize,
    pub urls: usize,
}

/// Builds `disavow_<8 hex>_<YYYYMMDD_HHMMSS>.txt`.
pub fn artifact_file_name(id: u32, generated: &NaiveDateTime) -> String {
    format!(
        "{}{:08x}_{}{}",
        ARTIFACT_PREFIX,
        id,
        generated.format(ARTIFACT_NAME_TIMESTAMP_FORMAT),
        ARTIFACT_SUFFIX
    )
}

/// Renders the full disavow file content.
///
/// Sections appear only when non-empty, always in IP, domain, URL order, and
/// each is sorted (the sets are already ordered).
pub fn render_artifact(result: &CategorizedResult, generated: &NaiveDateTime) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "# Disavow File - Generated by Disavow Generator");
    let _ = writeln!(
        out,
        "# Generated: {}",
        generated.format(ARTIFACT_HEADER_TIMESTAMP_FORMAT)
    );
    let _ = writeln!(out, "# Total entries: {}", result.total());
    let _ = writeln!(out, "#   - IPs: {}", result.ips.len());
    let _ = writeln!(out, "#   - Domains: {}", result.domains.len());
    let _ = writeln!(out, "#   - Specific URLs: {}", result.urls.len());
    out.push_str("#\n");
    out.push_str("# Upload this file to Google Search Console:\n");
    out.push_str("# https://search.google.com/search-console/disavow-links\n");
    out.push('\n');

    if !result.ips.is_empty() {
        push_section_title(&mut out, "IPs");
        for ip in &result.ips {
            let _ = writeln!(out, "{DOMAIN_DIRECTIVE}{ip}");
        }
        out.push('\n');
    }

    if !result.domains.is_empty() {
        push_section_title(&mut out, "DOMAINS");
        for domain in &result.domains {
            let _ = writeln!(out, "{DOMAIN_DIRECTIVE}{domain}");
        }
        out.push('\n');
    }

    if !result.urls.is_empty() {
        push_section_title(&mut out, "SPECIFIC URLs");
        for url in &result.urls {
            out.push_str(url);
            out.push('\n');
        }
    }

    out
}

fn push_section_title(out: &mut String, title: &str) {
    out.push_str(SECTION_RULE);
    out.push('\n');
    out.push_str("# ");
    out.push_str(title);
    out.push('\n');
    out.push_str(SECTION_RULE);
    out.push('\n');
}

/// Writes a new disavow file into `dir` and returns its path.
///
/// The file is opened with create-new semantics; on the unlikely clash with
/// an existing name a fresh random id is drawn. Existing files are never
/// overwritten.
pub fn write_artifact(
    dir: &Path,
    result: &CategorizedResult,
    generated: &NaiveDateTime,
) -> Result<PathBuf, ProcessError> {
    let content = render_artifact(result, generated);

    let mut attempt = 0;
    loop {
        attempt += 1;
        let path = dir.join(artifact_file_name(rand::random::<u32>(), generated));
        let file = OpenOptions::new().write(true).create_new(true).open(&path);

        match file {
            Ok(mut file) => {
                file.write_all(content.as_bytes())
                    .and_then(|_| file.sync_all())
                    .map_err(|source| ProcessError::Write {
                        path: path.clone(),
                        source,
                    })?;
                debug!("Wrote {} bytes to {}", content.len(), path.display());
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists && attempt < MAX_NAME_ATTEMPTS => {
                debug!("{} already exists, drawing a new id", path.display());
            }
            Err(source) => return Err(ProcessError::Write { path, source }),
        }
    }
}

/// Reads the per-category counts from a disavow file header.
///
/// Parsing stops at the first non-comment line; missing or malformed counts
/// read as zero.
pub fn parse_artifact_counts(content: &str) -> ArtifactCounts {
    let mut counts = ArtifactCounts::default();

    for line in content.lines() {
        if !line.starts_with('#') {
            break;
        }
        let parse = |prefix: &str| {
            line.strip_prefix(prefix)
                .and_then(|v| v.trim().parse::<usize>().ok())
        };
        if let Some(n) = parse("#   - IPs:") {
            counts.ips = n;
        } else if let Some(n) = parse("#   - Domains:") {
            counts.domains = n;
        } else if let Some(n) = parse("#   - Specific URLs:") {
            counts.urls = n;
        }
    }

    counts
}
