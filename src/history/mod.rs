//! Disavow history reconstruction.
//!
//! Rebuilds the set of everything ever disavowed by re-reading every
//! `disavow_*.txt` file in the output directory. Nothing is cached: each call
//! costs one pass over all earlier output.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::classify::is_ipv4_literal;
use crate::config::DOMAIN_DIRECTIVE;
use crate::engine::CategorizedResult;
use crate::error_handling::{FailureType, IngestionError, ProcessingStats};
use crate::utils::is_artifact_name;

/// Lists the disavow files in `dir`. An unreadable directory yields nothing.
pub fn list_artifacts(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list output directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut artifacts: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter(|entry| entry.file_name().to_str().is_some_and(is_artifact_name))
        .map(|entry| entry.path())
        .collect();
    artifacts.sort();
    artifacts
}

/// Parses the body of one disavow file into `into`.
///
/// `domain:` lines go to the IP or domain set, `http…` lines to the URL set;
/// comments, blanks and anything else are ignored.
pub fn parse_artifact_body(content: &str, into: &mut CategorizedResult) {
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(target) = line.strip_prefix(DOMAIN_DIRECTIVE) {
            if is_ipv4_literal(target) {
                into.ips.insert(target.to_string());
            } else {
                into.domains.insert(target.to_lowercase());
            }
        } else if line.starts_with("http") {
            into.urls.insert(line.to_string());
        }
    }
}

/// Reads one disavow file into `into`.
pub fn read_artifact(path: &Path, into: &mut CategorizedResult) -> Result<(), IngestionError> {
    let content = fs::read_to_string(path).map_err(|source| IngestionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_artifact_body(&content, into);
    Ok(())
}

/// Reconstructs the cumulative disavow history from every artifact in `dir`.
///
/// Unreadable artifacts are logged, counted under
/// [`FailureType::HistoryRead`] and skipped.
pub fn load_history(dir: &Path, stats: &ProcessingStats) -> CategorizedResult {
    let mut history = CategorizedResult::default();
    let artifacts = list_artifacts(dir);

    for path in &artifacts {
        if let Err(e) = read_artifact(path, &mut history) {
            warn!("Skipping disavow history file: {e}");
            stats.increment(FailureType::HistoryRead);
        }
    }

    debug!(
        "History from {} files: {} IPs, {} domains, {} URLs",
        artifacts.len(),
        history.ips.len(),
        history.domains.len(),
        history.urls.len()
    );
    history
}
