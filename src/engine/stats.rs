//! Workspace statistics.

use std::fs;

use serde::Serialize;

use crate::config::Config;
use crate::error_handling::ProcessingStats;
use crate::history::{list_artifacts, load_history};
use crate::source::discover_sources;
use crate::whitelist::load_whitelist;

use super::files::format_mtime;

/// The most recently modified disavow file.
#[derive(Debug, Clone, Serialize)]
pub struct LatestOutput {
    pub filename: String,
    pub created: String,
    pub size: u64,
}

/// Summary of the input, output and whitelist locations.
///
/// The `total_*` counts are the cumulative history across every disavow
/// file, not the latest file alone.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceStats {
    pub input_files: usize,
    pub output_files: usize,
    pub total_ips: usize,
    pub total_domains: usize,
    pub total_urls: usize,
    pub whitelist_count: usize,
    pub last_output: Option<LatestOutput>,
}

/// Collects workspace statistics. Unreadable locations count as empty.
pub fn workspace_stats(config: &Config) -> WorkspaceStats {
    let input_files = discover_sources(&config.input_dir)
        .map(|s| s.len())
        .unwrap_or(0);
    let artifacts = list_artifacts(&config.output_dir);
    let history = load_history(&config.output_dir, &ProcessingStats::new());
    let whitelist = load_whitelist(&config.whitelist_file);

    let last_output = artifacts
        .iter()
        .filter_map(|path| {
            let meta = fs::metadata(path).ok()?;
            Some((meta.modified().ok()?, meta.len(), path))
        })
        .max_by(|a, b| a.0.cmp(&b.0).then_with(|| a.2.cmp(b.2)))
        .map(|(modified, size, path)| LatestOutput {
            filename: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            created: format_mtime(modified),
            size,
        });

    WorkspaceStats {
        input_files,
        output_files: artifacts.len(),
        total_ips: history.ips.len(),
        total_domains: history.domains.len(),
        total_urls: history.urls.len(),
        whitelist_count: whitelist.len(),
        last_output,
    }
}
