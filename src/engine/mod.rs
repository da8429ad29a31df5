//! The disavow engine.
//!
//! Ties the pipeline together: read sources, classify, drop whitelisted
//! entries, diff against history, write a new disavow file.
//!
//! The written file always holds the complete categorized result of the
//! current inputs. The "new entries" diff against earlier files is
//! informational only.

mod files;
mod output;
mod stats;

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::Local;
use log::{info, warn};
use serde::Serialize;

use crate::app::statistics::print_failure_statistics;
use crate::classify::{classify, ClassifiedTarget};
use crate::config::Config;
use crate::error_handling::{ProcessError, ProcessingStats};
use crate::history::load_history;
use crate::source::{discover_sources, read_sources};
use crate::whitelist::{is_whitelisted, load_whitelist};

pub use files::{
    delete_input_file, delete_output_file, list_input_files, list_output_files, read_output_file,
    InputFileInfo, OutputFileInfo,
};
pub use output::{
    artifact_file_name, parse_artifact_counts, render_artifact, write_artifact, ArtifactCounts,
};
pub use stats::{workspace_stats, LatestOutput, WorkspaceStats};

/// IPs, domains and URLs, each deduplicated and kept sorted.
///
/// Used both for the result of a run and for the reconstructed history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorizedResult {
    pub ips: BTreeSet<String>,
    pub domains: BTreeSet<String>,
    pub urls: BTreeSet<String>,
}

impl CategorizedResult {
    /// Files a classified target under its category.
    pub fn insert(&mut self, target: ClassifiedTarget) -> bool {
        match target {
            ClassifiedTarget::Ip(ip) => self.ips.insert(ip),
            ClassifiedTarget::Domain(domain) => self.domains.insert(domain),
            ClassifiedTarget::Url(url) => self.urls.insert(url),
        }
    }

    pub fn total(&self) -> usize {
        self.ips.len() + self.domains.len() + self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Entries of `self` absent from `other`, per category.
    pub fn difference(&self, other: &CategorizedResult) -> CategorizedResult {
        CategorizedResult {
            ips: self.ips.difference(&other.ips).cloned().collect(),
            domains: self.domains.difference(&other.domains).cloned().collect(),
            urls: self.urls.difference(&other.urls).cloned().collect(),
        }
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            ips: self.ips.len(),
            domains: self.domains.len(),
            urls: self.urls.len(),
            total: self.total(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub ips: usize,
    pub domains: usize,
    pub urls: usize,
    pub total: usize,
}

/// Entries of this run that no earlier disavow file contained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewEntries {
    #[serde(flatten)]
    pub counts: CategoryCounts,
    pub list: CategorizedResult,
}

/// Outcome of a successful [`DisavowEngine::process`] call.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    /// File name of the disavow file written by this run
    pub filename: String,
    /// Full path of that file
    #[serde(skip)]
    pub path: PathBuf,
    /// Raw entries read from all inputs, before classification
    pub total_urls_processed: usize,
    /// Counts of what was written
    pub stats: CategoryCounts,
    /// What was not in any earlier disavow file
    pub new_entries: NewEntries,
    /// Input or history files skipped because they could not be read
    pub skipped_files: usize,
}

/// Classifies raw entries into a [`CategorizedResult`], dropping
/// unclassifiable and whitelisted ones. Returns the result and the number of
/// raw entries consumed.
pub fn categorize<I, S>(raw: I, whitelist: &BTreeSet<String>) -> (CategorizedResult, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = CategorizedResult::default();
    let mut seen = 0usize;

    for entry in raw {
        seen += 1;
        let Some(target) = classify(entry.as_ref()) else {
            continue;
        };
        let whitelisted = target
            .host()
            .is_some_and(|host| is_whitelisted(&host, whitelist));
        if whitelisted {
            continue;
        }
        result.insert(target);
    }

    (result, seen)
}

/// Generates disavow files from the configured input directory.
///
/// Holds only the three paths it works on; every call to
/// [`process`](Self::process) re-reads the whitelist, the history and the
/// inputs from disk.
#[derive(Debug, Clone)]
pub struct DisavowEngine {
    input_dir: PathBuf,
    output_dir: PathBuf,
    whitelist_file: PathBuf,
}

impl DisavowEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            input_dir: config.input_dir.clone(),
            output_dir: config.output_dir.clone(),
            whitelist_file: config.whitelist_file.clone(),
        }
    }

    /// Runs the pipeline once and writes one new disavow file.
    ///
    /// # Errors
    ///
    /// - [`ProcessError::NoUrlsFound`] if the inputs hold no raw entries at
    ///   all; nothing is written.
    /// - [`ProcessError::Write`] if the disavow file cannot be created.
    ///
    /// Unreadable input or history files are skipped, not reported as errors.
    pub fn process(&self) -> Result<ProcessReport, ProcessError> {
        let failures = ProcessingStats::new();

        let whitelist = load_whitelist(&self.whitelist_file);
        let history = load_history(&self.output_dir, &failures);

        let sources = discover_sources(&self.input_dir).unwrap_or_else(|e| {
            warn!(
                "Cannot list input directory {}: {}",
                self.input_dir.display(),
                e
            );
            Vec::new()
        });
        info!("Processing {} input files", sources.len());

        let (categorized, total_urls_processed) =
            categorize(read_sources(&sources, &failures), &whitelist);

        print_failure_statistics(&failures);

        if total_urls_processed == 0 {
            warn!("No URLs found in {}", self.input_dir.display());
            return Err(ProcessError::NoUrlsFound);
        }

        let new = categorized.difference(&history);
        let generated = Local::now().naive_local();
        let path = write_artifact(&self.output_dir, &categorized, &generated)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        info!(
            "Wrote {}: {} IPs, {} domains, {} URLs ({} new) from {} raw entries",
            filename,
            categorized.ips.len(),
            categorized.domains.len(),
            categorized.urls.len(),
            new.total(),
            total_urls_processed
        );

        Ok(ProcessReport {
            filename,
            path,
            total_urls_processed,
            stats: categorized.counts(),
            new_entries: NewEntries {
                counts: new.counts(),
                list: new,
            },
            skipped_files: failures.total(),
        })
    }
}
