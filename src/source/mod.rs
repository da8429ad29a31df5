//! Source file discovery and reading.
//!
//! Turns the contents of the input directory into raw URL-like strings.
//! Nothing here classifies or validates entries; see [`crate::classify`].
//!
//! Supported kinds, chosen by file extension (case-insensitive):
//! - `xlsx` / `xls` spreadsheets (first worksheet)
//! - `csv` files
//! - `txt` link lists
//!
//! A file that cannot be read is reported as an [`IngestionError`] and
//! skipped by [`read_sources`]; it never aborts a run.

mod tabular;
mod text;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::error_handling::{IngestionError, ProcessingStats};

pub use tabular::{read_csv, read_spreadsheet};
pub use text::{extract_text_entries, read_text};

/// Kind of input file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum SourceKind {
    Xlsx,
    Xls,
    Csv,
    Txt,
}

impl SourceKind {
    /// Returns the kind for a path, or `None` for unsupported extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" => Some(SourceKind::Xlsx),
            "xls" => Some(SourceKind::Xls),
            "csv" => Some(SourceKind::Csv),
            "txt" => Some(SourceKind::Txt),
            _ => None,
        }
    }
}

/// An input file queued for reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub kind: SourceKind,
}

impl SourceFile {
    /// Reads the file into raw entries.
    pub fn read(&self) -> Result<Vec<String>, IngestionError> {
        match self.kind {
            SourceKind::Xlsx | SourceKind::Xls => read_spreadsheet(&self.path),
            SourceKind::Csv => read_csv(&self.path),
            SourceKind::Txt => read_text(&self.path),
        }
    }
}

/// Lists the supported files directly inside `dir`, sorted by name.
///
/// Subdirectories and unsupported extensions are ignored.
pub fn discover_sources(dir: &Path) -> std::io::Result<Vec<SourceFile>> {
    let mut sources: Vec<SourceFile> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| {
            let path = entry.path();
            SourceKind::from_path(&path).map(|kind| SourceFile { path, kind })
        })
        .collect();
    sources.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(sources)
}

/// Lazily reads `sources` in order, yielding every raw entry.
///
/// Files that fail are logged, counted in `stats` and skipped.
pub fn read_sources<'a>(
    sources: &'a [SourceFile],
    stats: &'a ProcessingStats,
) -> impl Iterator<Item = String> + 'a {
    sources
        .iter()
        .filter_map(move |source| match source.read() {
            Ok(entries) => {
                debug!(
                    "Read {} entries from {} ({})",
                    entries.len(),
                    source.path.display(),
                    source.kind
                );
                Some(entries)
            }
            Err(e) => {
                warn!("Skipping input file: {e}");
                stats.increment(e.failure_type());
                None
            }
        })
        .flatten()
}
