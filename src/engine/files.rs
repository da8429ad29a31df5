//! Input and output file management.
//!
//! Listings, preview and deletion for the two managed directories. Names
//! are always plain file names resolved inside the managed directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use log::info;
use serde::Serialize;

use crate::history::list_artifacts;
use crate::source::{discover_sources, SourceKind};
use crate::utils::{is_artifact_name, is_plain_file_name};

use super::output::{parse_artifact_counts, ArtifactCounts};

#[derive(Debug, Clone, Serialize)]
pub struct InputFileInfo {
    pub name: String,
    pub size: u64,
    /// Local modification time, `YYYY-MM-DDTHH:MM:SS`
    pub modified: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputFileInfo {
    pub name: String,
    pub size: u64,
    /// Local modification time, `YYYY-MM-DDTHH:MM:SS`
    pub created: String,
    #[serde(flatten)]
    pub counts: ArtifactCounts,
}

pub(crate) fn format_mtime(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lists supported input files, newest first.
pub fn list_input_files(dir: &Path) -> Result<Vec<InputFileInfo>> {
    let sources = discover_sources(dir)
        .with_context(|| format!("Failed to list input directory {}", dir.display()))?;

    let mut files: Vec<(SystemTime, InputFileInfo)> = sources
        .into_iter()
        .filter_map(|source| {
            let meta = fs::metadata(&source.path).ok()?;
            let modified = meta.modified().ok()?;
            Some((
                modified,
                InputFileInfo {
                    name: file_name_of(&source.path),
                    size: meta.len(),
                    modified: format_mtime(modified),
                    kind: source.kind,
                },
            ))
        })
        .collect();

    files.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.name.cmp(&b.1.name)));
    Ok(files.into_iter().map(|(_, info)| info).collect())
}

/// Lists generated disavow files with their header counts, newest first.
pub fn list_output_files(dir: &Path) -> Result<Vec<OutputFileInfo>> {
    if !dir.is_dir() {
        bail!("Output directory {} does not exist", dir.display());
    }

    let mut files: Vec<(SystemTime, OutputFileInfo)> = list_artifacts(dir)
        .into_iter()
        .filter_map(|path| {
            let meta = fs::metadata(&path).ok()?;
            let modified = meta.modified().ok()?;
            let counts = fs::read_to_string(&path)
                .map(|content| parse_artifact_counts(&content))
                .unwrap_or_default();
            Some((
                modified,
                OutputFileInfo {
                    name: file_name_of(&path),
                    size: meta.len(),
                    created: format_mtime(modified),
                    counts,
                },
            ))
        })
        .collect();

    files.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.name.cmp(&b.1.name)));
    Ok(files.into_iter().map(|(_, info)| info).collect())
}

fn resolve_output(dir: &Path, name: &str) -> Result<PathBuf> {
    if !is_plain_file_name(name) || !is_artifact_name(name) {
        bail!("Invalid disavow file name: {name}");
    }
    Ok(dir.join(name))
}

/// Returns the content of a generated disavow file.
pub fn read_output_file(dir: &Path, name: &str) -> Result<String> {
    let path = resolve_output(dir, name)?;
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Deletes a generated disavow file. Its entries drop out of the history.
pub fn delete_output_file(dir: &Path, name: &str) -> Result<()> {
    let path = resolve_output(dir, name)?;
    fs::remove_file(&path).with_context(|| format!("Failed to delete {}", path.display()))?;
    info!("Deleted disavow file {}", path.display());
    Ok(())
}

/// Deletes an uploaded input file.
pub fn delete_input_file(dir: &Path, name: &str) -> Result<()> {
    if !is_plain_file_name(name) {
        bail!("Invalid input file name: {name}");
    }
    let path = dir.join(name);
    if SourceKind::from_path(&path).is_none() {
        bail!("Not a supported input file: {name}");
    }
    fs::remove_file(&path).with_context(|| format!("Failed to delete {}", path.display()))?;
    info!("Deleted input file {}", path.display());
    Ok(())
}
