//! disavow_generator library: builds Google disavow files from link lists
//!
//! Reads spreadsheets, CSVs and text files of backlinks, sorts every entry
//! into IPs, whole domains or specific URLs, drops whitelisted hosts and
//! writes a timestamped disavow file. Earlier disavow files double as the
//! history used to report what is new.
//!
//! # Example
//!
//! ```no_run
//! use disavow_generator::{Config, DisavowEngine};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input_dir: PathBuf::from("data/INGEST"),
//!     output_dir: PathBuf::from("data/OUTPUT"),
//!     ..Default::default()
//! };
//!
//! let report = DisavowEngine::new(&config).process()?;
//! println!("{}: {} entries, {} new",
//!          report.filename, report.stats.total, report.new_entries.counts.total);
//! # Ok(())
//! # }
//! ```

pub mod app;
mod classify;
pub mod config;
mod engine;
mod error_handling;
mod history;
pub mod initialization;
mod source;
mod utils;
mod whitelist;

// Re-export public API
pub use classify::{classify, is_ipv4_literal, normalize_domain, ClassifiedTarget};
pub use config::{Config, LogFormat, LogLevel};
pub use engine::{
    artifact_file_name, categorize, delete_input_file, delete_output_file, list_input_files,
    list_output_files, parse_artifact_counts, read_output_file, render_artifact,
    workspace_stats, write_artifact, ArtifactCounts, CategorizedResult, CategoryCounts,
    DisavowEngine, InputFileInfo, LatestOutput, NewEntries, OutputFileInfo, ProcessReport,
    WorkspaceStats,
};
pub use error_handling::{
    FailureType, IngestionError, InitializationError, ProcessError, ProcessingStats,
};
pub use history::{list_artifacts, load_history, parse_artifact_body};
pub use source::{discover_sources, SourceFile, SourceKind};
pub use whitelist::{
    add_to_whitelist, is_whitelisted, load_whitelist, normalize_whitelist_entry,
    remove_from_whitelist, save_whitelist,
};
