//! Error type definitions.
//!
//! This module defines the error enums used across the pipeline and the
//! failure categories counted while a run degrades around bad files.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error creating one of the working directories.
    #[error("Failed to create directory {}: {source}", path.display())]
    WorkspaceError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to read a single source or history file.
///
/// These never abort a run: the caller logs them, counts them in
/// [`ProcessingStats`](super::ProcessingStats) and moves on to the next file.
#[derive(Error, Debug)]
pub enum IngestionError {
    /// The file could not be opened or read (including invalid UTF-8).
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV header row could not be parsed.
    #[error("Failed to parse CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The workbook could not be opened or its first sheet decoded.
    #[error("Failed to parse spreadsheet {}: {source}", path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The workbook has no worksheet at all.
    #[error("Spreadsheet {} contains no worksheets", .0.display())]
    EmptyWorkbook(PathBuf),
}

impl IngestionError {
    /// Maps the error onto the counter it is tallied under.
    pub fn failure_type(&self) -> FailureType {
        match self {
            IngestionError::Io { .. } => FailureType::SourceRead,
            IngestionError::Csv { .. }
            | IngestionError::Spreadsheet { .. }
            | IngestionError::EmptyWorkbook(_) => FailureType::SourceParse,
        }
    }
}

/// Errors returned by [`DisavowEngine::process`](crate::DisavowEngine::process).
#[derive(Error, Debug)]
pub enum ProcessError {
    /// No source file produced a single raw URL; nothing was written.
    #[error("No URLs found in input files")]
    NoUrlsFound,

    /// The disavow file could not be written.
    #[error("Failed to write disavow file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Categories of per-file failures tracked during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureType {
    SourceRead,  // input file unreadable
    SourceParse, // input file readable but not parseable
    HistoryRead, // earlier disavow file unreadable
}

impl std::fmt::Display for FailureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureType::SourceRead => "Input file read error",
            FailureType::SourceParse => "Input file parse error",
            FailureType::HistoryRead => "Disavow history read error",
        }
    }
}
