//! Configuration types.
//!
//! This module defines the logging enums shared with the CLI and the
//! library-level `Config` struct handed to the disavow engine.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_WHITELIST_FILE};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Built once at startup and passed by reference to
/// [`DisavowEngine::new`](crate::DisavowEngine::new). The engine never creates
/// these directories; see [`init_workspace`](crate::initialization::init_workspace).
///
/// # Examples
///
/// ```no_run
/// use disavow_generator::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input_dir: PathBuf::from("/srv/disavow/ingest"),
///     output_dir: PathBuf::from("/srv/disavow/output"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the uploaded link lists
    pub input_dir: PathBuf,

    /// Directory receiving generated disavow files
    pub output_dir: PathBuf,

    /// Whitelist file (one domain per line)
    pub whitelist_file: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            whitelist_file: PathBuf::from(DEFAULT_WHITELIST_FILE),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
