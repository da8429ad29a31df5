//! Command-line options.
//!
//! The binary parses these with clap and converts them into a [`Config`];
//! the library itself never reads the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_WHITELIST_FILE};
use crate::config::types::{Config, LogFormat, LogLevel};

/// Command-line options for disavow_generator.
///
/// Path options can also be supplied through the environment (or a `.env`
/// file), which is how the web front end hands them over.
///
/// # Examples
///
/// ```bash
/// # Generate a disavow file from everything in the ingest directory
/// disavow_generator process
///
/// # Same, against custom directories, printing the report as JSON
/// disavow_generator --input-dir ./in --output-dir ./out process --json
///
/// # Exempt a domain
/// disavow_generator whitelist add www.partner-site.com
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "disavow_generator",
    about = "Builds disavow files from spreadsheets, CSVs and text link lists."
)]
pub struct Cli {
    /// Directory holding the uploaded link lists
    #[arg(long, global = true, env = "DISAVOW_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory receiving generated disavow files
    #[arg(long, global = true, env = "DISAVOW_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Whitelist file (one domain per line)
    #[arg(
        long,
        global = true,
        env = "DISAVOW_WHITELIST_FILE",
        default_value = DEFAULT_WHITELIST_FILE
    )]
    pub whitelist_file: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read every input file and write a new disavow file
    Process {
        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show input/output/whitelist counts and the latest output
    Stats {
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or edit the whitelist
    Whitelist {
        #[command(subcommand)]
        action: WhitelistAction,
    },
    /// Manage uploaded input files
    Inputs {
        #[command(subcommand)]
        action: InputsAction,
    },
    /// Manage generated disavow files
    Outputs {
        #[command(subcommand)]
        action: OutputsAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum WhitelistAction {
    /// Print every whitelisted domain
    List,
    /// Add a domain (or IP) to the whitelist
    Add { domain: String },
    /// Remove a domain (or IP) from the whitelist
    Remove { domain: String },
    /// Replace the whole whitelist with the entries of a file
    Replace { file: PathBuf },
}

#[derive(Debug, Subcommand)]
pub enum InputsAction {
    /// List input files, newest first
    List,
    /// Delete an input file
    Rm { name: String },
}

#[derive(Debug, Subcommand)]
pub enum OutputsAction {
    /// List generated disavow files, newest first
    List,
    /// Print a generated disavow file
    Show { name: String },
    /// Delete a generated disavow file
    Rm { name: String },
}

impl Cli {
    /// Builds the library configuration from the parsed options.
    pub fn to_config(&self) -> Config {
        Config {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            whitelist_file: self.whitelist_file.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}
