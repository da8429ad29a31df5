//! Main application modules.
//!
//! Statistics logging and report printing used by the CLI binary.

pub mod report;
pub mod statistics;

// Re-export public API
pub use report::{
    print_input_files, print_output_files, print_process_json, print_process_report,
    print_workspace_stats, ProcessResponse,
};
pub use statistics::print_failure_statistics;
