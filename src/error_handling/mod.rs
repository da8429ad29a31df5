//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, ingestion, processing)
//! - Failure statistics for files skipped during a run

mod stats;
mod types;

pub use stats::ProcessingStats;
pub use types::{FailureType, IngestionError, InitializationError, ProcessError};
