//! Application initialization.
//!
//! This module provides:
//! - Logger setup (plain or JSON)
//! - Creation of the input, output and whitelist locations

mod logger;
mod workspace;

// Re-export public API
pub use logger::init_logger_with;
pub use workspace::init_workspace;
