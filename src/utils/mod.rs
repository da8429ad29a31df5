//! Small shared helpers.
//!
//! This module provides:
//! - Regex compilation for static patterns
//! - File-name validation for managed directories

mod names;
mod pattern;

pub use names::{is_artifact_name, is_plain_file_name};
pub use pattern::compile_regex_unsafe;
