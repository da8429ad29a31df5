//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (artifact naming, patterns, header keywords)
//! - The library `Config` and logging option types
//! - CLI option parsing

mod cli;
mod constants;
mod types;

pub use cli::{Cli, Command, InputsAction, OutputsAction, WhitelistAction};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
