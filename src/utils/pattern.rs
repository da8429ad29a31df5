//! Regex compilation helpers.

use regex::Regex;

/// Compiles a regex pattern that must succeed (for compile-time constants).
///
/// This function panics if compilation fails, which is appropriate for static
/// patterns held in `LazyLock`s.
///
/// # Arguments
///
/// * `pattern` - The regex pattern to compile
/// * `context` - Name of the static being initialized (used in the panic message)
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}
