//! File-name checks for user-supplied names.

use crate::config::{ARTIFACT_PREFIX, ARTIFACT_SUFFIX};

/// Returns true if `name` is a bare file name: non-empty, no path separators,
/// not `.`/`..`, and free of control characters.
///
/// Names arriving from the CLI or an upload form are joined onto a managed
/// directory, so anything that could escape it is refused.
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.chars().any(char::is_control)
}

/// Returns true if `name` follows the `disavow_*.txt` artifact convention.
pub fn is_artifact_name(name: &str) -> bool {
    name.len() > ARTIFACT_PREFIX.len() + ARTIFACT_SUFFIX.len()
        && name.starts_with(ARTIFACT_PREFIX)
        && name.ends_with(ARTIFACT_SUFFIX)
}
