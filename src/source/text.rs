//! Plain-text link lists.
//!
//! Accepts both free-form text (URLs are pulled out of each line) and
//! disavow-style `domain:` directives, so an exported disavow file can be fed
//! back in as a source.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{DOMAIN_DIRECTIVE, TEXT_URL_PATTERN};
use crate::error_handling::IngestionError;
use crate::utils::compile_regex_unsafe;

static TEXT_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TEXT_URL_PATTERN, "TEXT_URL_RE"));

/// Reads a text file and extracts its raw entries.
pub fn read_text(path: &Path) -> Result<Vec<String>, IngestionError> {
    let content = fs::read_to_string(path).map_err(|source| IngestionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_text_entries(&content))
}

/// Extracts raw entries from text content, line by line.
///
/// - blank lines and `#` comments are skipped
/// - `domain:<host>` (any case) becomes `http://<host>/` when the host has a dot
/// - every `http(s)://` URL found anywhere else in a line is emitted
/// - a line with no URL that is a single dotted token (`192.0.2.5`,
///   `spam.example`) is emitted unchanged
pub fn extract_text_entries(content: &str) -> Vec<String> {
    let mut entries = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(host) = strip_domain_directive(line) {
            let host = host.trim();
            if host.contains('.') {
                entries.push(format!("http://{host}/"));
            }
            continue;
        }

        let before = entries.len();
        entries.extend(TEXT_URL_RE.find_iter(line).map(|m| m.as_str().to_string()));

        // A line holding nothing but a bare host or IP is taken as-is
        if entries.len() == before && is_bare_host_token(line) {
            entries.push(line.to_string());
        }
    }

    entries
}

fn is_bare_host_token(line: &str) -> bool {
    line.contains('.') && !line.contains(char::is_whitespace) && !line.contains(['<', '>', '"', '\''])
}

fn strip_domain_directive(line: &str) -> Option<&str> {
    let prefix = line.get(..DOMAIN_DIRECTIVE.len())?;
    if prefix.eq_ignore_ascii_case(DOMAIN_DIRECTIVE) {
        Some(&line[DOMAIN_DIRECTIVE.len()..])
    } else {
        None
    }
}
