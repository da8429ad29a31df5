//! Whitelist matching and persistence.
//!
//! The whitelist is a plain text file with one normalized domain (or IP) per
//! line. Entries exempt themselves and every subdomain: `example.com` covers
//! `sub.example.com` but not `notexample.com`.
//!
//! Writes always rewrite the whole file, sorted and deduplicated. There is no
//! locking, so concurrent editors must be serialized by the caller.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::classify::normalize_domain;
use crate::config::WHITELIST_HEADER;

/// Returns true if `value` equals a whitelist entry or is a subdomain of one.
///
/// `value` is normalized (lower-cased, leading `www.` removed) before
/// matching. IPs go through the same path; in practice only exact matches
/// can hit for them.
pub fn is_whitelisted(value: &str, whitelist: &BTreeSet<String>) -> bool {
    if whitelist.is_empty() {
        return false;
    }
    let normalized = normalize_domain(value);
    if whitelist.contains(&normalized) {
        return true;
    }
    // `a.b.example.com` ends with "." + entry iff the entry is one of the
    // suffixes following a dot
    normalized
        .match_indices('.')
        .any(|(i, _)| whitelist.contains(&normalized[i + 1..]))
}

/// Normalizes a user-supplied whitelist entry.
///
/// Full URLs are reduced to their host. Returns `None` for blanks and for
/// values that would read back as comments.
pub fn normalize_whitelist_entry(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let host = if trimmed.contains("://") {
        match url::Url::parse(trimmed) {
            Ok(parsed) => parsed.host_str().map(str::to_string)?,
            Err(_) => trimmed.to_string(),
        }
    } else {
        trimmed.to_string()
    };

    let normalized = normalize_domain(&host);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Loads the whitelist.
///
/// A missing or unreadable file yields an empty set; comment and blank lines
/// are ignored.
pub fn load_whitelist(path: &Path) -> BTreeSet<String> {
    match fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .filter_map(normalize_whitelist_entry)
            .collect(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No whitelist at {}, using an empty one", path.display());
            BTreeSet::new()
        }
        Err(e) => {
            warn!(
                "Failed to read whitelist {}: {}. Continuing without it.",
                path.display(),
                e
            );
            BTreeSet::new()
        }
    }
}

/// Replaces the whitelist with `entries`.
///
/// Entries are normalized, deduplicated and written sorted after the header
/// block. Returns the set actually written.
pub fn save_whitelist<I, S>(path: &Path, entries: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let normalized: BTreeSet<String> = entries
        .into_iter()
        .filter_map(|e| normalize_whitelist_entry(e.as_ref()))
        .collect();

    let mut content = String::from(WHITELIST_HEADER);
    for entry in &normalized {
        content.push_str(entry);
        content.push('\n');
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write whitelist {}", path.display()))?;
    debug!(
        "Saved {} whitelist entries to {}",
        normalized.len(),
        path.display()
    );
    Ok(normalized)
}

/// Adds one entry. Returns `Ok(false)` if it was blank or already present,
/// in which case the file is left untouched.
pub fn add_to_whitelist(path: &Path, entry: &str) -> Result<bool> {
    let Some(entry) = normalize_whitelist_entry(entry) else {
        return Ok(false);
    };
    let mut whitelist = load_whitelist(path);
    if !whitelist.insert(entry) {
        return Ok(false);
    }
    save_whitelist(path, &whitelist)?;
    Ok(true)
}

/// Removes one entry. Returns `Ok(false)` if it was not present.
pub fn remove_from_whitelist(path: &Path, entry: &str) -> Result<bool> {
    let Some(entry) = normalize_whitelist_entry(entry) else {
        return Ok(false);
    };
    let mut whitelist = load_whitelist(path);
    if !whitelist.remove(&entry) {
        return Ok(false);
    }
    save_whitelist(path, &whitelist)?;
    Ok(true)
}
