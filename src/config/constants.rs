//! Configuration constants.
//!
//! This module defines the fixed names, patterns and text blocks shared by the
//! source reader, the output generator and the history aggregator.

/// Default directory scanned for link-list uploads.
pub const DEFAULT_INPUT_DIR: &str = "__DISAVOW_DATA__/INGEST";
/// Default directory receiving generated disavow files.
pub const DEFAULT_OUTPUT_DIR: &str = "__DISAVOW_DATA__/OUTPUT";
/// Default whitelist file location.
pub const DEFAULT_WHITELIST_FILE: &str = "__DISAVOW_DATA__/whitelist.txt";

// Artifact naming: disavow_<8 hex>_<YYYYMMDD_HHMMSS>.txt
pub const ARTIFACT_PREFIX: &str = "disavow_";
pub const ARTIFACT_SUFFIX: &str = ".txt";
/// Timestamp format embedded in artifact file names.
pub const ARTIFACT_NAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
/// Timestamp format of the `# Generated:` header line.
pub const ARTIFACT_HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Directive prefix used for both IPs and domains in a disavow file.
pub const DOMAIN_DIRECTIVE: &str = "domain:";

/// Dotted-quad pattern. Octet ranges are not checked.
pub const IPV4_PATTERN: &str = r"^(\d{1,3}\.){3}\d{1,3}$";

/// Pattern used to pull URLs out of free-form text lines (scheme in any case).
pub const TEXT_URL_PATTERN: &str = r#"(?i)https?://[^\s<>"')\]]+"#;

/// Keywords that mark a tabular column as the link column (matched against
/// the lower-cased header).
pub const LINK_COLUMN_KEYWORDS: &[&str] = &[
    "link", "url", "page", "página", "pagina", "enlace", "source",
];

/// Separator line used between artifact sections.
pub const SECTION_RULE: &str = "# ============================================";

/// Fixed preamble written at the top of every whitelist file.
pub const WHITELIST_HEADER: &str = "# Domains Whitelist - Disavow Generator
# Add a domain per line (without http:// or www.)
# Lines starting with # are comments

";

