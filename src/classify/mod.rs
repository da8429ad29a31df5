//! Host classification and normalization.
//!
//! Every raw string pulled out of a source file is sorted into one of three
//! disavow targets:
//!
//! - an IPv4 address (`domain:192.0.2.5` in the output)
//! - a bare domain, when the string names nothing beyond a host
//! - a specific URL, when a path, query or fragment follows the host
//!
//! Strings without an `http://`/`https://` scheme are treated as implicit
//! HTTP hosts. Anything whose host is empty, dotless or malformed is dropped,
//! as is any entry with inner whitespace or control characters.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::IPV4_PATTERN;
use crate::utils::compile_regex_unsafe;

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(IPV4_PATTERN, "IPV4_RE"));

/// The category assigned to one raw entry, carrying its normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassifiedTarget {
    /// Dotted-quad host, as written (lower-cased).
    Ip(String),
    /// Host with a leading `www.` removed.
    Domain(String),
    /// The full URL with a lower-cased scheme, `http://` prepended if the
    /// input had none.
    Url(String),
}

impl ClassifiedTarget {
    /// The value the whitelist is checked against: the address or domain
    /// for hosts, the host part for specific URLs.
    pub fn host(&self) -> Option<String> {
        match self {
            ClassifiedTarget::Ip(ip) => Some(ip.clone()),
            ClassifiedTarget::Domain(domain) => Some(domain.clone()),
            ClassifiedTarget::Url(url) => split_url(url).and_then(|(authority, _)| host_of(authority)),
        }
    }
}

/// Classifies one raw entry.
///
/// Returns `None` for anything that cannot be read as a host-bearing URL.
/// Never panics.
///
/// # Examples
///
/// ```
/// use disavow_generator::{classify, ClassifiedTarget};
///
/// assert_eq!(classify("192.168.1.1"), Some(ClassifiedTarget::Ip("192.168.1.1".into())));
/// assert_eq!(classify("http://www.example.com/"), Some(ClassifiedTarget::Domain("example.com".into())));
/// assert_eq!(
///     classify("example.com/page"),
///     Some(ClassifiedTarget::Url("http://example.com/page".into()))
/// );
/// assert_eq!(classify("not a domain"), None);
/// ```
pub fn classify(raw: &str) -> Option<ClassifiedTarget> {
    let raw = raw.trim();
    // A URL target is written out as one line, so it must be one token
    if raw.is_empty() || raw.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return None;
    }

    let url = match http_scheme_len(raw) {
        Some(len) => format!("{}{}", raw[..len].to_ascii_lowercase(), &raw[len..]),
        None => format!("http://{raw}"),
    };

    let (authority, remainder) = split_url(&url)?;
    let host = host_of(authority)?;

    if is_ipv4_literal(&host) {
        return Some(ClassifiedTarget::Ip(host));
    }

    // Only a trailing slash may follow the host for a bare domain
    if remainder.is_empty() || remainder == "/" {
        return Some(ClassifiedTarget::Domain(strip_www(&host).to_string()));
    }

    Some(ClassifiedTarget::Url(url))
}

/// Returns true for dotted-quad strings. Octets are not range-checked, so
/// `999.999.999.999` matches.
pub fn is_ipv4_literal(value: &str) -> bool {
    IPV4_RE.is_match(value)
}

/// Normalizes a domain or IP for comparison and storage: trimmed,
/// lower-cased, leading `www.` removed.
pub fn normalize_domain(value: &str) -> String {
    strip_www(&value.trim().to_lowercase()).to_string()
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Length of a leading `http://` or `https://`, matched in any case.
fn http_scheme_len(value: &str) -> Option<usize> {
    ["http://", "https://"].into_iter().find_map(|scheme| {
        value
            .get(..scheme.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(scheme))
            .map(|_| scheme.len())
    })
}

/// Splits a scheme-bearing URL into its authority and everything after it.
///
/// Done by hand rather than with `url::Url`, which would re-encode the path
/// and query; URL targets are stored exactly as found apart from the scheme.
fn split_url(url: &str) -> Option<(&str, &str)> {
    let (_, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(rest.split_at(end))
}

/// Extracts the lower-cased host from an authority, dropping userinfo and
/// port. Returns `None` if the host is unusable.
fn host_of(authority: &str) -> Option<String> {
    let without_userinfo = match authority.rsplit_once('@') {
        Some((_, host_port)) => host_port,
        None => authority,
    };
    let host = match without_userinfo.split_once(':') {
        Some((host, _port)) => host,
        None => without_userinfo,
    };
    let host = host.to_lowercase();

    if host.is_empty() || !host.contains('.') || !host.chars().all(is_host_char) {
        return None;
    }
    if host.starts_with('.') || host.ends_with('.') || host.contains("..") {
        return None;
    }
    Some(host)
}

fn is_host_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '.' | '-' | '_')
}
